//! # 学習レベル
//!
//! 学習プログラムの 7 段階レベルと、その表示名・推奨年齢のマッピングを定義する。
//!
//! ## レベル一覧
//!
//! | コード | 表示名 | 推奨満年齢 |
//! |--------|--------|-----------|
//! | `CO` | Cocoon | 5〜6 歳 |
//! | `PS` | Pre-Starter | 7〜8 歳 |
//! | `ST` | Starter | 9〜10 歳 |
//! | `BA` | Basic | 11〜12 歳 |
//! | `JR` | Junior | 13〜15 歳 |
//! | `HJ` | High Junior | 16〜18 歳 |
//! | `AD` | Advanced | 上限なし |
//!
//! ## 使用例
//!
//! ```rust
//! use haneul_domain::level::Level;
//!
//! let level: Level = "JR".parse()?;
//! assert_eq!(level, Level::Junior);
//! assert_eq!(level.label(), "Junior");
//! assert_eq!(level.recommended_international_ages(), &[13, 14, 15]);
//! # Ok::<(), haneul_domain::DomainError>(())
//! ```

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::DomainError;

/// 学習レベル
///
/// 難易度の昇順に 7 段階。外部入出力ではレベルコード（`"CO"` など）の
/// 文字列として表現される。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr, strum::Display,
)]
pub enum Level {
    /// Cocoon（推奨 5〜6 歳）
    #[serde(rename = "CO")]
    #[strum(serialize = "CO")]
    Cocoon,
    /// Pre-Starter（推奨 7〜8 歳）
    #[serde(rename = "PS")]
    #[strum(serialize = "PS")]
    PreStarter,
    /// Starter（推奨 9〜10 歳）
    #[serde(rename = "ST")]
    #[strum(serialize = "ST")]
    Starter,
    /// Basic（推奨 11〜12 歳）
    #[serde(rename = "BA")]
    #[strum(serialize = "BA")]
    Basic,
    /// Junior（推奨 13〜15 歳）
    #[serde(rename = "JR")]
    #[strum(serialize = "JR")]
    Junior,
    /// High Junior（推奨 16〜18 歳）
    #[serde(rename = "HJ")]
    #[strum(serialize = "HJ")]
    HighJunior,
    /// Advanced（推奨年齢の上限なし）
    #[serde(rename = "AD")]
    #[strum(serialize = "AD")]
    Advanced,
}

impl Level {
    /// 全レベル（難易度の昇順）
    pub const ALL: [Level; 7] = [
        Level::Cocoon,
        Level::PreStarter,
        Level::Starter,
        Level::Basic,
        Level::Junior,
        Level::HighJunior,
        Level::Advanced,
    ];

    /// レベルコード（`"CO"` など）を取得する
    pub fn code(&self) -> &'static str {
        (*self).into()
    }

    /// 表示名（`"Cocoon"` など）を取得する
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cocoon => "Cocoon",
            Self::PreStarter => "Pre-Starter",
            Self::Starter => "Starter",
            Self::Basic => "Basic",
            Self::Junior => "Junior",
            Self::HighJunior => "High Junior",
            Self::Advanced => "Advanced",
        }
    }

    /// 推奨対象の満年齢一覧を取得する
    ///
    /// 最上位の `Advanced` には年齢の上限がないため空スライスを返す。
    pub fn recommended_international_ages(&self) -> &'static [i32] {
        match self {
            Self::Cocoon => &[5, 6],
            Self::PreStarter => &[7, 8],
            Self::Starter => &[9, 10],
            Self::Basic => &[11, 12],
            Self::Junior => &[13, 14, 15],
            Self::HighJunior => &[16, 17, 18],
            Self::Advanced => &[],
        }
    }
}

impl std::str::FromStr for Level {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CO" => Ok(Self::Cocoon),
            "PS" => Ok(Self::PreStarter),
            "ST" => Ok(Self::Starter),
            "BA" => Ok(Self::Basic),
            "JR" => Ok(Self::Junior),
            "HJ" => Ok(Self::HighJunior),
            "AD" => Ok(Self::Advanced),
            _ => Err(DomainError::UnknownLevel(s.to_string())),
        }
    }
}
