//! # KST（韓国標準時）日時分解・フォーマット
//!
//! UTC の瞬間を韓国標準時（UTC+9）の暦フィールドへ分解し、
//! 正規形式の文字列として表示するための型と関数を定義する。
//!
//! ## 設計方針
//!
//! - **固定オフセット**: 韓国は夏時間を採用していないため、タイムゾーン
//!   データベースに依存せず [`FixedOffset`] 定数 1 つで決定的に変換する
//! - **ホスト環境非依存**: プロセスのロケールやタイムゾーン設定が何であっても、
//!   同じ入力からは常に同じ出力を返す
//! - **正規形式は 1 つ**: 表示形式は `YYYY-MM-DD HH:mm:ss`（24 時間制）のみ。
//!   読み取り（[`KstDate::parse`]）と書き出し（`Display`）が同じ形式を共有する
//!
//! ## 含まれる型・関数
//!
//! | 型 / 関数 | 役割 |
//! |----------|------|
//! | [`KST`] | UTC+9 固定オフセット定数 |
//! | [`KstDayInfo`] | 瞬間の KST 分解ビュー（年月日・曜日・時分秒） |
//! | [`KstDate`] | 検証済みの KST 暦日（年齢計算などの入力） |
//! | [`format_kst`] | `YYYY-MM-DD HH:mm:ss` 形式への文字列化 |
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::DateTime;
//! use haneul_domain::kst::{KstDate, KstDayInfo, format_kst};
//!
//! // 2024-12-11T09:00:00Z は KST では同日 18 時
//! let at = DateTime::from_timestamp(1_733_907_600, 0).unwrap();
//! assert_eq!(format_kst(at), "2024-12-11 18:00:00");
//!
//! let info = KstDayInfo::from_utc(at);
//! assert_eq!((info.year, info.month, info.day), (2024, 12, 11));
//! assert_eq!(info.weekday, 3); // 水曜日
//!
//! // 文字列からの日付生成は形式と暦の両方を検証する
//! let birth = KstDate::parse("2000-03-01")?;
//! assert_eq!(birth.to_string(), "2000-03-01");
//! # Ok::<(), haneul_domain::DomainError>(())
//! ```

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::DomainError;
use crate::clock::Clock;

// =========================================================================
// KST 定数
// =========================================================================

/// 韓国標準時（UTC+9）の固定オフセット
///
/// 韓国は夏時間を採用していないため、固定オフセットで完全に表現できる。
pub const KST: FixedOffset = FixedOffset::east_opt(9 * 3600).unwrap();

// =========================================================================
// KstDayInfo（KST 分解ビュー）
// =========================================================================

/// UTC の瞬間を KST の暦フィールドへ分解したビュー
///
/// ホストのタイムゾーン設定とは無関係に、常に UTC+9 で計算される。
/// 年齢計算や表示用フォーマットの基礎となる読み取り専用のスナップショット。
///
/// # 不変条件
///
/// - `month` は 1〜12、`day` は 1〜31
/// - `weekday` は 0（日曜日）〜 6（土曜日）
/// - `hour` は 0〜23、`minute` / `second` は 0〜59
///
/// # 使用例
///
/// ```rust
/// use chrono::DateTime;
/// use haneul_domain::kst::KstDayInfo;
///
/// // UTC では 11/14 深夜だが、KST では翌 11/15 の朝
/// let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
/// let info = KstDayInfo::from_utc(at);
///
/// assert_eq!((info.year, info.month, info.day), (2023, 11, 15));
/// assert_eq!((info.hour, info.minute, info.second), (7, 13, 20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KstDayInfo {
    /// 西暦年
    pub year:    i32,
    /// 月（1〜12）
    pub month:   u32,
    /// 日（1〜31）
    pub day:     u32,
    /// 曜日（0 = 日曜日 〜 6 = 土曜日）
    pub weekday: u32,
    /// 時（0〜23、24 時間制）
    pub hour:    u32,
    /// 分（0〜59）
    pub minute:  u32,
    /// 秒（0〜59）
    pub second:  u32,
}

impl KstDayInfo {
    /// UTC の瞬間を KST の暦フィールドへ分解する
    ///
    /// サブ秒精度は分解時に切り捨てられる。
    pub fn from_utc(at: DateTime<Utc>) -> Self {
        let kst = at.with_timezone(&KST);
        Self {
            year:    kst.year(),
            month:   kst.month(),
            day:     kst.day(),
            weekday: kst.weekday().num_days_from_sunday(),
            hour:    kst.hour(),
            minute:  kst.minute(),
            second:  kst.second(),
        }
    }

    /// 現在時刻を KST で分解する
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// 注入されたクロックの現在時刻を KST で分解する
    ///
    /// テストで固定時刻を使いたい場合は [`crate::clock::FixedClock`] を渡す。
    pub fn now_with(clock: &dyn Clock) -> Self {
        Self::from_utc(clock.now())
    }
}

impl std::fmt::Display for KstDayInfo {
    /// 正規形式 `YYYY-MM-DD HH:mm:ss` で出力する
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

// =========================================================================
// フォーマット関数
// =========================================================================

/// UTC の瞬間を KST の正規形式 `YYYY-MM-DD HH:mm:ss` で文字列化する
///
/// ロケール依存のフォーマット機構は使用せず、分解済みフィールドを
/// 手動で桁埋めするため、実行環境によらず同じ文字列が得られる。
///
/// # 使用例
///
/// ```rust
/// use chrono::DateTime;
/// use haneul_domain::kst::format_kst;
///
/// let at = DateTime::from_timestamp(1_733_907_600, 0).unwrap();
/// assert_eq!(format_kst(at), "2024-12-11 18:00:00");
/// ```
pub fn format_kst(at: DateTime<Utc>) -> String {
    KstDayInfo::from_utc(at).to_string()
}

/// 現在時刻を KST の正規形式で文字列化する
pub fn format_kst_now() -> String {
    format_kst(Utc::now())
}

/// 注入されたクロックの現在時刻を KST の正規形式で文字列化する
pub fn format_kst_now_with(clock: &dyn Clock) -> String {
    format_kst(clock.now())
}

// =========================================================================
// KstDate（KST 暦日）
// =========================================================================

/// KST の暦日（値オブジェクト）
///
/// 年齢計算の入力となる「日付」を表す。生成経路は 2 つあり、
/// それぞれ検証の厳しさが異なる:
///
/// - [`KstDate::parse`]: 文字列入力。`YYYY-MM-DD` の形式検証と
///   暦上の有効性検証の両方を通過した場合のみ生成される
/// - [`KstDate::from_utc`]: 瞬間からの変換。値は構築済みの
///   [`DateTime`] 由来であり常に有効なため、追加の検証は行わない
///
/// # 不変条件
///
/// - 保持する日付は常に暦上有効（2 月 30 日などは存在しない）
///
/// # 使用例
///
/// ```rust
/// use haneul_domain::kst::KstDate;
///
/// let date = KstDate::parse("2000-03-01")?;
/// assert_eq!(date.year(), 2000);
/// assert_eq!(date.month(), 3);
/// assert_eq!(date.day(), 1);
///
/// // ゼロ埋めなしは形式違反として拒否される
/// assert!(KstDate::parse("2000-3-1").is_err());
/// # Ok::<(), haneul_domain::DomainError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KstDate(NaiveDate);

impl KstDate {
    /// `YYYY-MM-DD` 形式の文字列から日付を作成する
    ///
    /// # バリデーション
    ///
    /// - 長さ 10 文字、5 文字目と 8 文字目がダッシュ、他は ASCII 数字
    ///   （`2021-3-1` のようなゼロ埋めなしは不可）
    /// - 暦上有効な日付であること（`2021-02-30` は不可）
    ///
    /// # エラー
    ///
    /// いずれかの検証に失敗した場合は `DomainError::InvalidDate` を返す。
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let bytes = value.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
        if !shape_ok {
            return Err(DomainError::InvalidDate(value.to_string()));
        }

        // 形式検証済みのため各フィールドは必ず数値として読める
        let (Ok(year), Ok(month), Ok(day)) = (
            value[0..4].parse::<i32>(),
            value[5..7].parse::<u32>(),
            value[8..10].parse::<u32>(),
        ) else {
            return Err(DomainError::InvalidDate(value.to_string()));
        };

        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            return Err(DomainError::InvalidDate(value.to_string()));
        };
        Ok(Self(date))
    }

    /// 年・月・日の数値から日付を作成する
    ///
    /// # エラー
    ///
    /// 暦上存在しない組み合わせの場合は `DomainError::InvalidDate` を返す。
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            return Err(DomainError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02}"
            )));
        };
        Ok(Self(date))
    }

    /// UTC の瞬間を KST に変換し、その暦日を取り出す
    ///
    /// 構築済みの [`DateTime`] は常に有効な日付を持つため、
    /// 文字列入力と異なり追加の検証は行わない。
    pub fn from_utc(at: DateTime<Utc>) -> Self {
        Self(at.with_timezone(&KST).date_naive())
    }

    /// KST での今日の日付を返す
    pub fn today() -> Self {
        Self::from_utc(Utc::now())
    }

    /// 注入されたクロックの現在時刻から KST での今日の日付を返す
    pub fn today_with(clock: &dyn Clock) -> Self {
        Self::from_utc(clock.now())
    }

    /// 西暦年を取得する
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 月（1〜12）を取得する
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// 日（1〜31）を取得する
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// 曜日（0 = 日曜日 〜 6 = 土曜日）を取得する
    pub fn weekday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// 内部の [`NaiveDate`] を取得する
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl std::str::FromStr for KstDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for KstDate {
    /// 正規形式 `YYYY-MM-DD` で出力する
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl Serialize for KstDate {
    /// 正規形式 `YYYY-MM-DD` の文字列として直列化する
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for KstDate {
    /// 文字列から復元する。[`KstDate::parse`] と同じ厳密な検証を適用する
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
