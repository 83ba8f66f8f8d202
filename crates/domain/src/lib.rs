//! # Haneul ドメイン層
//!
//! 韓国市場向けサービス共通の日付・年齢・レベル計算を提供する。
//!
//! ## 設計方針
//!
//! このクレートは以下の原則に従う:
//!
//! - **値オブジェクト**: 検証済みの不変オブジェクト（例: [`kst::KstDate`]、
//!   [`timestamp::UnixTimestamp`]）として値を表現し、不正な状態を型で排除する
//! - **決定的な時刻計算**: タイムゾーンは KST（UTC+9）固定。ホスト環境の
//!   ロケールやタイムゾーン設定に一切依存しない
//! - **純粋関数**: 年齢計算・変換はすべて入力のみから出力が決まる。
//!   「現在時刻」が必要な操作は [`clock::Clock`] 経由で注入可能
//! - **ドメインエラー**: 検証失敗は [`DomainError`] として必ず呼び出し元へ伝播する
//!
//! ## モジュール構成
//!
//! - [`kst`] - KST への日時分解・暦日・正規形式フォーマット
//! - [`age`] - 満年齢・年計算年齢・数え年の 3 慣習
//! - [`timestamp`] - UNIX タイムスタンプ変換と serde ブリッジ
//! - [`level`] - 学習レベルと推奨年齢のマッピング
//! - [`clock`] - テスト注入可能な時刻プロバイダ
//! - [`error`] - ドメイン層で発生するエラーの定義
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::DateTime;
//! use haneul_domain::age::international_age;
//! use haneul_domain::kst::{KstDate, format_kst};
//!
//! // 表示用フォーマット（KST 固定）
//! let at = DateTime::from_timestamp(1_733_907_600, 0).unwrap();
//! assert_eq!(format_kst(at), "2024-12-11 18:00:00");
//!
//! // 年齢計算
//! let birth = KstDate::parse("2000-03-01")?;
//! let reference = KstDate::from_utc(at);
//! assert_eq!(international_age(birth, reference), 24);
//! # Ok::<(), haneul_domain::DomainError>(())
//! ```

pub mod age;
pub mod clock;
pub mod error;
pub mod kst;
pub mod level;
pub mod timestamp;

pub use error::DomainError;
