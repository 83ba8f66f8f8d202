//! # ドメイン層エラー定義
//!
//! 日付・年齢・レベル計算で発生するドメイン固有の例外状態を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **入力値の保持**: どの入力が拒否されたかをエラーメッセージに含め、
//!   呼び出し側でのデバッグを容易にする
//!
//! ## エラーの種類
//!
//! | エラー種別 | 発生箇所 | 用途 |
//! |-----------|---------|------|
//! | `InvalidDate` | [`crate::kst::KstDate`] | 日付文字列の形式・暦検証の失敗 |
//! | `UnknownLevel` | [`crate::level::Level`] | 未定義のレベルコード |
//!
//! ## 使用例
//!
//! ```rust
//! use haneul_domain::DomainError;
//! use haneul_domain::kst::KstDate;
//!
//! fn birth_date(input: &str) -> Result<KstDate, DomainError> {
//!     // 形式違反・暦に存在しない日付はここで弾かれる
//!     KstDate::parse(input)
//! }
//!
//! assert!(birth_date("2000-03-01").is_ok());
//! assert!(matches!(birth_date("2021-02-30"), Err(DomainError::InvalidDate(_))));
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// 入力値の検証失敗を表現する。検証は値オブジェクトの生成時に一度だけ行い、
/// 生成後の値は常に有効であることを型で保証する。
///
/// # 設計判断
///
/// - `thiserror` を使用し、`std::error::Error` トレイトを自動実装
/// - 各バリアントに `#[error(...)]` で人間可読なメッセージを定義
/// - エラーは内部で握りつぶさず、必ず呼び出し元まで伝播させる
#[derive(Debug, Error)]
pub enum DomainError {
    /// 日付の検証エラー
    ///
    /// 入力文字列が `YYYY-MM-DD` 形式に一致しない、
    /// または暦上存在しない日付を表す場合に使用する。
    ///
    /// # 例
    ///
    /// - `"2021-3-1"`: ゼロ埋めなし（形式違反）
    /// - `"2021-02-30"`: 2 月 30 日は存在しない（暦違反）
    /// - `"20210301"`: 区切り文字なし（形式違反）
    #[error("不正な日付です（YYYY-MM-DD 形式の暦上有効な日付のみ受け付けます）: {0}")]
    InvalidDate(String),

    /// 不明なレベルコード
    ///
    /// 定義済みのレベルコード（`CO` / `PS` / `ST` / `BA` / `JR` / `HJ` / `AD`）
    /// 以外の文字列をレベルに変換しようとした場合に使用する。
    #[error("不明なレベルコードです: {0}")]
    UnknownLevel(String),
}
