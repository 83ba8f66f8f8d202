//! # API 結果エンベロープ
//!
//! 外部 API との間で使う統一結果形式を提供する。成功は
//! `{ "status": true, "value": T }`、失敗は `{ "status": false, "error": E }`
//! として直列化される。
//!
//! ## 設計方針
//!
//! - **表現可能な状態を 2 つに限定**: 「成功かつ error あり」のような
//!   矛盾した形は型としても JSON としても存在できない
//! - **[`Result`] との相互変換**: クレート内部では標準の `Result` を使い、
//!   API 境界でのみこの型に変換する

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

/// 成功または失敗を表す API 結果
///
/// # 使用例
///
/// ```rust
/// use haneul_shared::ApiResult;
///
/// let ok: ApiResult<i32, String> = ApiResult::success(42);
/// let json = serde_json::to_string(&ok).unwrap();
///
/// assert_eq!(json, r#"{"status":true,"value":42}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResult<T, E> {
    /// 成功（値を保持）
    Success(T),
    /// 失敗（エラーを保持）
    Failure(E),
}

impl<T, E> ApiResult<T, E> {
    /// 成功の結果を作成する
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// 失敗の結果を作成する
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// 成功かどうか
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// 失敗かどうか
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// 成功の値への参照を取得する
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// 失敗のエラーへの参照を取得する
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// 標準の [`Result`] へ変換する
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for ApiResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> Serialize for ApiResult<T, E>
where
    T: Serialize,
    E: Serialize,
{
    /// `{ "status": bool, "value" | "error": ... }` 形式で直列化する
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ApiResult", 2)?;
        match self {
            Self::Success(value) => {
                state.serialize_field("status", &true)?;
                state.serialize_field("value", value)?;
            }
            Self::Failure(error) => {
                state.serialize_field("status", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

/// 復元時の中間表現
///
/// `value` / `error` は `Option` のため、フィールド欠落時は `None` になる
/// （serde の既定動作。`T` / `E` に `Default` を要求しない）。
/// `status` と実フィールドの組み合わせ検証は
/// [`ApiResult`] の `Deserialize` 実装側で行う。
#[derive(Deserialize)]
struct Envelope<T, E> {
    status: bool,
    value:  Option<T>,
    error:  Option<E>,
}

impl<'de, T, E> Deserialize<'de> for ApiResult<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let envelope = Envelope::<T, E>::deserialize(deserializer)?;
        match envelope {
            Envelope {
                status: true,
                value: Some(value),
                error: None,
            } => Ok(Self::Success(value)),
            Envelope {
                status: false,
                value: None,
                error: Some(error),
            } => Ok(Self::Failure(error)),
            Envelope { status: true, .. } => Err(serde::de::Error::custom(
                "status が true の場合は value フィールドのみ必要です",
            )),
            Envelope { status: false, .. } => Err(serde::de::Error::custom(
                "status が false の場合は error フィールドのみ必要です",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    // 直列化のテスト

    #[test]
    fn test_成功は_status_true_と_value_で直列化される() {
        let result: ApiResult<&str, String> = ApiResult::success("hello");

        let json = serde_json::to_string(&result).unwrap();

        assert_eq!(json, r#"{"status":true,"value":"hello"}"#);
    }

    #[test]
    fn test_失敗は_status_false_と_error_で直列化される() {
        let result: ApiResult<i32, &str> = ApiResult::failure("not found");

        let json = serde_json::to_string(&result).unwrap();

        assert_eq!(json, r#"{"status":false,"error":"not found"}"#);
    }

    #[test]
    fn test_構造体ペイロードも直列化できる() {
        #[derive(Serialize)]
        struct Payload {
            id: u32,
        }

        let result: ApiResult<Payload, String> = ApiResult::success(Payload { id: 7 });

        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "status": true, "value": { "id": 7 } })
        );
    }

    // 復元のテスト

    #[test]
    fn test_status_true_は成功として復元される() {
        let result: ApiResult<i32, String> =
            serde_json::from_str(r#"{"status":true,"value":42}"#).unwrap();

        assert_eq!(result, ApiResult::Success(42));
    }

    #[test]
    fn test_status_false_は失敗として復元される() {
        let result: ApiResult<i32, String> =
            serde_json::from_str(r#"{"status":false,"error":"boom"}"#).unwrap();

        assert_eq!(result, ApiResult::Failure("boom".to_string()));
    }

    #[test]
    fn test_default_を実装しない型でも復元できる() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Payload {
            id: u32,
        }

        #[derive(Debug, PartialEq, Deserialize)]
        struct Problem {
            code: String,
        }

        let success: ApiResult<Payload, Problem> =
            serde_json::from_str(r#"{"status":true,"value":{"id":7}}"#).unwrap();
        let failure: ApiResult<Payload, Problem> =
            serde_json::from_str(r#"{"status":false,"error":{"code":"E01"}}"#).unwrap();

        assert_eq!(success, ApiResult::Success(Payload { id: 7 }));
        assert_eq!(
            failure,
            ApiResult::Failure(Problem {
                code: "E01".to_string(),
            })
        );
    }

    #[rstest]
    #[case(r#"{"status":true,"error":"boom"}"#, "成功なのに error を持つ")]
    #[case(r#"{"status":false,"value":42}"#, "失敗なのに value を持つ")]
    #[case(r#"{"status":true}"#, "value がない")]
    #[case(r#"{"status":false}"#, "error がない")]
    #[case(r#"{"status":true,"value":1,"error":"x"}"#, "両方を持つ")]
    fn test_矛盾した形は復元できない(#[case] json: &str, #[case] _reason: &str) {
        let result: Result<ApiResult<i32, String>, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_直列化と復元のラウンドトリップ() {
        let original: ApiResult<i32, String> = ApiResult::success(42);

        let json = serde_json::to_string(&original).unwrap();
        let restored: ApiResult<i32, String> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
    }

    // 変換・判定のテスト

    #[test]
    fn test_result_から変換できる() {
        let ok: Result<i32, String> = Ok(1);
        let err: Result<i32, String> = Err("boom".to_string());

        assert_eq!(ApiResult::from(ok), ApiResult::Success(1));
        assert_eq!(ApiResult::from(err), ApiResult::Failure("boom".to_string()));
    }

    #[test]
    fn test_result_へ変換できる() {
        let success: ApiResult<i32, String> = ApiResult::success(1);
        let failure: ApiResult<i32, String> = ApiResult::failure("boom".to_string());

        assert_eq!(success.into_result(), Ok(1));
        assert_eq!(failure.into_result(), Err("boom".to_string()));
    }

    #[test]
    fn test_判定メソッドとアクセサ() {
        let success: ApiResult<i32, String> = ApiResult::success(1);
        let failure: ApiResult<i32, String> = ApiResult::failure("boom".to_string());

        assert!(success.is_success());
        assert!(!success.is_failure());
        assert_eq!(success.value(), Some(&1));
        assert_eq!(success.error(), None);

        assert!(failure.is_failure());
        assert_eq!(failure.value(), None);
        assert_eq!(failure.error(), Some(&"boom".to_string()));
    }
}
