//! # 実行環境判定
//!
//! 環境変数 `APP_ENV` から実行環境（test / development / production）を読み取り、
//! 環境ごとの分岐を型安全に行うための列挙型を提供する。
//!
//! ## 設計方針
//!
//! - **フォールバックしない**: 未設定・不正値は即エラー。暗黙のデフォルトで
//!   本番向け処理が開発環境で動く事故を防ぐ
//! - **起動時に 1 回だけ読む**: 判定結果は `Copy` な列挙型として
//!   アプリケーション起動時に確定させ、以降は値として引き回す
//!
//! ## 使用例
//!
//! ```rust
//! use haneul_shared::runtime_env::RuntimeEnv;
//!
//! let env: RuntimeEnv = "development".parse()?;
//!
//! assert!(env.is_development());
//! assert!(!env.is_production());
//! # Ok::<(), haneul_shared::runtime_env::RuntimeEnvError>(())
//! ```

use thiserror::Error;

/// 実行環境の読み取りに使う環境変数名
pub const ENV_VAR: &str = "APP_ENV";

/// 実行環境の判定エラー
#[derive(Debug, Error)]
pub enum RuntimeEnvError {
    /// 環境変数が未設定
    #[error("環境変数 APP_ENV が設定されていません")]
    NotSet,

    /// 未定義の環境名
    #[error("不正な実行環境です（test / development / production のみ有効）: {0}")]
    Unknown(String),
}

/// 実行環境
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    /// テスト実行環境
    Test,
    /// 開発環境
    Development,
    /// 本番環境
    Production,
}

impl RuntimeEnv {
    /// 環境変数 `APP_ENV` から実行環境を読み取る
    ///
    /// # エラー
    ///
    /// - 未設定の場合は `RuntimeEnvError::NotSet`
    /// - `test` / `development` / `production` 以外の値の場合は
    ///   `RuntimeEnvError::Unknown`
    pub fn from_env() -> Result<Self, RuntimeEnvError> {
        match std::env::var(ENV_VAR) {
            Ok(value) => value.parse(),
            Err(_) => Err(RuntimeEnvError::NotSet),
        }
    }

    /// 環境名（`"test"` など）を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// テスト環境かどうか
    pub fn is_test(&self) -> bool {
        *self == Self::Test
    }

    /// 開発環境かどうか
    pub fn is_development(&self) -> bool {
        *self == Self::Development
    }

    /// 本番環境かどうか
    pub fn is_production(&self) -> bool {
        *self == Self::Production
    }
}

impl std::str::FromStr for RuntimeEnv {
    type Err = RuntimeEnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "test" => Ok(Self::Test),
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            _ => Err(RuntimeEnvError::Unknown(s.to_string())),
        }
    }
}

impl std::fmt::Display for RuntimeEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("test", RuntimeEnv::Test)]
    #[case("development", RuntimeEnv::Development)]
    #[case("production", RuntimeEnv::Production)]
    fn test_定義済みの環境名を変換できる(#[case] input: &str, #[case] expected: RuntimeEnv) {
        assert_eq!(input.parse::<RuntimeEnv>().unwrap(), expected);
    }

    #[rstest]
    #[case("staging", "未定義の環境名")]
    #[case("Production", "大文字")]
    #[case("", "空文字列")]
    fn test_未定義の環境名は拒否される(#[case] input: &str, #[case] _reason: &str) {
        let result = input.parse::<RuntimeEnv>();

        assert!(matches!(result, Err(RuntimeEnvError::Unknown(_))));
    }

    #[test]
    fn test_判定メソッドは自身の環境のみ真を返す() {
        let env = RuntimeEnv::Development;

        assert!(env.is_development());
        assert!(!env.is_test());
        assert!(!env.is_production());
    }

    #[test]
    fn test_環境名の文字列表現は往復する() {
        for env in [
            RuntimeEnv::Test,
            RuntimeEnv::Development,
            RuntimeEnv::Production,
        ] {
            assert_eq!(env.as_str().parse::<RuntimeEnv>().unwrap(), env);
        }
    }

    #[test]
    fn test_display_は環境名をそのまま出力する() {
        assert_eq!(RuntimeEnv::Production.to_string(), "production");
    }

    #[test]
    fn test_未設定のエラーメッセージは変数名を含む() {
        let error = RuntimeEnvError::NotSet;

        assert!(error.to_string().contains("APP_ENV"));
    }
}
