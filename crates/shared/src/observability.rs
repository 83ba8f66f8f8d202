//! # Observability 基盤
//!
//! このライブラリを組み込む各サービスが共通で使うトレーシング初期化を提供する。
//!
//! ## 設計方針
//!
//! - **出力形式は環境で決める**: 環境変数 `LOG_FORMAT` の明示指定を最優先し、
//!   未指定なら実行環境（[`RuntimeEnv`]）から妥当な形式を導出できる
//! - **ライブラリはログを初期化しない**: 初期化本体（[`init_tracing`]）は
//!   バイナリ側でのみ必要なため、`observability` フィーチャでオプトインする
//!
//! ## 使用例
//!
//! ```rust
//! use haneul_shared::RuntimeEnv;
//! use haneul_shared::observability::{LogFormat, TracingConfig};
//!
//! // 本番環境では JSON、それ以外では Pretty を既定とする
//! let format = LogFormat::for_runtime_env(RuntimeEnv::Production);
//! let config = TracingConfig::new("age-api", format);
//!
//! assert_eq!(config.log_format, LogFormat::Json);
//! ```

use crate::runtime_env::RuntimeEnv;

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON 形式（本番環境向け）
    Json,
    /// 人間が読みやすい形式（開発環境向け）
    #[default]
    Pretty,
}

impl LogFormat {
    /// 文字列からログ形式をパースする
    ///
    /// 対応する値は `"json"` と `"pretty"` のみ（大文字小文字を区別する）。
    /// それ以外の値は [`Pretty`](LogFormat::Pretty) にフォールバックし、
    /// stderr に警告を出力する。ログ形式の誤設定でプロセスを
    /// 起動不能にはしない。
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            other => {
                eprintln!("WARNING: unrecognized LOG_FORMAT={other:?}, using pretty");
                Self::Pretty
            }
        }
    }

    /// 環境変数 `LOG_FORMAT` から読み取る
    ///
    /// 未設定の場合は [`Pretty`](LogFormat::Pretty) をデフォルトとする。
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT") {
            Ok(val) => Self::parse(&val),
            Err(_) => Self::default(),
        }
    }

    /// 実行環境から妥当なログ形式を導出する
    ///
    /// 本番環境ではログ収集基盤向けに JSON、テスト・開発環境では
    /// 人間が読む前提の Pretty を返す。`LOG_FORMAT` が明示されている場合は
    /// そちら（[`LogFormat::from_env`]）を優先すること。
    pub fn for_runtime_env(env: RuntimeEnv) -> Self {
        match env {
            RuntimeEnv::Production => Self::Json,
            RuntimeEnv::Test | RuntimeEnv::Development => Self::Pretty,
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// サービス名（起動ログの `service` フィールドに出力）
    pub service_name: String,
    /// ログ出力形式
    pub log_format:   LogFormat,
}

impl TracingConfig {
    /// 新しい設定を作成する
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }

    /// 環境変数から設定を読み取る
    ///
    /// `LOG_FORMAT` 環境変数で出力形式を決定する。
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::new(service_name, LogFormat::from_env())
    }
}

/// トレーシングを初期化する
///
/// `RUST_LOG` 環境変数でログレベルを制御可能。
/// 未設定の場合は `"info,haneul=debug"` をデフォルトとする。
///
/// エラー発生箇所の span 情報を保持するため
/// [`tracing_error::ErrorLayer`] を常に組み込む。
///
/// JSON モードでは以下のフィールドがトップレベルに出力される:
/// - `timestamp`, `level`, `target`, `message`
#[cfg(feature = "observability")]
pub fn init_tracing(config: TracingConfig) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,haneul=debug".into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_error::ErrorLayer::default())
        .with(fmt_layer)
        .init();

    tracing::debug!(
        service = %config.service_name,
        log_format = ?config.log_format,
        "tracing を初期化しました"
    );
}
