//! # Haneul 共有ユーティリティ
//!
//! このクレートは、Haneul
//! を利用するサービス全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - いずれの関数も入力を変更せず、新しい値を返す
//! - ログ初期化などバイナリ側でのみ必要な機能はフィーチャでオプトインする
//!
//! ## モジュール構成
//!
//! - [`api_result`] - 外部 API との統一結果エンベロープ
//! - [`collections`] - 配列・マップの組み替えユーティリティ
//! - [`runtime_env`] - 環境変数による実行環境判定
//! - [`observability`] - トレーシング初期化とログ形式設定

pub mod api_result;
pub mod collections;
pub mod observability;
pub mod runtime_env;

pub use api_result::ApiResult;
pub use runtime_env::RuntimeEnv;
