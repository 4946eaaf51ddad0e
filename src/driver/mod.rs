//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 特徴
//!
//! - サービスを組み立てて予測フローを起動
//! - 設定とCLI引数から取得元を選択（依存性注入）
//! - ユーザーとのインターフェース
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **render**: 予測結果の表示
//! - **session**: 対話セッション
//! - **workflow**: ワークフロー全体のオーケストレーション

pub mod cli;
pub mod render;
pub mod session;
pub mod workflow;

pub use cli::Args;
pub use session::InteractiveSession;
pub use workflow::PredictionWorkflow;
