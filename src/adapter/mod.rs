//! Adapter Layer
//!
//! 外部システム（ファイルシステム, HTTP）との統合

pub mod config;
pub mod document;
pub mod sources;
