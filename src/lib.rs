//! # Salary Predictor
//!
//! 学歴・経験年数・職種・業界から日本とアメリカの年収を予測するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 参照データセットと予測エンジン（外部依存なし）
//! - **Application層**: データセットの読み込みと予測受付（ユースケース）
//! - **Adapter層**: 外部システムとの統合（ファイル, HTTP, 設定ファイル）
//! - **Driver層**: CLI/対話セッション、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に標準入出力依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;

#[cfg(test)]
pub(crate) mod test_support;
