//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてビジネスフローを実現
//! - Repository traitに依存（実装には依存しない）
//! - 外部システムの詳細は知らない
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object（入力フォームの検証）
//! - **use_cases**: ユースケース（データセットの読み込み）
//! - **prediction_service**: 読み込み済みデータセットを保持し、予測を受け付けるサービス

pub mod dto;
pub mod prediction_service;
pub mod use_cases;
