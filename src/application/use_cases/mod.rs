//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **LoadDatasetUseCase**: 参照データセットの読み込み

pub mod load_dataset;
