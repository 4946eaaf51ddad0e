//! # Domain Entities
//!
//! エンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **categories**: 国・学歴・経験年数・職種・業界の列挙キー
//! - **ReferenceDataset**: 参照データセット（不変）
//! - **PredictionInput / PredictionResult**: 予測の入力と結果

pub mod categories;
pub mod prediction;
pub mod reference_dataset;
