//! # DTO
//!
//! - **PredictionRequest**: 未検証の入力フォーム

pub mod prediction_request;
