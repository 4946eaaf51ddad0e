//! # Domain Services
//!
//! - **PredictionEngine**: 年収予測の計算

pub mod prediction_engine;
