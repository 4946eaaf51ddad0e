//! # Prediction Entities
//!
//! 予測の入力と結果

use serde::Serialize;

use super::categories::{Country, Education, Experience, Industry, JobCategory};

/// 予測入力（4項目すべて必須）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionInput {
    pub education: Education,
    pub experience: Experience,
    pub job_category: JobCategory,
    pub industry: Industry,
}

impl PredictionInput {
    pub fn new(
        education: Education,
        experience: Experience,
        job_category: JobCategory,
        industry: Industry,
    ) -> Self {
        Self {
            education,
            experience,
            job_category,
            industry,
        }
    }
}

/// 国別の予測結果（金額は現地通貨）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryPrediction {
    /// 業界補正後の額面年収
    pub gross_salary: i64,
    /// 手取り年収
    pub net_salary: i64,
    /// 手取り月収
    pub monthly_net: i64,
    /// 職種の業界平均年収
    pub industry_average: f64,
    /// 業界平均との差（%、符号付き）
    pub comparison_percentage: i64,
    /// 適用した業界補正係数
    pub industry_multiplier: f64,
}

/// 業界情報
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryInfo {
    pub industry: Industry,
    pub description: String,
}

/// 日本・アメリカ両国の予測結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub japan: CountryPrediction,
    pub usa: CountryPrediction,
    pub industry_info: IndustryInfo,
}

impl PredictionResult {
    /// 国を指定して結果を取得
    pub fn for_country(&self, country: Country) -> &CountryPrediction {
        match country {
            Country::Japan => &self.japan,
            Country::Usa => &self.usa,
        }
    }
}
