//! # Prediction Engine
//!
//! 年収予測の計算（基本年収の参照・業界補正・税控除・業界平均との比較）

use crate::domain::entities::categories::Country;
use crate::domain::entities::prediction::{
    CountryPrediction, IndustryInfo, PredictionInput, PredictionResult,
};
use crate::domain::entities::reference_dataset::{ReferenceDataset, TaxRates};
use crate::domain::errors::MissingDataError;
use crate::domain::rounding::round_half_up;

/// 年収予測エンジン
///
/// 状態を持たない純粋な計算。同じデータセットと入力からは常に同じ結果を返し、
/// データセットを変更しない。
pub struct PredictionEngine;

impl PredictionEngine {
    /// 日本・アメリカ両国の年収を予測する
    ///
    /// # Errors
    ///
    /// どちらかの国で基本年収または業界平均が欠けている場合に `MissingDataError` を返す。
    /// 部分的な結果は返さない。
    pub fn predict(
        dataset: &ReferenceDataset,
        input: &PredictionInput,
    ) -> Result<PredictionResult, MissingDataError> {
        let japan = Self::predict_country(dataset, Country::Japan, input)?;
        let usa = Self::predict_country(dataset, Country::Usa, input)?;

        Ok(PredictionResult {
            japan,
            usa,
            industry_info: IndustryInfo {
                industry: input.industry,
                description: dataset.description_of(input.industry).to_string(),
            },
        })
    }

    /// 1か国分の予測
    pub fn predict_country(
        dataset: &ReferenceDataset,
        country: Country,
        input: &PredictionInput,
    ) -> Result<CountryPrediction, MissingDataError> {
        let base = dataset.base_salary_of(
            country,
            input.job_category,
            input.education,
            input.experience,
        )?;
        let industry_average = dataset.industry_average_of(country, input.job_category)?;
        let multiplier = dataset.multiplier_of(country, input.industry);

        let gross_salary = round_half_up(base * multiplier);
        let net_salary = Self::net_salary(gross_salary, dataset.tax_rates_of(country));

        Ok(CountryPrediction {
            gross_salary,
            net_salary,
            monthly_net: Self::monthly(net_salary),
            industry_average,
            comparison_percentage: Self::comparison_percentage(gross_salary, industry_average),
            industry_multiplier: multiplier,
        })
    }

    /// 一律税率で控除した手取り年収
    ///
    /// ```
    /// use salary_predictor::domain::entities::reference_dataset::TaxRates;
    /// use salary_predictor::domain::services::prediction_engine::PredictionEngine;
    ///
    /// let rates = TaxRates::Japan { income_tax: 0.15, social_insurance: 0.15 };
    /// assert_eq!(PredictionEngine::net_salary(5_500_000, &rates), 3_850_000);
    /// ```
    pub fn net_salary(gross_salary: i64, tax_rates: &TaxRates) -> i64 {
        round_half_up(gross_salary as f64 * (1.0 - tax_rates.total_rate()))
    }

    /// 手取り月収（12分割）
    pub fn monthly(net_salary: i64) -> i64 {
        round_half_up(net_salary as f64 / 12.0)
    }

    /// 業界平均との差（%）
    ///
    /// `industry_average > 0` はデータセット読み込み時に保証される。
    pub fn comparison_percentage(gross_salary: i64, industry_average: f64) -> i64 {
        round_half_up((gross_salary as f64 - industry_average) / industry_average * 100.0)
    }
}
