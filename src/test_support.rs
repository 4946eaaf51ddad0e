//! テスト用の共通データ

use crate::domain::entities::categories::{Country, Education, Experience, Industry, JobCategory};
use crate::domain::entities::prediction::PredictionInput;
use crate::domain::entities::reference_dataset::{ReferenceDataset, TaxRates};

/// ソフトウェアエンジニア・大卒・6-10年・テクノロジー業界の入力
pub fn sample_input() -> PredictionInput {
    PredictionInput::new(
        Education::Bachelor,
        Experience::SixToTen,
        JobCategory::SoftwareEngineer,
        Industry::Technology,
    )
}

/// `sample_input` の組み合わせだけを持つデータセット
pub fn sample_dataset() -> ReferenceDataset {
    ReferenceDataset::builder()
        .base_salary(
            Country::Japan,
            JobCategory::SoftwareEngineer,
            Education::Bachelor,
            Experience::SixToTen,
            5_000_000.0,
        )
        .base_salary(
            Country::Usa,
            JobCategory::SoftwareEngineer,
            Education::Bachelor,
            Experience::SixToTen,
            75_000.0,
        )
        .industry_multiplier(Country::Japan, Industry::Technology, 1.1)
        .industry_multiplier(Country::Usa, Industry::Technology, 1.2)
        .industry_average(Country::Japan, JobCategory::SoftwareEngineer, 6_000_000.0)
        .industry_average(Country::Usa, JobCategory::SoftwareEngineer, 100_000.0)
        .industry_description(Industry::Technology, "DX需要により高い成長率")
        .tax_rates(TaxRates::Japan {
            income_tax: 0.15,
            social_insurance: 0.15,
        })
        .tax_rates(TaxRates::Usa {
            federal_tax: 0.22,
            state_tax: 0.05,
            social_security: 0.0765,
        })
        .usd_to_jpy(150.0)
        .build()
        .expect("sample dataset is valid")
}
