//! Salary Data Document
//!
//! データセットJSON（salary-data.json）の永続化表現とドメインへの変換

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::entities::categories::{Country, Education, Experience, Industry, JobCategory};
use crate::domain::entities::reference_dataset::{ReferenceDataset, TaxRates};
use crate::domain::errors::DataLoadError;

type ExperienceTable = BTreeMap<Experience, f64>;
type EducationTable = BTreeMap<Education, ExperienceTable>;
type JobTable = BTreeMap<JobCategory, EducationTable>;

/// 国ごとの値（日本・アメリカとも必須）
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PerCountry<T> {
    pub japan: T,
    pub usa: T,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JapanTaxRatesJson {
    pub income_tax: f64,
    pub social_insurance: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsaTaxRatesJson {
    pub federal_tax: f64,
    pub state_tax: f64,
    pub social_security: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaxRatesJson {
    pub japan: JapanTaxRatesJson,
    pub usa: UsaTaxRatesJson,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRatesJson {
    pub usd_to_jpy: f64,
}

/// salary-data.json のドキュメント全体
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryDataDocument {
    pub salary_data: PerCountry<JobTable>,
    #[serde(default = "empty_per_country")]
    pub industry_multipliers: PerCountry<BTreeMap<Industry, f64>>,
    pub industry_averages: PerCountry<BTreeMap<JobCategory, f64>>,
    #[serde(default)]
    pub industry_descriptions: BTreeMap<Industry, String>,
    pub tax_rates: TaxRatesJson,
    pub currency_rates: CurrencyRatesJson,
}

fn empty_per_country<T: Default>() -> PerCountry<T> {
    PerCountry {
        japan: T::default(),
        usa: T::default(),
    }
}

impl SalaryDataDocument {
    /// JSON文字列をパースする
    ///
    /// # Errors
    ///
    /// JSONが不正、構造が一致しない、または未知のキーを含む場合に `DataLoadError::Parse` を返す
    pub fn parse(content: &str) -> Result<Self, DataLoadError> {
        serde_json::from_str(content).map_err(|e| DataLoadError::Parse(e.to_string()))
    }

    /// バイト列をパースする
    pub fn parse_slice(content: &[u8]) -> Result<Self, DataLoadError> {
        serde_json::from_slice(content).map_err(|e| DataLoadError::Parse(e.to_string()))
    }

    /// ドメインのデータセットに変換する（不変条件を検証）
    ///
    /// # Errors
    ///
    /// 数値の不変条件を満たさない場合に `DataLoadError::Invalid` を返す
    pub fn into_dataset(self) -> Result<ReferenceDataset, DataLoadError> {
        let mut builder = ReferenceDataset::builder();

        let salary_tables = [
            (Country::Japan, self.salary_data.japan),
            (Country::Usa, self.salary_data.usa),
        ];
        for (country, jobs) in salary_tables {
            for (job_category, educations) in jobs {
                for (education, experiences) in educations {
                    for (experience, salary) in experiences {
                        builder =
                            builder.base_salary(country, job_category, education, experience, salary);
                    }
                }
            }
        }

        let multipliers = [
            (Country::Japan, self.industry_multipliers.japan),
            (Country::Usa, self.industry_multipliers.usa),
        ];
        for (country, table) in multipliers {
            for (industry, multiplier) in table {
                builder = builder.industry_multiplier(country, industry, multiplier);
            }
        }

        let averages = [
            (Country::Japan, self.industry_averages.japan),
            (Country::Usa, self.industry_averages.usa),
        ];
        for (country, table) in averages {
            for (job_category, average) in table {
                builder = builder.industry_average(country, job_category, average);
            }
        }

        for (industry, description) in self.industry_descriptions {
            builder = builder.industry_description(industry, description);
        }

        let japan = self.tax_rates.japan;
        let usa = self.tax_rates.usa;

        builder
            .tax_rates(TaxRates::Japan {
                income_tax: japan.income_tax,
                social_insurance: japan.social_insurance,
            })
            .tax_rates(TaxRates::Usa {
                federal_tax: usa.federal_tax,
                state_tax: usa.state_tax,
                social_security: usa.social_security,
            })
            .usd_to_jpy(self.currency_rates.usd_to_jpy)
            .build()
    }
}

/// JSON文字列をパースしてデータセットに変換する
pub fn dataset_from_str(content: &str) -> Result<ReferenceDataset, DataLoadError> {
    SalaryDataDocument::parse(content)?.into_dataset()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const MINIMAL_DOCUMENT: &str = r#"{
        "salaryData": {
            "japan": {
                "software-engineer": { "bachelor": { "6-10": 5000000 } }
            },
            "usa": {
                "software-engineer": { "bachelor": { "6-10": 75000 } }
            }
        },
        "industryMultipliers": {
            "japan": { "technology": 1.1 },
            "usa": { "technology": 1.2 }
        },
        "industryAverages": {
            "japan": { "software-engineer": 6000000 },
            "usa": { "software-engineer": 100000 }
        },
        "industryDescriptions": {
            "technology": "DX需要により高い成長率"
        },
        "taxRates": {
            "japan": { "incomeTax": 0.15, "socialInsurance": 0.15 },
            "usa": { "federalTax": 0.22, "stateTax": 0.05, "socialSecurity": 0.0765 }
        },
        "currencyRates": { "usdToJpy": 150 }
    }"#;

    #[test]
    fn test_parse_minimal_document() {
        let dataset = dataset_from_str(MINIMAL_DOCUMENT).unwrap();

        assert_eq!(dataset, crate::test_support::sample_dataset());
        assert_eq!(
            dataset
                .base_salary_of(
                    Country::Usa,
                    JobCategory::SoftwareEngineer,
                    Education::Bachelor,
                    Experience::SixToTen
                )
                .unwrap(),
            75_000.0
        );
        assert_eq!(dataset.currency_rates().usd_to_jpy, 150.0);
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = dataset_from_str("{ not json").unwrap_err();
        assert!(matches!(err, DataLoadError::Parse(_)));
    }

    #[test]
    fn test_parse_unknown_industry_key() {
        let content = MINIMAL_DOCUMENT.replace(
            "\"technology\": \"DX",
            "\"space\": \"DX",
        );

        let err = dataset_from_str(&content).unwrap_err();

        assert!(matches!(err, DataLoadError::Parse(msg) if msg.contains("space")));
    }

    #[test]
    fn test_parse_missing_section() {
        let err = dataset_from_str(r#"{ "salaryData": { "japan": {}, "usa": {} } }"#).unwrap_err();
        assert!(matches!(err, DataLoadError::Parse(_)));
    }

    #[test]
    fn test_invalid_tax_rate() {
        let content = MINIMAL_DOCUMENT.replace("\"incomeTax\": 0.15", "\"incomeTax\": 1.5");

        let err = dataset_from_str(&content).unwrap_err();

        assert!(matches!(err, DataLoadError::Invalid(msg) if msg.contains("incomeTax")));
    }

    #[test]
    fn test_multipliers_and_descriptions_are_optional() {
        let content = r#"{
            "salaryData": { "japan": {}, "usa": {} },
            "industryAverages": { "japan": {}, "usa": {} },
            "taxRates": {
                "japan": { "incomeTax": 0.1, "socialInsurance": 0.1 },
                "usa": { "federalTax": 0.1, "stateTax": 0.0, "socialSecurity": 0.05 }
            },
            "currencyRates": { "usdToJpy": 145.5 }
        }"#;

        let dataset = dataset_from_str(content).unwrap();

        assert_eq!(dataset.multiplier_of(Country::Japan, Industry::Finance), 1.0);
        assert_eq!(dataset.description_of(Industry::Finance), "");
        assert_eq!(dataset.base_salary_count(), 0);
    }

    #[test]
    fn test_parse_slice() {
        let document = SalaryDataDocument::parse_slice(MINIMAL_DOCUMENT.as_bytes()).unwrap();
        assert_eq!(document.currency_rates.usd_to_jpy, 150.0);
    }
}
