//! # ReferenceDataset Entity
//!
//! 年収予測の参照データセット（読み込み後は不変）

use serde::Serialize;
use std::collections::BTreeMap;

use super::categories::{Country, Education, Experience, Industry, JobCategory};
use crate::domain::errors::{DataLoadError, MissingDataError};
use crate::domain::rounding::round_half_up;

/// 業界補正係数が未定義の場合に使う値（補正なし）
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// 基本年収テーブルの複合キー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SalaryKey {
    pub country: Country,
    pub job_category: JobCategory,
    pub education: Education,
    pub experience: Experience,
}

impl SalaryKey {
    pub fn new(
        country: Country,
        job_category: JobCategory,
        education: Education,
        experience: Experience,
    ) -> Self {
        Self {
            country,
            job_category,
            education,
            experience,
        }
    }

    /// 全ての組み合わせを列挙する
    pub fn all() -> impl Iterator<Item = SalaryKey> {
        Country::ALL.iter().flat_map(|&country| {
            JobCategory::ALL.iter().flat_map(move |&job_category| {
                Education::ALL.iter().flat_map(move |&education| {
                    Experience::ALL
                        .iter()
                        .map(move |&experience| {
                            SalaryKey::new(country, job_category, education, experience)
                        })
                })
            })
        })
    }

    fn missing(&self) -> MissingDataError {
        MissingDataError::BaseSalary {
            country: self.country,
            job_category: self.job_category,
            education: self.education,
            experience: self.experience,
        }
    }
}

/// 国別の税率
///
/// 各項目を単純合計した一律税率で控除する（累進課税ではない）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TaxRates {
    #[serde(rename_all = "camelCase")]
    Japan {
        income_tax: f64,
        social_insurance: f64,
    },
    #[serde(rename_all = "camelCase")]
    Usa {
        federal_tax: f64,
        state_tax: f64,
        social_security: f64,
    },
}

impl TaxRates {
    /// 税率が適用される国
    pub fn country(&self) -> Country {
        match self {
            TaxRates::Japan { .. } => Country::Japan,
            TaxRates::Usa { .. } => Country::Usa,
        }
    }

    /// 税率の内訳（名前, 率）
    pub fn components(&self) -> Vec<(&'static str, f64)> {
        match *self {
            TaxRates::Japan {
                income_tax,
                social_insurance,
            } => vec![("incomeTax", income_tax), ("socialInsurance", social_insurance)],
            TaxRates::Usa {
                federal_tax,
                state_tax,
                social_security,
            } => vec![
                ("federalTax", federal_tax),
                ("stateTax", state_tax),
                ("socialSecurity", social_security),
            ],
        }
    }

    /// 合計税率
    pub fn total_rate(&self) -> f64 {
        self.components().iter().map(|(_, rate)| rate).sum()
    }
}

/// 為替レート
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRates {
    pub usd_to_jpy: f64,
}

impl CurrencyRates {
    /// 米ドル金額を円換算する（表示時の派生計算）
    ///
    /// ```
    /// use salary_predictor::domain::entities::reference_dataset::CurrencyRates;
    ///
    /// let rates = CurrencyRates { usd_to_jpy: 150.0 };
    /// assert_eq!(rates.usd_to_jpy(90_000), 13_500_000);
    /// ```
    pub fn usd_to_jpy(&self, usd: i64) -> i64 {
        round_half_up(usd as f64 * self.usd_to_jpy)
    }

    /// 円金額を米ドル換算する
    pub fn jpy_to_usd(&self, jpy: i64) -> i64 {
        round_half_up(jpy as f64 / self.usd_to_jpy)
    }
}

/// 参照データセット
///
/// 国・職種・学歴・経験年数ごとの基本年収と、業界補正・業界平均・税率・為替レート。
/// [`ReferenceDatasetBuilder`] で構築時に不変条件を検証する。
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDataset {
    base_salaries: BTreeMap<SalaryKey, f64>,
    industry_multipliers: BTreeMap<(Country, Industry), f64>,
    industry_averages: BTreeMap<(Country, JobCategory), f64>,
    industry_descriptions: BTreeMap<Industry, String>,
    japan_tax: TaxRates,
    usa_tax: TaxRates,
    currency_rates: CurrencyRates,
}

impl ReferenceDataset {
    /// ビルダーを作成
    pub fn builder() -> ReferenceDatasetBuilder {
        ReferenceDatasetBuilder::default()
    }

    /// 基本年収を取得する（変換なし、フォールバックなし）
    ///
    /// # Errors
    ///
    /// 組み合わせがテーブルに存在しない場合に `MissingDataError::BaseSalary` を返す
    pub fn base_salary_of(
        &self,
        country: Country,
        job_category: JobCategory,
        education: Education,
        experience: Experience,
    ) -> Result<f64, MissingDataError> {
        let key = SalaryKey::new(country, job_category, education, experience);
        self.base_salaries
            .get(&key)
            .copied()
            .ok_or_else(|| key.missing())
    }

    /// 業界補正係数を取得する
    ///
    /// 未定義の場合は [`NEUTRAL_MULTIPLIER`]（1.0）を返す。失敗しない。
    pub fn multiplier_of(&self, country: Country, industry: Industry) -> f64 {
        self.industry_multipliers
            .get(&(country, industry))
            .copied()
            .unwrap_or(NEUTRAL_MULTIPLIER)
    }

    /// 職種の業界平均年収を取得する
    ///
    /// # Errors
    ///
    /// 未定義の場合に `MissingDataError::IndustryAverage` を返す
    pub fn industry_average_of(
        &self,
        country: Country,
        job_category: JobCategory,
    ) -> Result<f64, MissingDataError> {
        self.industry_averages
            .get(&(country, job_category))
            .copied()
            .ok_or(MissingDataError::IndustryAverage {
                country,
                job_category,
            })
    }

    /// 業界の説明文（未定義なら空文字列）
    pub fn description_of(&self, industry: Industry) -> &str {
        self.industry_descriptions
            .get(&industry)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn tax_rates_of(&self, country: Country) -> &TaxRates {
        match country {
            Country::Japan => &self.japan_tax,
            Country::Usa => &self.usa_tax,
        }
    }

    pub fn currency_rates(&self) -> &CurrencyRates {
        &self.currency_rates
    }

    /// 基本年収テーブルの登録数
    pub fn base_salary_count(&self) -> usize {
        self.base_salaries.len()
    }

    /// 基本年収テーブルに存在しない組み合わせ
    pub fn missing_base_salaries(&self) -> Vec<SalaryKey> {
        SalaryKey::all()
            .filter(|key| !self.base_salaries.contains_key(key))
            .collect()
    }
}

/// [`ReferenceDataset`] のビルダー
#[derive(Debug, Default)]
pub struct ReferenceDatasetBuilder {
    base_salaries: BTreeMap<SalaryKey, f64>,
    industry_multipliers: BTreeMap<(Country, Industry), f64>,
    industry_averages: BTreeMap<(Country, JobCategory), f64>,
    industry_descriptions: BTreeMap<Industry, String>,
    tax_rates: BTreeMap<Country, TaxRates>,
    usd_to_jpy: Option<f64>,
}

impl ReferenceDatasetBuilder {
    pub fn base_salary(
        mut self,
        country: Country,
        job_category: JobCategory,
        education: Education,
        experience: Experience,
        salary: f64,
    ) -> Self {
        self.base_salaries.insert(
            SalaryKey::new(country, job_category, education, experience),
            salary,
        );
        self
    }

    pub fn industry_multiplier(mut self, country: Country, industry: Industry, value: f64) -> Self {
        self.industry_multipliers.insert((country, industry), value);
        self
    }

    pub fn industry_average(
        mut self,
        country: Country,
        job_category: JobCategory,
        average: f64,
    ) -> Self {
        self.industry_averages.insert((country, job_category), average);
        self
    }

    pub fn industry_description(mut self, industry: Industry, description: impl Into<String>) -> Self {
        self.industry_descriptions.insert(industry, description.into());
        self
    }

    /// 税率を登録する（国は税率の種類から決まる）
    pub fn tax_rates(mut self, rates: TaxRates) -> Self {
        self.tax_rates.insert(rates.country(), rates);
        self
    }

    pub fn usd_to_jpy(mut self, rate: f64) -> Self {
        self.usd_to_jpy = Some(rate);
        self
    }

    /// 不変条件を検証してデータセットを構築する
    ///
    /// # Errors
    ///
    /// 税率が [0, 1) の範囲外、補正係数・年収・平均・為替レートが正でない、
    /// または税率・為替レートが未登録の場合に `DataLoadError::Invalid` を返す
    pub fn build(mut self) -> Result<ReferenceDataset, DataLoadError> {
        for (key, salary) in &self.base_salaries {
            ensure_positive(
                *salary,
                || {
                    format!(
                        "salaryData.{}.{}.{}.{}",
                        key.country, key.job_category, key.education, key.experience
                    )
                },
            )?;
        }

        for ((country, industry), multiplier) in &self.industry_multipliers {
            ensure_positive(*multiplier, || {
                format!("industryMultipliers.{}.{}", country, industry)
            })?;
        }

        for ((country, job_category), average) in &self.industry_averages {
            ensure_positive(*average, || {
                format!("industryAverages.{}.{}", country, job_category)
            })?;
        }

        let japan_tax = self.take_tax_rates(Country::Japan)?;
        let usa_tax = self.take_tax_rates(Country::Usa)?;

        let usd_to_jpy = self
            .usd_to_jpy
            .ok_or_else(|| DataLoadError::Invalid("currencyRates.usdToJpy is missing".into()))?;
        ensure_positive(usd_to_jpy, || "currencyRates.usdToJpy".to_string())?;

        Ok(ReferenceDataset {
            base_salaries: self.base_salaries,
            industry_multipliers: self.industry_multipliers,
            industry_averages: self.industry_averages,
            industry_descriptions: self.industry_descriptions,
            japan_tax,
            usa_tax,
            currency_rates: CurrencyRates { usd_to_jpy },
        })
    }

    fn take_tax_rates(&mut self, country: Country) -> Result<TaxRates, DataLoadError> {
        let rates = self
            .tax_rates
            .remove(&country)
            .ok_or_else(|| DataLoadError::Invalid(format!("taxRates.{} is missing", country)))?;

        for (name, rate) in rates.components() {
            if !(0.0..1.0).contains(&rate) {
                return Err(DataLoadError::Invalid(format!(
                    "taxRates.{}.{} must be in [0, 1), got {}",
                    country, name, rate
                )));
            }
        }

        let total = rates.total_rate();
        if total >= 1.0 {
            return Err(DataLoadError::Invalid(format!(
                "taxRates.{} total must be below 1, got {}",
                country, total
            )));
        }

        Ok(rates)
    }
}

fn ensure_positive(value: f64, path: impl FnOnce() -> String) -> Result<(), DataLoadError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DataLoadError::Invalid(format!(
            "{} must be positive, got {}",
            path(),
            value
        )))
    }
}
