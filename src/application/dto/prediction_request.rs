//! # Prediction Request DTO
//!
//! 入力フォームのData Transfer Object

use thiserror::Error;

use crate::domain::entities::categories::{Education, Experience, Industry, JobCategory};
use crate::domain::entities::prediction::PredictionInput;
use crate::domain::errors::UnknownKeyError;

/// 入力検証エラー
///
/// 呼び出し側で検出され、予測エンジンには到達しない
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 未入力の項目がある
    #[error("すべての項目を選択してください（未入力: {}）", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },

    /// 選択肢にない値
    #[error(transparent)]
    UnknownValue(#[from] UnknownKeyError),
}

/// 未検証の予測リクエスト
///
/// フォーム（CLI引数や対話入力）から受け取った生の文字列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionRequest {
    pub education: Option<String>,
    pub experience: Option<String>,
    pub job_category: Option<String>,
    pub industry: Option<String>,
}

impl PredictionRequest {
    /// 4項目すべてを指定してリクエストを作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use salary_predictor::application::dto::prediction_request::PredictionRequest;
    /// use salary_predictor::domain::entities::categories::Experience;
    ///
    /// let input = PredictionRequest::new("master", "3-5", "data-scientist", "finance")
    ///     .validate()
    ///     .unwrap();
    ///
    /// assert_eq!(input.experience, Experience::ThreeToFive);
    /// ```
    pub fn new(
        education: impl Into<String>,
        experience: impl Into<String>,
        job_category: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            education: Some(education.into()),
            experience: Some(experience.into()),
            job_category: Some(job_category.into()),
            industry: Some(industry.into()),
        }
    }

    /// 入力を検証して `PredictionInput` に変換する
    ///
    /// # Errors
    ///
    /// - 未入力（空白のみを含む）の項目がある場合は `ValidationError::Incomplete`
    /// - 選択肢にない値がある場合は `ValidationError::UnknownValue`
    pub fn validate(&self) -> Result<PredictionInput, ValidationError> {
        let fields = [
            (Education::FIELD, &self.education),
            (Experience::FIELD, &self.experience),
            (JobCategory::FIELD, &self.job_category),
            (Industry::FIELD, &self.industry),
        ];

        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| present(value).is_none())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::Incomplete { missing });
        }

        Ok(PredictionInput {
            education: required(&self.education).parse()?,
            experience: required(&self.experience).parse()?,
            job_category: required(&self.job_category).parse()?,
            industry: required(&self.industry).parse()?,
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required(value: &Option<String>) -> &str {
    present(value).unwrap_or_default()
}
