//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{bail, Context, Result};
use log::info;
use std::io::Write;
use tokio::io::BufReader;

use crate::adapter::config::Config;
use crate::adapter::sources::DatasetLocation;
use crate::application::prediction_service::PredictionService;
use crate::domain::repositories::dataset_source::DatasetSource;

use super::cli::Args;
use super::render::{render_load_failure, render_prediction};
use super::session::InteractiveSession;

/// Salary Prediction Workflow
pub struct PredictionWorkflow {
    config: Config,
}

impl PredictionWorkflow {
    /// Create a new workflow instance with the resolved configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the prediction workflow
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting salary predictor...");
        info!("Dataset: {}", self.config.dataset);

        // Dataset source selected by location (file path or http(s) URL)
        let source = DatasetLocation::parse(&self.config.dataset)
            .open(self.config.http_timeout())
            .context("Failed to create dataset source")?;

        let service = PredictionService::initialize(source).await;

        if args.interactive {
            let mut session = InteractiveSession::new(service, args.json);
            return session
                .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
                .await;
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        run_once(&service, &args, &mut out)
    }
}

/// 1回だけ予測して結果を出力する
///
/// # Errors
///
/// データセットが読み込めていない場合、入力が不正な場合、予測に失敗した場合にエラーを返す
pub fn run_once<S, W>(service: &PredictionService<S>, args: &Args, out: &mut W) -> Result<()>
where
    S: DatasetSource + ?Sized,
    W: Write,
{
    if let Some(error) = service.last_error() {
        write!(out, "{}", render_load_failure(&service.source(), error))?;
        bail!("Failed to load salary dataset: {}", error);
    }

    let input = args.to_request().validate()?;
    let result = service.predict(&input)?;

    let dataset = service
        .dataset()
        .context("Salary dataset is not loaded")?;
    let output = render_prediction(&input, &result, dataset.currency_rates(), args.json)
        .context("Failed to render prediction")?;

    write!(out, "{}", output)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::prediction_request::ValidationError;
    use crate::domain::errors::{DataLoadError, PredictionError};
    use crate::domain::repositories::dataset_source::MockDatasetSource;
    use crate::test_support::sample_dataset;
    use clap::Parser;
    use std::sync::Arc;

    fn ready_service() -> PredictionService<MockDatasetSource> {
        let mut source = MockDatasetSource::new();
        source
            .expect_describe()
            .return_const("./data/salary-data.json".to_string());
        PredictionService::new(Arc::new(source), sample_dataset())
    }

    async fn failed_service(error: DataLoadError) -> PredictionService<MockDatasetSource> {
        let mut source = MockDatasetSource::new();
        source
            .expect_describe()
            .return_const("./data/salary-data.json".to_string());
        source.expect_fetch().times(1).return_once(move || Err(error));
        PredictionService::initialize(Arc::new(source)).await
    }

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["salary-predictor"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    const SAMPLE_FIELDS: [&str; 8] = [
        "--education",
        "bachelor",
        "--experience",
        "6-10",
        "--job-category",
        "software-engineer",
        "--industry",
        "technology",
    ];

    #[test]
    fn test_run_once_text() {
        let mut out = Vec::new();

        run_once(&ready_service(), &args(&SAMPLE_FIELDS), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("予測年収（額面）: ¥5,500,000"));
        assert!(out.contains("手取り年収:       $58,815 (¥8,822,250)"));
    }

    #[test]
    fn test_run_once_json() {
        let mut argv = SAMPLE_FIELDS.to_vec();
        argv.push("--json");
        let mut out = Vec::new();

        run_once(&ready_service(), &args(&argv), &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["usa"]["netSalary"], 58_815);
        assert_eq!(json["industryInfo"]["industry"], "technology");
    }

    #[test]
    fn test_run_once_incomplete_request() {
        let mut out = Vec::new();

        let err = run_once(&ready_service(), &args(&["--education", "bachelor"]), &mut out)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ValidationError>(),
            Some(ValidationError::Incomplete { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_once_missing_data() {
        let mut argv = SAMPLE_FIELDS.to_vec();
        argv[3] = "0-2";
        let mut out = Vec::new();

        let err = run_once(&ready_service(), &args(&argv), &mut out).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PredictionError>(),
            Some(PredictionError::MissingData(_))
        ));
    }

    #[tokio::test]
    async fn test_run_once_after_failed_load() {
        let service =
            failed_service(DataLoadError::NotFound("./data/salary-data.json".into())).await;
        let mut out = Vec::new();

        let err = run_once(&service, &args(&SAMPLE_FIELDS), &mut out).unwrap_err();

        assert!(err.to_string().contains("Failed to load salary dataset"));
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("初期化に失敗しました"));
        assert!(out.contains("トラブルシューティング"));
    }
}
