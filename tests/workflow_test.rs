//! Workflow Integration Tests
//!
//! PredictionWorkflow の統合テスト

use clap::Parser;
use salary_predictor::adapter::config::Config;
use salary_predictor::driver::cli::Args;
use salary_predictor::driver::workflow::PredictionWorkflow;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .to_string_lossy()
        .to_string()
}

/// テスト用のConfigファイルを作成
fn create_test_config(dir: &Path, dataset: &str) -> String {
    let config_path = dir.join("salary-predictor.json");
    let config_content = format!(
        r#"{{
  "dataset": "{}",
  "http_timeout_seconds": 5
}}"#,
        dataset
    );
    fs::write(&config_path, config_content).unwrap();
    config_path.to_string_lossy().to_string()
}

fn prediction_args(config: &str, education: &str, extra: &[&str]) -> Args {
    let mut argv = vec![
        "salary-predictor",
        "--config",
        config,
        "--education",
        education,
        "--experience",
        "6-10",
        "--job-category",
        "software-engineer",
        "--industry",
        "technology",
    ];
    argv.extend_from_slice(extra);
    Args::parse_from(argv)
}

#[tokio::test]
async fn test_workflow_execute_success() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path(), &fixture("minimal-salary-data.json"));

    let args = prediction_args(&config_path, "bachelor", &[]);
    let config = Config::load_or_default(&args.config)
        .unwrap()
        .with_dataset_override(args.dataset.clone());

    let workflow = PredictionWorkflow::new(config);

    let result = workflow.execute(args).await;
    assert!(result.is_ok(), "Workflow should succeed: {:?}", result);
}

#[tokio::test]
async fn test_workflow_execute_json_with_dataset_override() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");
    let config_path = create_test_config(temp_dir.path(), missing.to_str().unwrap());

    let dataset = fixture("minimal-salary-data.json");
    let args = prediction_args(&config_path, "bachelor", &["--dataset", &dataset, "--json"]);
    let config = Config::load_or_default(&args.config)
        .unwrap()
        .with_dataset_override(args.dataset.clone());
    assert_eq!(config.dataset, dataset);

    let workflow = PredictionWorkflow::new(config);

    assert!(workflow.execute(args).await.is_ok());
}

#[tokio::test]
async fn test_workflow_execute_load_failure() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path(), &fixture("malformed.json"));

    let args = prediction_args(&config_path, "bachelor", &[]);
    let config = Config::load(&args.config).unwrap();

    let workflow = PredictionWorkflow::new(config);

    let err = workflow.execute(args).await.unwrap_err();
    assert!(err.to_string().contains("Failed to load salary dataset"));
}

#[tokio::test]
async fn test_workflow_execute_missing_combination() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path(), &fixture("minimal-salary-data.json"));

    let args = prediction_args(&config_path, "phd", &[]);
    let config = Config::load(&args.config).unwrap();

    let workflow = PredictionWorkflow::new(config);

    let err = workflow.execute(args).await.unwrap_err();
    assert!(err.to_string().contains("japan/software-engineer/phd/6-10"));
}

#[test]
fn test_config_defaults_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.json");

    let config = Config::load_or_default(path.to_str().unwrap()).unwrap();

    assert_eq!(config.dataset, "./data/salary-data.json");
    assert_eq!(config.http_timeout_seconds, 30);
}
