//! Salary Predictor
//!
//! 日本とアメリカの年収予測CLI

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use salary_predictor::adapter::config::Config;
use salary_predictor::driver::{Args, PredictionWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (CLI --dataset takes precedence)
    let config = Config::load_or_default(&args.config)?.with_dataset_override(args.dataset.clone());

    let workflow = PredictionWorkflow::new(config);

    workflow.execute(args).await
}
