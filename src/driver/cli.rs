//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::application::dto::prediction_request::PredictionRequest;

/// 学歴・経験年数・職種・業界から日本とアメリカの年収を予測するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "salary-predictor")]
#[command(about = "Predict annual salary in Japan and the USA", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./salary-predictor.json")]
    pub config: String,

    /// Dataset path or http(s) URL (overrides config)
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// Education level (high-school, vocational, bachelor, master, phd)
    #[arg(long)]
    pub education: Option<String>,

    /// Years of experience (0-2, 3-5, 6-10, 11-15, 16-20, 20+)
    #[arg(long)]
    pub experience: Option<String>,

    /// Job category (software-engineer, data-scientist, ...)
    #[arg(long)]
    pub job_category: Option<String>,

    /// Industry (technology, finance, ...)
    #[arg(long)]
    pub industry: Option<String>,

    /// Print the prediction as JSON
    #[arg(long)]
    pub json: bool,

    /// Start an interactive session
    #[arg(short, long)]
    pub interactive: bool,
}

impl Args {
    /// フォーム入力として予測リクエストを組み立てる
    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest {
            education: self.education.clone(),
            experience: self.experience.clone(),
            job_category: self.job_category.clone(),
            industry: self.industry.clone(),
        }
    }
}
