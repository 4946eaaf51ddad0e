//! Configuration
//!
//! 設定ファイル（JSON）の読み込み

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_DATASET: &str = "./data/salary-data.json";
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// データセットのパスまたはURL
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// HTTP取得時のタイムアウト（秒）
    #[serde(default = "default_http_timeout_seconds")]
    pub http_timeout_seconds: u64,
}

fn default_dataset() -> String {
    DEFAULT_DATASET.to_string()
}

fn default_http_timeout_seconds() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            http_timeout_seconds: default_http_timeout_seconds(),
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// # Errors
    ///
    /// ファイルの読み込みまたはJSONのパースに失敗した場合にエラーを返す
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .context(format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .context(format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// 設定ファイルを読み込む（存在しなければデフォルト設定）
    pub fn load_or_default(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        if !Path::new(expanded.as_ref()).exists() {
            info!("No config file found at {}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// CLIで指定されたデータセットで上書き
    pub fn with_dataset_override(mut self, dataset: Option<String>) -> Self {
        if let Some(dataset) = dataset {
            self.dataset = dataset;
        }
        self
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }
}
