//! Dataset Sources
//!
//! DatasetSource の実装（ファイル・HTTP）と、設定値からの取得元の選択

pub mod file_dataset_source;
pub mod http_dataset_source;

use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::DataLoadError;
use crate::domain::repositories::dataset_source::DatasetSource;

use file_dataset_source::FileDatasetSource;
use http_dataset_source::HttpDatasetSource;

/// データセットの場所
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetLocation {
    /// ローカルファイル（`~` は展開される）
    File(String),
    /// `http://` または `https://` のURL
    Http(String),
}

impl DatasetLocation {
    /// 文字列からデータセットの場所を判定する
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            DatasetLocation::Http(location.to_string())
        } else {
            DatasetLocation::File(location.to_string())
        }
    }

    /// 場所に応じた取得元を作成する
    ///
    /// # Errors
    ///
    /// HTTPクライアントの初期化に失敗した場合に `DataLoadError::Transport` を返す
    pub fn open(&self, http_timeout: Duration) -> Result<Arc<dyn DatasetSource>, DataLoadError> {
        match self {
            DatasetLocation::File(path) => Ok(Arc::new(FileDatasetSource::new(path))),
            DatasetLocation::Http(url) => Ok(Arc::new(HttpDatasetSource::new(url, http_timeout)?)),
        }
    }
}
