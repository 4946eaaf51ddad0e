//! File Dataset Source
//!
//! DatasetSourceのファイルシステム実装

use async_trait::async_trait;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::adapter::document::dataset_from_str;
use crate::domain::entities::reference_dataset::ReferenceDataset;
use crate::domain::errors::DataLoadError;
use crate::domain::repositories::dataset_source::DatasetSource;

/// JSONファイルからデータセットを読み込む取得元
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    /// 新しい取得元を作成（`~` はホームディレクトリに展開）
    pub fn new(path: &str) -> Self {
        let expanded = shellexpand::tilde(path);
        Self {
            path: PathBuf::from(expanded.as_ref()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルからデータセットを読み込む（同期処理）
    fn load_sync(path: &Path) -> Result<ReferenceDataset, DataLoadError> {
        let content = fs::read_to_string(path).map_err(|e| classify_io_error(path, e))?;
        debug!("Read {} bytes from {}", content.len(), path.display());

        dataset_from_str(&content)
    }
}

/// I/Oエラーを DataLoadError に分類する
fn classify_io_error(path: &Path, e: io::Error) -> DataLoadError {
    match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::NotFound(path.display().to_string()),
        // UTF-8 として読めない
        io::ErrorKind::InvalidData => {
            DataLoadError::Parse(format!("{}: {}", path.display(), e))
        }
        _ => DataLoadError::Transport(format!("{}: {}", path.display(), e)),
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<ReferenceDataset, DataLoadError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| DataLoadError::Transport(format!("Failed to spawn blocking task: {}", e)))?
    }
}
