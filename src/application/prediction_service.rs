//! # Prediction Service
//!
//! 読み込み済みデータセットを保持し、予測リクエストを受け付けるサービス
//!
//! データセットの読み込みに失敗している間は予測を受け付けない。
//! `reload` で起動時と同じ「読み込み → 受付開始」の手順を再実行できる。

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::use_cases::load_dataset::LoadDatasetUseCase;
use crate::domain::entities::prediction::{PredictionInput, PredictionResult};
use crate::domain::entities::reference_dataset::ReferenceDataset;
use crate::domain::errors::{DataLoadError, PredictionError};
use crate::domain::repositories::dataset_source::DatasetSource;
use crate::domain::services::prediction_engine::PredictionEngine;

/// サービスの状態
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceStatus {
    /// 予測を受け付け可能
    Ready {
        source: String,
        loaded_at: DateTime<Utc>,
        base_salary_entries: usize,
    },
    /// 直前の読み込みが失敗した
    Failed { source: String, error: DataLoadError },
}

enum DatasetState {
    Ready {
        dataset: ReferenceDataset,
        loaded_at: DateTime<Utc>,
    },
    Failed(DataLoadError),
}

/// 年収予測サービス
pub struct PredictionService<S: DatasetSource + ?Sized> {
    loader: LoadDatasetUseCase<S>,
    state: DatasetState,
}

impl<S: DatasetSource + ?Sized> PredictionService<S> {
    /// 読み込み済みのデータセットでサービスを作成
    ///
    /// # Arguments
    ///
    /// * `source` - `reload` で使う取得元
    /// * `dataset` - 読み込み済みのデータセット
    pub fn new(source: Arc<S>, dataset: ReferenceDataset) -> Self {
        Self {
            loader: LoadDatasetUseCase::new(source),
            state: DatasetState::Ready {
                dataset,
                loaded_at: Utc::now(),
            },
        }
    }

    /// 取得元からデータセットを読み込んでサービスを作成
    ///
    /// 読み込みに失敗してもサービスは返す。その場合は `status()` が `Failed` になり、
    /// `reload` が成功するまで予測を受け付けない。
    pub async fn initialize(source: Arc<S>) -> Self {
        let loader = LoadDatasetUseCase::new(source);
        let state = Self::load_state(&loader).await;
        Self { loader, state }
    }

    /// データセットを再読み込みする
    ///
    /// # Errors
    ///
    /// 読み込みに失敗した場合に `DataLoadError` を返す。
    /// このときサービスは受付停止状態になる。
    pub async fn reload(&mut self) -> Result<(), DataLoadError> {
        self.state = Self::load_state(&self.loader).await;
        match &self.state {
            DatasetState::Ready { .. } => Ok(()),
            DatasetState::Failed(e) => Err(e.clone()),
        }
    }

    /// 年収を予測する
    ///
    /// # Errors
    ///
    /// - データセットが利用できない場合は `PredictionError::NotReady`
    /// - データが欠けている場合は `PredictionError::MissingData`
    pub fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, PredictionError> {
        match &self.state {
            DatasetState::Ready { dataset, .. } => Ok(PredictionEngine::predict(dataset, input)?),
            DatasetState::Failed(e) => Err(PredictionError::NotReady(e.to_string())),
        }
    }

    /// 取得元の説明（パスやURL）
    pub fn source(&self) -> String {
        self.loader.source_description()
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, DatasetState::Ready { .. })
    }

    /// 読み込み済みのデータセット（受付停止中は `None`）
    pub fn dataset(&self) -> Option<&ReferenceDataset> {
        match &self.state {
            DatasetState::Ready { dataset, .. } => Some(dataset),
            DatasetState::Failed(_) => None,
        }
    }

    /// 直前の読み込みエラー
    pub fn last_error(&self) -> Option<&DataLoadError> {
        match &self.state {
            DatasetState::Ready { .. } => None,
            DatasetState::Failed(e) => Some(e),
        }
    }

    pub fn status(&self) -> ServiceStatus {
        let source = self.source();
        match &self.state {
            DatasetState::Ready { dataset, loaded_at } => ServiceStatus::Ready {
                source,
                loaded_at: *loaded_at,
                base_salary_entries: dataset.base_salary_count(),
            },
            DatasetState::Failed(error) => ServiceStatus::Failed {
                source,
                error: error.clone(),
            },
        }
    }

    async fn load_state(loader: &LoadDatasetUseCase<S>) -> DatasetState {
        match loader.execute().await {
            Ok(dataset) => DatasetState::Ready {
                dataset,
                loaded_at: Utc::now(),
            },
            Err(e) => DatasetState::Failed(e),
        }
    }
}
