//! # Load Dataset Use Case
//!
//! 参照データセット読み込みユースケース

use log::{error, info, warn};
use std::sync::Arc;

use crate::domain::entities::reference_dataset::ReferenceDataset;
use crate::domain::errors::DataLoadError;
use crate::domain::repositories::dataset_source::DatasetSource;

/// 欠落している組み合わせをログに列挙する最大件数
const MAX_LOGGED_GAPS: usize = 5;

/// データセット読み込みユースケース
///
/// 取得元から1回だけデータセットを読み込む。リトライは行わない。
pub struct LoadDatasetUseCase<S: DatasetSource + ?Sized> {
    source: Arc<S>,
}

impl<S: DatasetSource + ?Sized> LoadDatasetUseCase<S> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `source` - データセットの取得元
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// 取得元の説明
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// データセットを読み込む
    ///
    /// 基本年収テーブルの欠落は警告としてログに出すが、読み込みは成功とする
    /// （欠落した組み合わせは予測時に `MissingDataError` になる）。
    ///
    /// # Errors
    ///
    /// 取得元の `DataLoadError` をそのまま返す
    pub async fn execute(&self) -> Result<ReferenceDataset, DataLoadError> {
        let description = self.source.describe();
        info!("Loading salary dataset from {}", description);

        let dataset = match self.source.fetch().await {
            Ok(dataset) => dataset,
            Err(e) => {
                error!(
                    "Failed to load salary dataset from {} ({}): {}",
                    description,
                    e.kind(),
                    e
                );
                return Err(e);
            }
        };

        info!(
            "Loaded salary dataset: {} base salary entries",
            dataset.base_salary_count()
        );

        let missing = dataset.missing_base_salaries();
        if !missing.is_empty() {
            warn!(
                "Salary table is incomplete: {} combinations missing",
                missing.len()
            );
            for key in missing.iter().take(MAX_LOGGED_GAPS) {
                warn!(
                    "  - {}/{}/{}/{}",
                    key.country, key.job_category, key.education, key.experience
                );
            }
        }

        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::dataset_source::MockDatasetSource;
    use crate::test_support::sample_dataset;

    #[tokio::test]
    async fn test_load_success() {
        let mut source = MockDatasetSource::new();
        source.expect_describe().return_const("memory".to_string());
        source
            .expect_fetch()
            .times(1)
            .returning(|| Ok(sample_dataset()));

        let use_case = LoadDatasetUseCase::new(Arc::new(source));
        let dataset = use_case.execute().await.unwrap();

        assert_eq!(dataset, sample_dataset());
    }

    #[tokio::test]
    async fn test_load_failure_is_propagated() {
        let mut source = MockDatasetSource::new();
        source.expect_describe().return_const("memory".to_string());
        source
            .expect_fetch()
            .times(1)
            .returning(|| Err(DataLoadError::NotFound("salary-data.json".into())));

        let use_case = LoadDatasetUseCase::new(Arc::new(source));
        let err = use_case.execute().await.unwrap_err();

        assert_eq!(err, DataLoadError::NotFound("salary-data.json".into()));
    }

    #[tokio::test]
    async fn test_source_description() {
        let mut source = MockDatasetSource::new();
        source
            .expect_describe()
            .return_const("/data/salary-data.json".to_string());

        let use_case = LoadDatasetUseCase::new(Arc::new(source));

        assert_eq!(use_case.source_description(), "/data/salary-data.json");
    }
}
