//! # Dataset Source Trait
//!
//! 参照データセットの取得を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::reference_dataset::ReferenceDataset;
use crate::domain::errors::DataLoadError;

/// データセットの取得元
///
/// 1つの構造化ドキュメントを取得し、検証済みの `ReferenceDataset` に変換する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// ログ・ステータス表示用の取得元の説明（パスやURL）
    fn describe(&self) -> String;

    /// データセットを取得する
    ///
    /// # Errors
    ///
    /// - `DataLoadError::NotFound`: 取得元が存在しない
    /// - `DataLoadError::Parse`: ドキュメントの形式が正しくない
    /// - `DataLoadError::Transport`: その他の取得失敗
    /// - `DataLoadError::Invalid`: 数値の不変条件を満たさない
    async fn fetch(&self) -> Result<ReferenceDataset, DataLoadError>;
}
