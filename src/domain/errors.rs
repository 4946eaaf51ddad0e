//! # Domain Errors
//!
//! 予測エンジンとデータセット読み込みのエラー分類

use thiserror::Error;

use super::entities::categories::{Country, Education, Experience, JobCategory};

/// データセット読み込みエラー
///
/// 起動時（または再読み込み時）に致命的。自動リトライは行わない。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataLoadError {
    /// データファイルの形式が正しくない（JSON不正・未知のキー・構造の不一致）
    #[error("データファイルの形式が正しくありません: {0}")]
    Parse(String),

    /// データファイルが存在しない（ファイル不在・HTTP 404）
    #[error("データファイルが見つかりません: {0}")]
    NotFound(String),

    /// その他の取得失敗（接続エラー・タイムアウト・I/Oエラー）
    #[error("データ取得エラー: {0}")]
    Transport(String),

    /// パースには成功したが数値の不変条件を満たさない
    #[error("データが不正です: {0}")]
    Invalid(String),
}

impl DataLoadError {
    /// エラー種別の短い名前（ログ・ステータス表示用）
    pub fn kind(&self) -> &'static str {
        match self {
            DataLoadError::Parse(_) => "parse",
            DataLoadError::NotFound(_) => "not-found",
            DataLoadError::Transport(_) => "transport",
            DataLoadError::Invalid(_) => "invalid",
        }
    }
}

/// 予測に必要なデータがデータセットに存在しない
///
/// 1回の予測呼び出しにのみ致命的。データセットの状態には影響しない。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MissingDataError {
    #[error(
        "基本年収データがありません: {country}/{job_category}/{education}/{experience}"
    )]
    BaseSalary {
        country: Country,
        job_category: JobCategory,
        education: Education,
        experience: Experience,
    },

    #[error("業界平均データがありません: {country}/{job_category}")]
    IndustryAverage {
        country: Country,
        job_category: JobCategory,
    },
}

/// 予測サービスのエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// データセットが読み込まれていない（直前の読み込みが失敗した）
    #[error("データセットが利用できません（{0}）。再読み込みしてください")]
    NotReady(String),

    #[error(transparent)]
    MissingData(#[from] MissingDataError),
}

/// 列挙値として解釈できない文字列
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} の値が不正です: {value}")]
pub struct UnknownKeyError {
    pub field: &'static str,
    pub value: String,
}
