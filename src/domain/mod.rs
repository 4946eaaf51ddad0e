//! # Domain Layer
//!
//! このモジュールは年収予測の核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - I/Oを持たない（ファイル・HTTPについて何も知らない）
//! - フレームワークに依存しない
//! - 純粋な計算ロジック
//!
//! ## 構成要素
//!
//! - **entities**: 列挙キー、参照データセット、予測の入力と結果
//! - **repositories**: データセット取得の trait（インターフェース定義のみ）
//! - **services**: 予測エンジン
//! - **errors**: エラー分類
//! - **rounding**: 丸め規則

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod rounding;
pub mod services;
