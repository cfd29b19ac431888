//! Mergington Activities Common
//!
//! サーバーとテストで共有する型定義・プロトコル・エラー・設定

#![warn(missing_docs)]

/// 設定構造体
pub mod config;

/// エラー型定義
pub mod error;

/// HTTP境界で使用するリクエスト/レスポンス型
pub mod protocol;

/// アクティビティのコアデータ型
pub mod types;
