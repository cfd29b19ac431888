//! Mergington Activities Server
//!
//! 課外活動の一覧・参加登録・登録解除を提供するHTTPサーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// アクティビティレジストリ（一覧・参加登録・登録解除）
pub mod registry;

/// axumサーバー起動・シャットダウン
pub mod server;

/// 協調シャットダウン
pub mod shutdown;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// アクティビティレジストリ
    pub registry: registry::ActivityRegistry,
    /// シャットダウンコントローラー
    pub shutdown: shutdown::ShutdownController,
}

impl AppState {
    /// レジストリからアプリケーション状態を作成
    pub fn new(registry: registry::ActivityRegistry) -> Self {
        Self {
            registry,
            shutdown: shutdown::ShutdownController::default(),
        }
    }
}
