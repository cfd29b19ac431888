//! REST APIハンドラー
//!
//! アクティビティ一覧・参加登録・登録解除API、および静的フロントエンド

pub mod activities;
pub mod error;

use crate::AppState;
use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/activities", get(activities::list_activities))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activities::unregister),
        )
        .with_state(state)
}

/// 静的フロントエンドとリクエストトレースを含むアプリケーションを作成
///
/// `/` は `/static/index.html` へリダイレクトする。
pub fn create_app(state: AppState, static_dir: &Path) -> Router {
    create_router(state)
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
