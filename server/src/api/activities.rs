//! アクティビティAPIハンドラー

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use mergington_activities_common::{
    protocol::{Enrollment, EnrollmentParams, MessageResponse},
    types::ActivityCatalog,
};

use super::error::AppError;
use crate::AppState;

/// GET /activities - 全アクティビティ一覧
pub async fn list_activities(State(state): State<AppState>) -> Json<ActivityCatalog> {
    Json(state.registry.list_activities().await)
}

/// クエリはペア列として受け取り、`email` の重複を許す
type EnrollmentQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

fn parse_enrollment(
    path: Result<Path<String>, PathRejection>,
    query: EnrollmentQuery,
) -> Result<Enrollment, AppError> {
    let Path(activity_name) = path?;
    let Query(pairs) = query?;
    Ok(EnrollmentParams::from_pairs(pairs).into_enrollment(activity_name)?)
}

/// POST /activities/:activity_name/signup?email= - 参加登録
///
/// 未知のアクティビティは404、登録済みのメールアドレスは400を返す。
pub async fn signup(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: EnrollmentQuery,
) -> Result<Json<MessageResponse>, AppError> {
    let enrollment = parse_enrollment(path, query)?;
    let receipt = state
        .registry
        .signup(&enrollment.activity_name, &enrollment.email)
        .await?;
    Ok(Json(receipt.into()))
}

/// POST /activities/:activity_name/unregister?email= - 登録解除
///
/// 未知のアクティビティは404、未登録のメールアドレスは400を返す。
pub async fn unregister(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: EnrollmentQuery,
) -> Result<Json<MessageResponse>, AppError> {
    let enrollment = parse_enrollment(path, query)?;
    let receipt = state
        .registry
        .unregister(&enrollment.activity_name, &enrollment.email)
        .await?;
    Ok(Json(receipt.into()))
}
