//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mergington_activities_common::{
    error::{CommonError, ErrorKind, RegistryError},
    protocol::ErrorResponse,
};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub RegistryError);

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        AppError(err)
    }
}

impl From<CommonError> for AppError {
    fn from(err: CommonError) -> Self {
        AppError(RegistryError::Common(err))
    }
}

// 抽出失敗も `{"detail": ...}` 形式の422で返す
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        CommonError::Validation(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        CommonError::Validation(rejection.body_text()).into()
    }
}

impl AppError {
    /// HTTPステータスコード
    ///
    /// 参加者リストとの矛盾は 409 ではなく 400 で返す。
    pub fn status_code(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        // Full error details are logged; the client only sees detail()
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed with internal error");
        }

        let payload = ErrorResponse {
            detail: self.0.detail(),
        };

        (status, Json(payload)).into_response()
    }
}
