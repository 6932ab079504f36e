//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
///
/// Malformed request bodies never get here; axum's extractor rejections
/// answer those directly.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, m),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<avri_core::reply::ReplyError> for AppError {
    fn from(e: avri_core::reply::ReplyError) -> Self {
        AppError::Validation(e.to_string())
    }
}
