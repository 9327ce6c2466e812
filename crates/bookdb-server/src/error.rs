//! Server-specific error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::response::ErrorResponse;
use crate::db::StorageError;
use crate::features::shared::ValidationError;

/// Errors that reach the HTTP boundary
///
/// Each variant owns exactly one status code.
#[derive(Error, Debug)]
pub enum AppError {
    /// Client input malformed or missing a required field (400)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Referenced resource does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// Connection, constraint or unexpected database failure (500)
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A dependency is down (503)
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Storage(_) => "INTERNAL_ERROR",
            AppError::Unavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Storage(e) => tracing::error!(error = %e, "Storage error"),
            AppError::Unavailable(msg) => tracing::warn!(reason = %msg, "Service unavailable"),
            _ => tracing::debug!(error = %self, status = status.as_u16(), "Request rejected"),
        }

        // Storage details are returned verbatim; callers sit inside the trust boundary.
        let body = ErrorResponse::new(self.code(), self.to_string());
        (status, Json(body)).into_response()
    }
}
