//! Problem Error Types
//!
//! This module provides problem-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Problem-specific result type alias
pub type ProblemResult<T> = Result<T, ProblemError>;

/// Problem-specific error variants
///
/// The three not-found variants carry the id exactly as the client sent it.
#[derive(Debug, Error)]
pub enum ProblemError {
    /// Missing or malformed id on read
    #[error("Problem of ID:{0} not found")]
    NotFound(String),

    /// Missing id, or the update would not change anything
    #[error("Failed to Update Problem of ID:{0}")]
    UpdateFailed(String),

    /// Missing id on delete
    #[error("Failed to Delete Problem of ID:{0}")]
    DeleteFailed(String),

    /// Invalid request body
    #[error("{0}")]
    Validation(String),

    /// The store accepted the insert but the record could not be read back
    #[error("Failed to create problem")]
    StoreWriteFailed,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProblemError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProblemError::NotFound(_)
            | ProblemError::UpdateFailed(_)
            | ProblemError::DeleteFailed(_) => StatusCode::NOT_FOUND,
            ProblemError::Validation(_) => StatusCode::BAD_REQUEST,
            ProblemError::Database(sqlx::Error::PoolTimedOut) => StatusCode::SERVICE_UNAVAILABLE,
            ProblemError::StoreWriteFailed
            | ProblemError::Database(_)
            | ProblemError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProblemError::NotFound(_)
            | ProblemError::UpdateFailed(_)
            | ProblemError::DeleteFailed(_) => ErrorKind::NotFound,
            ProblemError::Validation(_) => ErrorKind::BadRequest,
            ProblemError::Database(sqlx::Error::PoolTimedOut) => ErrorKind::ServiceUnavailable,
            ProblemError::StoreWriteFailed
            | ProblemError::Database(_)
            | ProblemError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        let kind = self.kind();
        match self {
            ProblemError::Database(e) => {
                let message = if kind == ErrorKind::ServiceUnavailable {
                    "Service temporarily unavailable"
                } else {
                    "Internal server error"
                };
                AppError::new(kind, message).with_source(e)
            }
            ProblemError::Internal(_) => AppError::internal("Internal server error"),
            ProblemError::Validation(_) => AppError::new(kind, self.to_string())
                .with_action("Please check the request body"),
            _ => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ProblemError::Database(e) => {
                tracing::error!(error = %e, "Problem database error");
            }
            ProblemError::Internal(msg) => {
                tracing::error!(message = %msg, "Problem internal error");
            }
            ProblemError::StoreWriteFailed => {
                tracing::error!("Inserted problem could not be read back");
            }
            _ => {
                tracing::debug!(error = %self, "Problem error");
            }
        }
    }
}

impl IntoResponse for ProblemError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<JsonRejection> for ProblemError {
    fn from(rejection: JsonRejection) -> Self {
        ProblemError::Validation(rejection.body_text())
    }
}
