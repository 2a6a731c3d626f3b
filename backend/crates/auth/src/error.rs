//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// `user_id` already registered
    #[error("User ID is already taken")]
    DuplicateUser,

    /// Password rejected by the storage policy
    #[error("{0}")]
    WeakPassword(String),

    /// Unknown user or wrong password; the two are never told apart
    #[error("Incorrect user_id or password")]
    InvalidCredentials,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token")]
    TokenInvalid,

    /// No access token cookie on a protected request
    #[error("Not authenticated")]
    MissingToken,

    /// Malformed request input
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::DuplicateUser
            | AuthError::WeakPassword(_)
            | AuthError::InvalidCredentials
            | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::TokenExpired | AuthError::TokenInvalid | AuthError::MissingToken => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::Database(sqlx::Error::PoolTimedOut) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::DuplicateUser
            | AuthError::WeakPassword(_)
            | AuthError::InvalidCredentials
            | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::TokenExpired | AuthError::TokenInvalid | AuthError::MissingToken => {
                ErrorKind::Unauthorized
            }
            AuthError::Database(sqlx::Error::PoolTimedOut) => ErrorKind::ServiceUnavailable,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures are reported with a generic message; the detail
    /// stays on the error source for logging.
    pub fn into_app_error(self) -> AppError {
        let kind = self.kind();
        match self {
            AuthError::Database(e) => {
                let message = if kind == ErrorKind::ServiceUnavailable {
                    "Service temporarily unavailable"
                } else {
                    "Internal server error"
                };
                AppError::new(kind, message).with_source(e)
            }
            AuthError::Internal(_) => AppError::internal("Internal server error"),
            AuthError::DuplicateUser => AppError::new(kind, self.to_string())
                .with_action("Please choose a different user_id"),
            AuthError::WeakPassword(_) => AppError::new(kind, self.to_string())
                .with_action("Please choose a longer password"),
            AuthError::TokenExpired | AuthError::MissingToken => {
                AppError::new(kind, self.to_string()).with_action("Please log in again")
            }
            _ => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TokenInvalid => {
                tracing::warn!("Rejected invalid access token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::Validation(rejection.body_text())
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::Invalid => AuthError::TokenInvalid,
            TokenError::Encoding(msg) => AuthError::Internal(msg),
        }
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("Password hashing task failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::DuplicateUser.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::TokenExpired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::TokenInvalid.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_kind_matches_status() {
        let errors = [
            AuthError::DuplicateUser,
            AuthError::WeakPassword("short".into()),
            AuthError::InvalidCredentials,
            AuthError::TokenExpired,
            AuthError::TokenInvalid,
            AuthError::MissingToken,
            AuthError::Validation("bad".into()),
            AuthError::Internal("boom".into()),
        ];
        for err in errors {
            assert_eq!(err.kind().status_code(), err.status_code().as_u16());
        }
    }

    #[test]
    fn test_internal_detail_not_exposed() {
        let app_error = AuthError::Internal("pool exhausted on 10.0.0.3".into()).into_app_error();
        assert_eq!(app_error.message(), "Internal server error");
    }

    #[test]
    fn test_database_error_keeps_source() {
        use std::error::Error as _;

        let app_error = AuthError::Database(sqlx::Error::RowNotFound).into_app_error();
        assert_eq!(app_error.status_code(), 500);
        assert_eq!(app_error.message(), "Internal server error");
        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_pool_timeout_is_service_unavailable() {
        let err = AuthError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let app_error = err.into_app_error();
        assert_eq!(app_error.kind(), ErrorKind::ServiceUnavailable);
        assert_eq!(app_error.message(), "Service temporarily unavailable");
    }

    #[test]
    fn test_token_error_mapping() {
        assert!(matches!(
            AuthError::from(TokenError::Expired),
            AuthError::TokenExpired
        ));
        assert!(matches!(
            AuthError::from(TokenError::Invalid),
            AuthError::TokenInvalid
        ));
        assert!(matches!(
            AuthError::from(TokenError::Encoding("x".into())),
            AuthError::Internal(_)
        ));
    }
}
