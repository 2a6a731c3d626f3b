//! Error conversions - HTTP rendering of [`AppError`](super::app_error::AppError)
//!
//! Each bounded context converts its own errors into `AppError`; this
//! module turns the result into a JSON response.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum response (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({
            "status": self.status_code(),
            "title": self.kind().as_str(),
            "message": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
