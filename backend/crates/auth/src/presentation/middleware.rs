//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use platform::cookie::extract_cookie;
use std::sync::Arc;

use crate::application::CheckTokenUseCase;
use crate::application::config::AuthConfig;
use crate::error::AuthError;

/// Identity of a request that passed [`require_access_token`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

/// Middleware that requires a valid access token cookie.
///
/// Mount with `axum::middleware::from_fn_with_state(config, require_access_token)`.
/// Handlers behind it read `Extension<AuthenticatedUser>`.
pub async fn require_access_token(
    State(config): State<Arc<AuthConfig>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let raw = extract_cookie(req.headers(), &config.cookie_name).ok_or(AuthError::MissingToken)?;

    let user_id = CheckTokenUseCase::new(config).verify_cookie_value(&raw)?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}
