//! Check Token Use Case
//!
//! Stateless verification of an access token: signature and expiry only,
//! no store lookup.

use std::sync::Arc;

use platform::cookie::parse_bearer_cookie_value;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Check token use case
pub struct CheckTokenUseCase {
    config: Arc<AuthConfig>,
}

impl CheckTokenUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Verify a bare token and return its subject (`user_id`)
    pub fn verify(&self, token: &str) -> AuthResult<String> {
        Ok(self.config.token_signer().verify(token)?)
    }

    /// Verify the raw `access_token` cookie value (`"Bearer <token>"`)
    pub fn verify_cookie_value(&self, raw: &str) -> AuthResult<String> {
        let token = parse_bearer_cookie_value(raw).ok_or(AuthError::TokenInvalid)?;
        self.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use platform::cookie::bearer_cookie_value;

    fn use_case() -> (CheckTokenUseCase, Arc<AuthConfig>) {
        let config = Arc::new(AuthConfig::new("check-token-secret"));
        (CheckTokenUseCase::new(config.clone()), config)
    }

    #[test]
    fn test_valid_token() {
        let (use_case, config) = use_case();
        let issued = config.token_signer().issue("alice").unwrap();

        assert_eq!(use_case.verify(&issued.token).unwrap(), "alice");
    }

    #[test]
    fn test_cookie_value() {
        let (use_case, config) = use_case();
        let issued = config.token_signer().issue("alice").unwrap();
        let cookie = bearer_cookie_value(&issued.token);

        assert_eq!(use_case.verify_cookie_value(&cookie).unwrap(), "alice");
    }

    #[test]
    fn test_cookie_without_bearer_prefix() {
        let (use_case, config) = use_case();
        let issued = config.token_signer().issue("alice").unwrap();

        assert!(matches!(
            use_case.verify_cookie_value(&issued.token),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_expired_token() {
        let (use_case, config) = use_case();
        let issued = config
            .token_signer()
            .issue_at("alice", Utc::now() - chrono::Duration::minutes(10))
            .unwrap();

        assert!(matches!(
            use_case.verify(&issued.token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_token_from_other_secret() {
        let (use_case, _) = use_case();
        let foreign = AuthConfig::new("someone-else").token_signer().issue("alice").unwrap();

        assert!(matches!(
            use_case.verify(&foreign.token),
            Err(AuthError::TokenInvalid)
        ));
    }
}
