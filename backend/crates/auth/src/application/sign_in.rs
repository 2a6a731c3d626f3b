//! Sign In Use Case
//!
//! Authenticates a user and issues an access token.

use std::sync::Arc;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_id: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug, Clone)]
pub struct SignInOutput {
    /// Signed access token (without the `Bearer ` prefix)
    pub token: String,
    pub expires_at: DateTime<Tz>,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Every failure to authenticate comes back as
    /// [`AuthError::InvalidCredentials`]; only the log says which check failed.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let user_id = match UserId::new(input.user_id) {
            Ok(user_id) => user_id,
            Err(_) => {
                tracing::debug!("Login rejected: blank user_id");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let Some(user) = self.user_repo.find_by_user_id(&user_id).await? else {
            self.spend_hashing_cost(input.password).await?;
            tracing::debug!(user_id = %user_id, "Login rejected: unknown user");
            return Err(AuthError::InvalidCredentials);
        };

        let raw_password = RawPassword::for_login(input.password);
        let password_hash = user.password_hash.clone();
        let pepper = self.config.password_pepper.clone();
        let password_valid = tokio::task::spawn_blocking(move || {
            password_hash.verify(&raw_password, pepper.as_deref())
        })
        .await?;

        if !password_valid {
            tracing::warn!(user_id = %user.user_id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self.config.token_signer().issue(user.user_id.as_str())?;

        tracing::info!(
            user_id = %user.user_id,
            expires_at = %issued.expires_at,
            "User logged in"
        );

        Ok(SignInOutput {
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }

    /// Run one Argon2 computation at the configured cost so an unknown
    /// user takes as long to reject as a wrong password.
    async fn spend_hashing_cost(&self, password: String) -> AuthResult<()> {
        let raw_password = RawPassword::for_login(password);
        let params = self.config.password_hashing;
        let pepper = self.config.password_pepper.clone();

        tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, &params, pepper.as_deref()).map(drop)
        })
        .await?
    }
}
