//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub user_id: String,
    pub password: String,
}

/// Sign up output. Never carries the password hash.
#[derive(Debug, Clone)]
pub struct SignUpOutput {
    pub id: String,
    pub user_id: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let user_id = UserId::new(input.user_id)?;

        if self.user_repo.exists_by_user_id(&user_id).await? {
            return Err(AuthError::DuplicateUser);
        }

        let raw_password = RawPassword::new(input.password)?;

        // Argon2 is CPU-bound; keep it off the async workers
        let params = self.config.password_hashing;
        let pepper = self.config.password_pepper.clone();
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, &params, pepper.as_deref())
        })
        .await??;

        let new_user = NewUser::new(user_id, password_hash);
        let id = self.user_repo.insert(&new_user).await?;

        tracing::info!(
            id = %id,
            user_id = %new_user.user_id,
            "User signed up"
        );

        Ok(SignUpOutput {
            id: id.to_string(),
            user_id: new_user.user_id.into_inner(),
        })
    }
}
