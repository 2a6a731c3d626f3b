//! In-memory Repository
//!
//! Backs tests and a database-less development run. Same contract as the
//! Postgres repository, including the unique `user_id`.

use std::sync::Arc;

use kernel::id::UserRecordId;
use tokio::sync::RwLock;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &NewUser) -> AuthResult<UserRecordId> {
        // Check and insert under one write lock
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.user_id == user.user_id) {
            return Err(AuthError::DuplicateUser);
        }

        let id = UserRecordId::new();
        users.push(user.clone().into_user(id));

        Ok(id)
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.user_id == user_id).cloned())
    }

    async fn exists_by_user_id(&self, user_id: &UserId) -> AuthResult<bool> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| &u.user_id == user_id))
    }
}
