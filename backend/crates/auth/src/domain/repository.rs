//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserRecordId;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user and return its store-assigned key.
    ///
    /// Fails with `AuthError::DuplicateUser` when `user_id` is taken, even if
    /// a concurrent signup slipped past `exists_by_user_id`.
    async fn insert(&self, user: &NewUser) -> AuthResult<UserRecordId>;

    /// Find user by login name
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Check if user_id exists
    async fn exists_by_user_id(&self, user_id: &UserId) -> AuthResult<bool>;
}
