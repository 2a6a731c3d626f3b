//! User Entity

use kernel::id::UserRecordId;

use crate::domain::value_object::{user_id::UserId, user_password::UserPassword};

/// Stored user
///
/// `id` is the store-assigned key; `user_id` is the login name.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserRecordId,
    pub user_id: UserId,
    pub password_hash: UserPassword,
}

/// User about to be inserted; the store assigns the key
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_id: UserId,
    pub password_hash: UserPassword,
}

impl NewUser {
    pub fn new(user_id: UserId, password_hash: UserPassword) -> Self {
        Self {
            user_id,
            password_hash,
        }
    }

    /// Attach the key the store generated
    pub fn into_user(self, id: UserRecordId) -> User {
        User {
            id,
            user_id: self.user_id,
            password_hash: self.password_hash,
        }
    }
}
