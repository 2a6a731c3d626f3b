//! User ID Value Object
//!
//! The client-chosen login name. Unique across users and never changed
//! after signup. Compared exactly as given; no case folding.

use derive_more::Display;

use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct UserId(String);

impl UserId {
    /// Validate a `user_id` received at signup.
    pub fn new(raw: impl Into<String>) -> AuthResult<Self> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(AuthError::Validation("user_id must not be empty".to_string()));
        }

        Ok(Self(raw))
    }

    /// Restore from the database without validation
    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_kept_verbatim() {
        let user_id = UserId::new("Alice_01").unwrap();
        assert_eq!(user_id.as_str(), "Alice_01");
        assert_eq!(user_id.to_string(), "Alice_01");
    }

    #[test]
    fn test_blank_user_id_rejected() {
        assert!(matches!(UserId::new(""), Err(AuthError::Validation(_))));
        assert!(matches!(UserId::new("   "), Err(AuthError::Validation(_))));
    }

    #[test]
    fn test_case_sensitive() {
        assert_ne!(UserId::new("alice").unwrap(), UserId::new("Alice").unwrap());
    }
}
