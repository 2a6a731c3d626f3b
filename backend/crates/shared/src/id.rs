//! Record Identifiers
//!
//! Type-safe wrappers for store-assigned record keys. The store generates the
//! key; the HTTP layer only ever sees its string form.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;
use uuid::fmt::Hyphenated;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ProblemId = Id<markers::Problem>;
///
/// let id = ProblemId::new();
/// assert_eq!(ProblemId::parse(&id.to_string()), Some(id));
/// assert_eq!(ProblemId::parse("not-a-key"), None);
/// ```
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Generate a fresh key (UUID v4)
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Parse the external string form.
    ///
    /// Only the lowercase hyphenated form that [`Display`](fmt::Display)
    /// produces is accepted, so a record answers to exactly one id. Anything
    /// else returns `None` and callers treat it like a missing record.
    pub fn parse(s: &str) -> Option<Self> {
        // braced, simple and urn forms all differ in length
        if s.len() != Hyphenated::LENGTH || s.bytes().any(|b| b.is_ascii_uppercase()) {
            return None;
        }
        Uuid::try_parse(s).ok().map(Self::from_uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

// Manual impls: derives would put bounds on the marker type.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

/// Marker types for different record IDs
pub mod markers {
    /// Marker for `problems._id`
    pub struct Problem;

    /// Marker for `users._id`
    pub struct UserRecord;
}

pub type ProblemId = Id<markers::Problem>;
pub type UserRecordId = Id<markers::UserRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_roundtrip() {
        let id = ProblemId::new();
        let parsed = ProblemId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        assert!(ProblemId::parse("").is_none());
        assert!(ProblemId::parse("123").is_none());
        assert!(ProblemId::parse("64b7f0c2e1a4b3c2d1e0f9a8").is_none());
        assert!(ProblemId::parse("zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz").is_none());
    }

    #[test]
    fn test_parse_accepts_only_canonical_form() {
        let id = ProblemId::new();
        let canonical = id.to_string();
        let simple = id.as_uuid().simple().to_string();

        assert_eq!(ProblemId::parse(&canonical), Some(id));
        assert!(ProblemId::parse(&format!("{{{}}}", canonical)).is_none());
        assert!(ProblemId::parse(&simple).is_none());
        assert!(ProblemId::parse(&format!("urn:uuid:{}", canonical)).is_none());
        assert!(ProblemId::parse(&format!(" {} ", canonical)).is_none());
        assert!(ProblemId::parse(&canonical.to_uppercase()).is_none());
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: UserRecordId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(id.into_uuid(), uuid);
    }
}
