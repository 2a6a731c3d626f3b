//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::ProblemId;

use crate::domain::entities::Problem;
use crate::domain::value_objects::ProblemFields;
use crate::error::ProblemResult;

/// Problem repository trait
#[trait_variant::make(ProblemRepository: Send)]
pub trait LocalProblemRepository {
    /// Insert a problem; the store generates the key
    async fn insert(&self, fields: &ProblemFields) -> ProblemResult<ProblemId>;

    async fn find_by_id(&self, id: &ProblemId) -> ProblemResult<Option<Problem>>;

    /// Up to `limit` problems in insertion order
    async fn list(&self, limit: usize) -> ProblemResult<Vec<Problem>>;

    /// Replace all fields and return the updated record.
    ///
    /// `None` when no record was modified: the id is missing, or the stored
    /// values already equal `fields`.
    async fn update(&self, id: &ProblemId, fields: &ProblemFields)
    -> ProblemResult<Option<Problem>>;

    /// `true` when a record was removed
    async fn delete(&self, id: &ProblemId) -> ProblemResult<bool>;
}
