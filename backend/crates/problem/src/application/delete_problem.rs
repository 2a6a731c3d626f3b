//! Delete Problem Use Case

use crate::domain::repository::ProblemRepository;
use crate::error::{ProblemError, ProblemResult};
use kernel::id::ProblemId;
use std::sync::Arc;

/// Delete Problem Use Case
pub struct DeleteProblemUseCase<R>
where
    R: ProblemRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteProblemUseCase<R>
where
    R: ProblemRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns `true` once the record is gone; a missing record is an error
    pub async fn execute(&self, raw_id: &str) -> ProblemResult<bool> {
        let failed = || ProblemError::DeleteFailed(raw_id.to_string());

        let id = ProblemId::parse(raw_id).ok_or_else(failed)?;

        if !self.repo.delete(&id).await? {
            return Err(failed());
        }

        tracing::info!(problem_id = %id, "Problem deleted");

        Ok(true)
    }
}
