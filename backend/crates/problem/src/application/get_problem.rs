//! Get Problem Use Case

use crate::domain::entities::Problem;
use crate::domain::repository::ProblemRepository;
use crate::error::{ProblemError, ProblemResult};
use kernel::id::ProblemId;
use std::sync::Arc;

/// Get Problem Use Case
pub struct GetProblemUseCase<R>
where
    R: ProblemRepository,
{
    repo: Arc<R>,
}

impl<R> GetProblemUseCase<R>
where
    R: ProblemRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_id: &str) -> ProblemResult<Problem> {
        let not_found = || ProblemError::NotFound(raw_id.to_string());

        let id = ProblemId::parse(raw_id).ok_or_else(not_found)?;

        self.repo.find_by_id(&id).await?.ok_or_else(not_found)
    }
}
