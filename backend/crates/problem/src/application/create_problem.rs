//! Create Problem Use Case

use crate::domain::entities::Problem;
use crate::domain::repository::ProblemRepository;
use crate::domain::value_objects::ProblemFields;
use crate::error::{ProblemError, ProblemResult};
use std::sync::Arc;

/// Raw problem fields from the request body
#[derive(Debug, Clone)]
pub struct ProblemInput {
    pub title: String,
    pub problem: String,
    pub educational: String,
}

impl ProblemInput {
    pub(crate) fn into_fields(self) -> ProblemResult<ProblemFields> {
        ProblemFields::new(self.title, self.problem, self.educational)
    }
}

/// Create Problem Use Case
pub struct CreateProblemUseCase<R>
where
    R: ProblemRepository,
{
    repo: Arc<R>,
}

impl<R> CreateProblemUseCase<R>
where
    R: ProblemRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Insert, then read the record back so the caller gets what was stored
    pub async fn execute(&self, input: ProblemInput) -> ProblemResult<Problem> {
        let fields = input.into_fields()?;

        let id = self.repo.insert(&fields).await?;

        let problem = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or(ProblemError::StoreWriteFailed)?;

        tracing::info!(problem_id = %problem.id, "Problem created");

        Ok(problem)
    }
}
