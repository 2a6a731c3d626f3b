//! Update Problem Use Case

use crate::application::create_problem::ProblemInput;
use crate::domain::entities::Problem;
use crate::domain::repository::ProblemRepository;
use crate::error::{ProblemError, ProblemResult};
use kernel::id::ProblemId;
use std::sync::Arc;

/// Update Problem Use Case
pub struct UpdateProblemUseCase<R>
where
    R: ProblemRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProblemUseCase<R>
where
    R: ProblemRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Replace all three fields.
    ///
    /// Fails with [`ProblemError::UpdateFailed`] when the id is unknown and
    /// also when the new values equal the stored ones.
    pub async fn execute(&self, raw_id: &str, input: ProblemInput) -> ProblemResult<Problem> {
        let fields = input.into_fields()?;

        let failed = || ProblemError::UpdateFailed(raw_id.to_string());

        let id = ProblemId::parse(raw_id).ok_or_else(failed)?;

        let Some(problem) = self.repo.update(&id, &fields).await? else {
            tracing::debug!(problem_id = %id, "Problem not modified");
            return Err(failed());
        };

        tracing::info!(problem_id = %problem.id, "Problem updated");

        Ok(problem)
    }
}
