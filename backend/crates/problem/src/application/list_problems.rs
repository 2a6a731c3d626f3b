//! List Problems Use Case

use crate::domain::entities::Problem;
use crate::domain::repository::ProblemRepository;
use crate::error::ProblemResult;
use std::sync::Arc;

/// Upper bound on records returned by one listing
pub const LIST_PAGE_SIZE: usize = 100;

/// List Problems Use Case
pub struct ListProblemsUseCase<R>
where
    R: ProblemRepository,
{
    repo: Arc<R>,
}

impl<R> ListProblemsUseCase<R>
where
    R: ProblemRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> ProblemResult<Vec<Problem>> {
        self.repo.list(LIST_PAGE_SIZE).await
    }
}
