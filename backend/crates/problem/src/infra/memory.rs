//! In-memory Repository
//!
//! Backs tests and a database-less development run. Keeps insertion order
//! and follows the Postgres repository's no-op update rule.

use std::sync::Arc;

use kernel::id::ProblemId;
use tokio::sync::RwLock;

use crate::domain::entities::Problem;
use crate::domain::repository::ProblemRepository;
use crate::domain::value_objects::ProblemFields;
use crate::error::ProblemResult;

#[derive(Clone, Debug, Default)]
pub struct InMemoryProblemRepository {
    problems: Arc<RwLock<Vec<Problem>>>,
}

impl InMemoryProblemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.problems.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.problems.read().await.is_empty()
    }
}

impl ProblemRepository for InMemoryProblemRepository {
    async fn insert(&self, fields: &ProblemFields) -> ProblemResult<ProblemId> {
        let id = ProblemId::new();
        self.problems
            .write()
            .await
            .push(Problem::new(id, fields.clone()));
        Ok(id)
    }

    async fn find_by_id(&self, id: &ProblemId) -> ProblemResult<Option<Problem>> {
        let problems = self.problems.read().await;
        Ok(problems.iter().find(|p| &p.id == id).cloned())
    }

    async fn list(&self, limit: usize) -> ProblemResult<Vec<Problem>> {
        let problems = self.problems.read().await;
        Ok(problems.iter().take(limit).cloned().collect())
    }

    async fn update(
        &self,
        id: &ProblemId,
        fields: &ProblemFields,
    ) -> ProblemResult<Option<Problem>> {
        let mut problems = self.problems.write().await;

        match problems.iter_mut().find(|p| &p.id == id) {
            Some(problem) if &problem.fields != fields => {
                problem.fields = fields.clone();
                Ok(Some(problem.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, id: &ProblemId) -> ProblemResult<bool> {
        let mut problems = self.problems.write().await;
        let before = problems.len();
        problems.retain(|p| &p.id != id);
        Ok(problems.len() < before)
    }
}
