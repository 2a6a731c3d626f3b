//! PostgreSQL Repository Implementation

use kernel::id::ProblemId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Problem;
use crate::domain::repository::ProblemRepository;
use crate::domain::value_objects::ProblemFields;
use crate::error::ProblemResult;

/// PostgreSQL-backed problem repository
#[derive(Clone)]
pub struct PgProblemRepository {
    pool: PgPool,
}

impl PgProblemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProblemRepository for PgProblemRepository {
    async fn insert(&self, fields: &ProblemFields) -> ProblemResult<ProblemId> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO problems (title, problem, educational)
            VALUES ($1, $2, $3)
            RETURNING _id
            "#,
        )
        .bind(fields.title())
        .bind(fields.problem())
        .bind(fields.educational())
        .fetch_one(&self.pool)
        .await?;

        Ok(ProblemId::from_uuid(id))
    }

    async fn find_by_id(&self, id: &ProblemId) -> ProblemResult<Option<Problem>> {
        let row = sqlx::query_as::<_, ProblemRow>(
            r#"
            SELECT _id, title, problem, educational
            FROM problems
            WHERE _id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProblemRow::into_problem))
    }

    async fn list(&self, limit: usize) -> ProblemResult<Vec<Problem>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, ProblemRow>(
            r#"
            SELECT _id, title, problem, educational
            FROM problems
            ORDER BY created_at, _id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProblemRow::into_problem).collect())
    }

    async fn update(
        &self,
        id: &ProblemId,
        fields: &ProblemFields,
    ) -> ProblemResult<Option<Problem>> {
        // Identical values match no row, same as a missing id
        let row = sqlx::query_as::<_, ProblemRow>(
            r#"
            UPDATE problems SET
                title = $2,
                problem = $3,
                educational = $4
            WHERE _id = $1
              AND (title, problem, educational) IS DISTINCT FROM ($2, $3, $4)
            RETURNING _id, title, problem, educational
            "#,
        )
        .bind(id.as_uuid())
        .bind(fields.title())
        .bind(fields.problem())
        .bind(fields.educational())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProblemRow::into_problem))
    }

    async fn delete(&self, id: &ProblemId) -> ProblemResult<bool> {
        let deleted = sqlx::query("DELETE FROM problems WHERE _id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProblemRow {
    #[sqlx(rename = "_id")]
    id: Uuid,
    title: String,
    problem: String,
    educational: String,
}

impl ProblemRow {
    fn into_problem(self) -> Problem {
        Problem::new(
            ProblemId::from_uuid(self.id),
            ProblemFields::from_db(self.title, self.problem, self.educational),
        )
    }
}
