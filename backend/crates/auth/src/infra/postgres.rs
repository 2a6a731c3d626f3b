//! PostgreSQL Repository Implementations

use kernel::id::UserRecordId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn insert(&self, user: &NewUser) -> AuthResult<UserRecordId> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO users (user_id, password)
            VALUES ($1, $2)
            RETURNING _id
            "#,
        )
        .bind(user.user_id.as_str())
        .bind(user.password_hash.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            // users.user_id UNIQUE lost a race with a concurrent signup
            Some(db) if db.is_unique_violation() => AuthError::DuplicateUser,
            _ => AuthError::Database(e),
        })?;

        Ok(UserRecordId::from_uuid(id))
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                _id,
                user_id,
                password
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_user_id(&self, user_id: &UserId) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE user_id = $1)",
        )
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    #[sqlx(rename = "_id")]
    id: Uuid,
    user_id: String,
    password: String,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        Ok(User {
            id: UserRecordId::from_uuid(self.id),
            user_id: UserId::from_db(self.user_id),
            password_hash: UserPassword::from_db(self.password)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;
    use platform::password::HashingParams;

    /// Skips (returns `None`) unless `DATABASE_URL` points at a Postgres
    async fn repo() -> Option<PgUserRepository> {
        let url = std::env::var("DATABASE_URL").ok()?;
        let pool = PgPool::connect(&url).await.unwrap();
        sqlx::migrate!("../../../database/migrations")
            .run(&pool)
            .await
            .unwrap();
        Some(PgUserRepository::new(pool))
    }

    fn new_user(user_id: &str) -> NewUser {
        let raw = RawPassword::new("password123".to_string()).unwrap();
        let hash = UserPassword::from_raw(&raw, &HashingParams::new(1024, 1, 1), None).unwrap();
        NewUser::new(UserId::new(user_id).unwrap(), hash)
    }

    #[tokio::test]
    async fn test_unique_violation_is_duplicate_user() {
        let Some(repo) = repo().await else { return };
        let user_id = format!("pg-{}", Uuid::new_v4());

        repo.insert(&new_user(&user_id)).await.unwrap();
        let second = repo.insert(&new_user(&user_id)).await;

        assert!(matches!(second, Err(AuthError::DuplicateUser)));
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let Some(repo) = repo().await else { return };
        let user_id = UserId::new(format!("pg-{}", Uuid::new_v4())).unwrap();

        let id = repo.insert(&new_user(user_id.as_str())).await.unwrap();
        let user = repo.find_by_user_id(&user_id).await.unwrap().unwrap();

        assert_eq!(user.id, id);
        assert!(repo.exists_by_user_id(&user_id).await.unwrap());
        assert!(user.password_hash.verify(&RawPassword::for_login("password123".to_string()), None));
    }
}
