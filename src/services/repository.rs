// src/services/repository.rs
use axum::async_trait;
use sqlx::PgPool;

use crate::error::{is_foreign_key_violation, is_unique_violation, StoreError};
use crate::models::user::{NewUser, Save, User, UserCredentials};

/// Row-level access to the `users` and `saves` tables.
///
/// Each method maps to a single query. Implementations must enforce
/// username uniqueness on insert and report a clash as
/// [`StoreError::DuplicateUsername`].
#[async_trait]
pub trait Repository: Send + Sync {
    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, StoreError>;

    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn find_user_id(&self, username: &str) -> Result<Option<i32>, StoreError>;

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn insert_save(&self, user_id: i32, recipe_id: &str) -> Result<Save, StoreError>;
}

/// PostgreSQL-backed repository.
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        PgRepository { pool }
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, StoreError> {
        let row = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, username, password, is_admin FROM users WHERE username = $1",
        )
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, User>(
            "SELECT id, username, is_admin FROM users WHERE username = $1",
        )
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_user_id(&self, username: &str) -> Result<Option<i32>, StoreError> {
        let id = sqlx::query_scalar::<_, i32>("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(id)
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password, is_admin) VALUES ($1, $2, $3)
             RETURNING id, username, is_admin",
        )
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(user.is_admin)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::DuplicateUsername
                } else {
                    StoreError::Database(e)
                }
            })
    }

    async fn insert_save(&self, user_id: i32, recipe_id: &str) -> Result<Save, StoreError> {
        let save = sqlx::query_as::<_, Save>(
            "INSERT INTO saves (user_id, recipe_id) VALUES ($1, $2) RETURNING id",
        )
            .bind(user_id)
            .bind(recipe_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    StoreError::NotFound(format!("id {}", user_id))
                } else {
                    StoreError::Database(e)
                }
            })?;
        Ok(save)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: bcrypt::hash("secret1", 4).unwrap(),
            is_admin: false,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL pointing at a PostgreSQL server"]
    async fn unique_constraint_maps_to_duplicate(pool: PgPool) {
        let repo = PgRepository::new(pool);
        repo.insert_user(new_user("alice")).await.unwrap();

        let err = repo.insert_user(new_user("alice")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Duplicate);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL pointing at a PostgreSQL server"]
    async fn save_rows_reference_their_user(pool: PgPool) {
        let repo = PgRepository::new(pool.clone());
        let user = repo.insert_user(new_user("alice")).await.unwrap();

        let save = repo.insert_save(user.id, "716429").await.unwrap();

        let (user_id, recipe_id): (i32, String) =
            sqlx::query_as("SELECT user_id, recipe_id FROM saves WHERE id = $1")
                .bind(save.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(user_id, user.id);
        assert_eq!(recipe_id, "716429");
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL pointing at a PostgreSQL server"]
    async fn save_for_missing_user_is_not_found(pool: PgPool) {
        let repo = PgRepository::new(pool);
        let err = repo.insert_save(42, "716429").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
