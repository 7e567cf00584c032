//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use recipe_core::{DomainError, Id, Like, LikeRepository, RepoResult};

use crate::models::LikeModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn create(&self, user_id: Id, recipe_id: Id) -> RepoResult<Like> {
        let model = sqlx::query_as::<_, LikeModel>(
            r"
            INSERT INTO likes (user_id, recipe_id)
            VALUES ($1, $2)
            RETURNING id, user_id, recipe_id, created_at
            ",
        )
        .bind(user_id.into_inner())
        .bind(recipe_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::LikeAlreadyExists))?;

        Ok(Like::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Like>> {
        let result = sqlx::query_as::<_, LikeModel>(
            r"
            SELECT id, user_id, recipe_id, created_at FROM likes WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Like::from))
    }

    #[instrument(skip(self))]
    async fn remove_by_id(&self, id: Id) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM likes WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
