//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use recipe_core::{
    BatchDeleteOutcome, Comment, CommentFilter, CommentRepository, Id, NewComment, RepoResult,
    Status,
};

use crate::models::CommentModel;

use super::error::{comment_not_found, map_db_error};
use super::{batch_outcome, raw_ids};

/// Bound parameters for a filtered lookup; `None` disables that predicate
#[derive(Debug, Default, PartialEq, Eq)]
struct FilterParams {
    recipe_id: Option<i64>,
    status: Option<&'static str>,
    user_id: Option<i64>,
}

impl From<CommentFilter> for FilterParams {
    fn from(filter: CommentFilter) -> Self {
        match filter {
            CommentFilter::Recipe(recipe_id) => Self {
                recipe_id: Some(recipe_id.into_inner()),
                ..Self::default()
            },
            CommentFilter::Status(status) => Self {
                status: Some(status.as_str()),
                ..Self::default()
            },
            CommentFilter::Author(user_id) => Self {
                user_id: Some(user_id.into_inner()),
                ..Self::default()
            },
            CommentFilter::RecipeAndStatus(recipe_id, status) => Self {
                recipe_id: Some(recipe_id.into_inner()),
                status: Some(status.as_str()),
                user_id: None,
            },
        }
    }
}

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, comment), fields(user_id = %comment.user_id, recipe_id = %comment.recipe_id))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let model = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (text, date, status, user_id, recipe_id)
            VALUES ($1, NOW(), 'inactive', $2, $3)
            RETURNING id, text, date, status, user_id, recipe_id
            ",
        )
        .bind(&comment.text)
        .bind(comment.user_id.into_inner())
        .bind(comment.recipe_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Comment::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, text, date, status, user_id, recipe_id
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, text, date, status, user_id, recipe_id
            FROM comments
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by(&self, filter: CommentFilter) -> RepoResult<Vec<Comment>> {
        let params = FilterParams::from(filter);

        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, text, date, status, user_id, recipe_id
            FROM comments
            WHERE ($1::BIGINT IS NULL OR recipe_id = $1)
              AND ($2::TEXT IS NULL OR status = $2)
              AND ($3::BIGINT IS NULL OR user_id = $3)
            ORDER BY id
            ",
        )
        .bind(params.recipe_id)
        .bind(params.status)
        .bind(params.user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, text))]
    async fn update_text(&self, id: Id, text: &str) -> RepoResult<Comment> {
        let model = sqlx::query_as::<_, CommentModel>(
            r"
            UPDATE comments
            SET text = $2
            WHERE id = $1
            RETURNING id, text, date, status, user_id, recipe_id
            ",
        )
        .bind(id.into_inner())
        .bind(text)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Comment::from).ok_or_else(|| comment_not_found(id))
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: Id, status: Status) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            UPDATE comments
            SET status = $2
            WHERE id = $1
            RETURNING id, text, date, status, user_id, recipe_id
            ",
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn remove_by_id(&self, id: Id) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn remove_all_by_ids(&self, ids: &[Id]) -> RepoResult<BatchDeleteOutcome> {
        let removed = sqlx::query_scalar::<_, i64>(
            r"
            DELETE FROM comments WHERE id = ANY($1) RETURNING id
            ",
        )
        .bind(raw_ids(ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(batch_outcome(ids, removed))
    }
}
