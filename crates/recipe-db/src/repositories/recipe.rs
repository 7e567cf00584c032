//! PostgreSQL implementation of RecipeRepository
//!
//! A recipe is stored across `recipes`, `recipe_steps`, `comments` and
//! `likes`. Every write runs in one transaction and returns the aggregate as
//! read inside that transaction; reads assemble the aggregate from a single
//! repeatable-read snapshot so counts and lists agree with each other.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument};

use recipe_core::{
    BatchDeleteOutcome, DomainError, Id, NewRecipe, RecipeAggregate, RecipeChanges,
    RecipeRepository, RecipeSummary, RepoResult, Status, StepDraft,
};

use crate::mappers::assemble_aggregate;
use crate::models::{
    CommentModel, RecipeCountsModel, RecipeModel, RecipeStepModel, RecipeSummaryModel,
};

use super::error::{map_db_error, recipe_not_found};
use super::{batch_outcome, raw_ids};

/// PostgreSQL implementation of RecipeRepository
#[derive(Clone)]
pub struct PgRecipeRepository {
    pool: PgPool,
}

impl PgRecipeRepository {
    /// Create a new PgRecipeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn insert_step(conn: &mut PgConnection, recipe_id: Id, step: &StepDraft) -> RepoResult<()> {
    sqlx::query(
        r"
        INSERT INTO recipe_steps (recipe_id, title, text, image_path)
        VALUES ($1, $2, $3, $4)
        ",
    )
    .bind(recipe_id.into_inner())
    .bind(step.title.as_deref())
    .bind(&step.text)
    .bind(step.image_path.as_deref())
    .execute(&mut *conn)
    .await
    .map_err(map_db_error)?;

    Ok(())
}

/// Replace an existing step in place; the step must belong to `recipe_id`
async fn update_step(
    conn: &mut PgConnection,
    recipe_id: Id,
    step_id: Id,
    step: &StepDraft,
) -> RepoResult<()> {
    let result = sqlx::query(
        r"
        UPDATE recipe_steps
        SET title = $3, text = $4, image_path = $5
        WHERE id = $1 AND recipe_id = $2
        ",
    )
    .bind(step_id.into_inner())
    .bind(recipe_id.into_inner())
    .bind(step.title.as_deref())
    .bind(&step.text)
    .bind(step.image_path.as_deref())
    .execute(&mut *conn)
    .await
    .map_err(map_db_error)?;

    if result.rows_affected() == 0 {
        return Err(DomainError::StepNotFound(step_id));
    }
    Ok(())
}

/// Read header, steps, comments and counts for one recipe
async fn load_aggregate(conn: &mut PgConnection, id: Id) -> RepoResult<Option<RecipeAggregate>> {
    let Some(header) = sqlx::query_as::<_, RecipeModel>(
        r"
        SELECT id, title, preview_image_path, category_id, status, created_at, updated_at
        FROM recipes
        WHERE id = $1
        ",
    )
    .bind(id.into_inner())
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_db_error)?
    else {
        return Ok(None);
    };

    let steps = sqlx::query_as::<_, RecipeStepModel>(
        r"
        SELECT id, recipe_id, title, text, image_path
        FROM recipe_steps
        WHERE recipe_id = $1
        ORDER BY id
        ",
    )
    .bind(id.into_inner())
    .fetch_all(&mut *conn)
    .await
    .map_err(map_db_error)?;

    let comments = sqlx::query_as::<_, CommentModel>(
        r"
        SELECT id, text, date, status, user_id, recipe_id
        FROM comments
        WHERE recipe_id = $1
        ORDER BY id
        ",
    )
    .bind(id.into_inner())
    .fetch_all(&mut *conn)
    .await
    .map_err(map_db_error)?;

    let counts = sqlx::query_as::<_, RecipeCountsModel>(
        r"
        SELECT
            (SELECT COUNT(*) FROM comments WHERE recipe_id = $1 AND status = 'active') AS comment_count,
            (SELECT COUNT(*) FROM likes WHERE recipe_id = $1) AS like_count
        ",
    )
    .bind(id.into_inner())
    .fetch_one(&mut *conn)
    .await
    .map_err(map_db_error)?;

    Ok(Some(assemble_aggregate(header, steps, comments, counts)))
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    #[instrument(skip(self, recipe), fields(title = %recipe.title, steps = recipe.steps.len()))]
    async fn create(&self, recipe: &NewRecipe) -> RepoResult<RecipeAggregate> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO recipes (title, preview_image_path, category_id, status)
            VALUES ($1, $2, $3, 'inactive')
            RETURNING id
            ",
        )
        .bind(&recipe.title)
        .bind(recipe.preview_image_path.as_deref())
        .bind(recipe.category_id.map(Id::into_inner))
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)
        .map(Id::new)?;

        // Step order is insertion order
        for step in &recipe.steps {
            insert_step(&mut *tx, id, step).await?;
        }

        let aggregate = load_aggregate(&mut *tx, id)
            .await?
            .ok_or_else(|| recipe_not_found(id))?;

        tx.commit().await.map_err(map_db_error)?;
        debug!(recipe_id = %id, "Recipe created");

        Ok(aggregate)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<RecipeAggregate>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let aggregate = load_aggregate(&mut *tx, id).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(aggregate)
    }

    #[instrument(skip(self))]
    async fn list(&self, status: Option<Status>) -> RepoResult<Vec<RecipeSummary>> {
        let results = sqlx::query_as::<_, RecipeSummaryModel>(
            r"
            SELECT r.id, r.title, r.preview_image_path, r.category_id, r.status,
                   r.created_at, r.updated_at,
                   (SELECT COUNT(*) FROM comments c
                     WHERE c.recipe_id = r.id AND c.status = 'active') AS comment_count,
                   (SELECT COUNT(*) FROM likes l WHERE l.recipe_id = r.id) AS like_count
            FROM recipes r
            WHERE $1::TEXT IS NULL OR r.status = $1
            ORDER BY r.id
            ",
        )
        .bind(status.map(Status::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(RecipeSummary::from).collect())
    }

    #[instrument(skip(self, changes), fields(steps = changes.steps.len()))]
    async fn update(&self, id: Id, changes: &RecipeChanges) -> RepoResult<RecipeAggregate> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Serialize concurrent writers of the same recipe
        let locked = sqlx::query_scalar::<_, i64>(
            r"
            SELECT id FROM recipes WHERE id = $1 FOR UPDATE
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if locked.is_none() {
            return Err(recipe_not_found(id));
        }

        // Absent fields keep their stored value
        sqlx::query(
            r"
            UPDATE recipes
            SET title = COALESCE($2, title),
                preview_image_path = COALESCE($3, preview_image_path),
                category_id = COALESCE($4, category_id),
                status = COALESCE($5, status),
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(changes.title.as_deref())
        .bind(changes.preview_image_path.as_deref())
        .bind(changes.category_id.map(Id::into_inner))
        .bind(changes.status.map(Status::as_str))
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Dropping `tx` on an early return rolls everything back
        for step in &changes.steps {
            match step.id {
                Some(step_id) => update_step(&mut *tx, id, step_id, step).await?,
                None => insert_step(&mut *tx, id, step).await?,
            }
        }

        let aggregate = load_aggregate(&mut *tx, id)
            .await?
            .ok_or_else(|| recipe_not_found(id))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(aggregate)
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: Id, status: Status) -> RepoResult<Option<RecipeAggregate>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE recipes SET status = $2, updated_at = NOW() WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let aggregate = load_aggregate(&mut *tx, id).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(aggregate)
    }

    #[instrument(skip(self))]
    async fn remove_by_id(&self, id: Id) -> RepoResult<bool> {
        // Steps, comments and likes go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
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
            DELETE FROM recipes WHERE id = ANY($1) RETURNING id
            ",
        )
        .bind(raw_ids(ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(batch_outcome(ids, removed))
    }
}
