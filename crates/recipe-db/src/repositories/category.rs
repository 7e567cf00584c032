//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{instrument, warn};

use recipe_core::{
    check_category_depth, BatchDeleteOutcome, Category, CategoryRepository, DomainError, Id,
    NewCategory, RepoResult, MAX_CATEGORY_DEPTH,
};

use crate::models::CategoryModel;

use super::error::{category_not_found, map_db_error};
use super::{batch_outcome, raw_ids};

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Advisory lock key held by every write that attaches a category to a parent
const TREE_LOCK_KEY: i64 = 0x7265_6369_7065;

/// Recursive walks stop one level past the limit so a bad row cannot run away
const WALK_LIMIT: i32 = MAX_CATEGORY_DEPTH as i32 + 1;

/// Serialize tree reshaping until the surrounding transaction ends
async fn lock_tree(conn: &mut PgConnection) -> RepoResult<()> {
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(TREE_LOCK_KEY)
        .execute(conn)
        .await
        .map_err(map_db_error)?;
    Ok(())
}

/// Depth of a category counted from its root (a root is 1, a missing id 0)
async fn depth_of(conn: &mut PgConnection, id: Id) -> RepoResult<usize> {
    let depth = sqlx::query_scalar::<_, i32>(
        r"
        WITH RECURSIVE chain AS (
            SELECT parent_id, 1 AS depth FROM categories WHERE id = $1
            UNION ALL
            SELECT c.parent_id, chain.depth + 1
            FROM categories c
            JOIN chain ON c.id = chain.parent_id
            WHERE chain.depth < $2
        )
        SELECT COALESCE(MAX(depth), 0) FROM chain
        ",
    )
    .bind(id.into_inner())
    .bind(WALK_LIMIT)
    .fetch_one(conn)
    .await
    .map_err(map_db_error)?;

    Ok(usize::try_from(depth).unwrap_or(0))
}

/// Ids under `id` (itself included) with their level below it, `id` at 1
async fn subtree_levels(conn: &mut PgConnection, id: Id) -> RepoResult<Vec<(i64, i32)>> {
    sqlx::query_as::<_, (i64, i32)>(
        r"
        WITH RECURSIVE tree AS (
            SELECT id, 1 AS level FROM categories WHERE id = $1
            UNION ALL
            SELECT c.id, t.level + 1
            FROM categories c
            JOIN tree t ON c.parent_id = t.id
            WHERE t.level < $2
        )
        SELECT id, level FROM tree
        ",
    )
    .bind(id.into_inner())
    .bind(WALK_LIMIT)
    .fetch_all(conn)
    .await
    .map_err(map_db_error)
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self, category), fields(name = %category.name))]
    async fn create(&self, category: &NewCategory) -> RepoResult<Category> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        lock_tree(&mut *tx).await?;

        if let Some(parent_id) = category.parent_id {
            check_category_depth(depth_of(&mut *tx, parent_id).await?, 1)?;
        }

        let model = sqlx::query_as::<_, CategoryModel>(
            r"
            INSERT INTO categories (name, parent_id)
            VALUES ($1, $2)
            RETURNING id, name, parent_id
            ",
        )
        .bind(&category.name)
        .bind(category.parent_id.map(Id::into_inner))
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(Category::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, parent_id FROM categories WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn children(&self, id: Id) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, parent_id FROM categories WHERE parent_id = $1 ORDER BY id
            ",
        )
        .bind(id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, parent_id FROM categories ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self, category), fields(name = %category.name))]
    async fn update(&self, id: Id, category: &NewCategory) -> RepoResult<Category> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        // Two moves checked concurrently could each pass and close a loop
        lock_tree(&mut *tx).await?;

        if let Some(parent_id) = category.parent_id {
            let levels = subtree_levels(&mut *tx, id).await?;
            if levels.iter().any(|(node, _)| *node == parent_id.into_inner()) {
                warn!(category_id = %id, parent_id = %parent_id, "Rejected move into own subtree");
                return Err(DomainError::CategoryCycle);
            }

            let height = levels.iter().map(|(_, level)| *level).max().unwrap_or(1);
            check_category_depth(
                depth_of(&mut *tx, parent_id).await?,
                usize::try_from(height).unwrap_or(MAX_CATEGORY_DEPTH),
            )?;
        }

        let model = sqlx::query_as::<_, CategoryModel>(
            r"
            UPDATE categories
            SET name = $2, parent_id = $3
            WHERE id = $1
            RETURNING id, name, parent_id
            ",
        )
        .bind(id.into_inner())
        .bind(&category.name)
        .bind(category.parent_id.map(Id::into_inner))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let updated = model.map(Category::from).ok_or_else(|| category_not_found(id))?;
        tx.commit().await.map_err(map_db_error)?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn subtree(&self, id: Id) -> RepoResult<Vec<Category>> {
        // UNION (not UNION ALL) stops the walk if a cycle ever exists
        let results = sqlx::query_as::<_, CategoryModel>(
            r"
            WITH RECURSIVE tree AS (
                SELECT id, name, parent_id FROM categories WHERE id = $1
                UNION
                SELECT c.id, c.name, c.parent_id
                FROM categories c
                JOIN tree t ON c.parent_id = t.id
            )
            SELECT id, name, parent_id FROM tree ORDER BY id
            ",
        )
        .bind(id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn remove_by_id(&self, id: Id) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn remove_all_by_ids(&self, ids: &[Id]) -> RepoResult<BatchDeleteOutcome> {
        // Only the explicitly requested rows are reported; cascaded children are not
        let removed = sqlx::query_scalar::<_, i64>(
            r"
            DELETE FROM categories WHERE id = ANY($1) RETURNING id
            ",
        )
        .bind(raw_ids(ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(batch_outcome(ids, removed))
    }
}
