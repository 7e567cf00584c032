//! Recipe database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for recipes table
#[derive(Debug, Clone, FromRow)]
pub struct RecipeModel {
    pub id: i64,
    pub title: String,
    pub preview_image_path: Option<String>,
    pub category_id: Option<i64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for recipe_steps table
#[derive(Debug, Clone, FromRow)]
pub struct RecipeStepModel {
    pub id: i64,
    pub recipe_id: i64,
    pub title: Option<String>,
    pub text: String,
    pub image_path: Option<String>,
}

/// Derived counts (from query)
#[derive(Debug, Clone, Copy, FromRow)]
pub struct RecipeCountsModel {
    /// Active comments only
    pub comment_count: i64,
    pub like_count: i64,
}

/// Recipe header joined with its counts (from query)
#[derive(Debug, Clone, FromRow)]
pub struct RecipeSummaryModel {
    #[sqlx(flatten)]
    pub recipe: RecipeModel,
    #[sqlx(flatten)]
    pub counts: RecipeCountsModel,
}
