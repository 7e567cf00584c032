//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub text: String,
    pub date: DateTime<Utc>,
    pub status: String,
    pub user_id: i64,
    pub recipe_id: i64,
}
