//! Test fixtures and data generators
//!
//! Provides reusable request bodies and typed views of API responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Administrator ensured by every test server
pub const ADMIN_EMAIL: &str = "admin@recipes.test";
pub const ADMIN_PASSWORD: &str = "admin-secret-1";

/// Get a unique suffix for test data
///
/// Test binaries share one database, so uniqueness must hold across processes.
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Registration / login request
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn unique() -> Self {
        Self {
            email: format!("user{}@example.com", unique_suffix()),
            password: "secret123".to_string(),
        }
    }

    pub fn admin() -> Self {
        Self {
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        }
    }
}

/// Auth response (user fields flattened next to the token)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub id: i64,
    pub email: String,
    pub is_admin: bool,
    pub status: String,
    pub token: String,
    pub token_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub is_admin: bool,
    pub status: String,
}

/// One step of a create/update body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
}

impl StepBody {
    pub fn text(text: &str) -> Self {
        Self {
            id: None,
            title: None,
            text: text.to_string(),
        }
    }

    pub fn existing(id: i64, text: &str) -> Self {
        Self {
            id: Some(id),
            title: None,
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeBody {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub steps: Vec<StepBody>,
}

impl CreateRecipeBody {
    pub fn soup() -> Self {
        Self {
            title: format!("Soup {}", unique_suffix()),
            category_id: None,
            steps: vec![StepBody::text("Boil water")],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResponse {
    pub id: i64,
    pub title: Option<String>,
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub text: String,
    pub status: String,
    pub user_id: i64,
    pub recipe_id: i64,
}

/// Full recipe read model
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub id: i64,
    pub title: String,
    pub category_id: Option<i64>,
    pub status: String,
    pub steps: Vec<StepResponse>,
    pub comments: Vec<CommentResponse>,
    pub comment_count: i64,
    pub like_count: i64,
}

/// List entry; carries no steps or comments
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummaryResponse {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub comment_count: i64,
    pub like_count: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub id: i64,
    pub user_id: i64,
    pub recipe_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTreeResponse {
    pub id: i64,
    pub name: String,
    pub children: Vec<CategoryTreeResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteResponse {
    pub deleted: Vec<i64>,
    pub not_found: Vec<i64>,
}
