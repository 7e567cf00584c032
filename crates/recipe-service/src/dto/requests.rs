//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names are camelCase on the wire.

use recipe_core::{Id, Status};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Registration request; any admin flag in the body is ignored
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Shared Requests
// ============================================================================

/// Body of the Delete, Activate, and Deactivate routes
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IdRequest {
    pub id: Id,
}

/// Body of the BatchDelete routes
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteRequest {
    #[validate(length(min = 1, max = 500, message = "ids must contain 1-500 entries"))]
    pub ids: Vec<Id>,
}

/// `?status=` filter for list routes
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusQuery {
    pub status: Option<Status>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Administrative user update
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub id: Id,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: Option<String>,

    pub is_admin: Option<bool>,

    pub status: Option<Status>,
}

// ============================================================================
// Recipe Requests
// ============================================================================

/// One recipe step; `id` selects an existing step on update
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StepRequest {
    pub id: Option<Id>,

    #[validate(length(max = 200, message = "Step title must be at most 200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Step text must be 1-5000 characters"))]
    pub text: String,

    pub image_path: Option<String>,
}

/// Create recipe request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    pub preview_image_path: Option<String>,

    pub category_id: Option<Id>,

    #[validate(length(min = 1, message = "At least one step is required"), nested)]
    pub steps: Vec<StepRequest>,
}

/// Partial recipe update; omitted steps are kept
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    pub id: Id,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub preview_image_path: Option<String>,

    pub category_id: Option<Id>,

    /// Admin only
    pub status: Option<Status>,

    #[serde(default)]
    #[validate(nested)]
    pub steps: Vec<StepRequest>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub text: String,

    pub recipe_id: Id,
}

/// Update comment request; only the text changes
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentRequest {
    pub id: Id,

    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub text: String,
}

/// `GET /comment` filters
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentQuery {
    pub recipe_id: Option<Id>,
    pub status: Option<Status>,
}

// ============================================================================
// Like Requests
// ============================================================================

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLikeRequest {
    pub recipe_id: Id,
}

// ============================================================================
// Category Requests
// ============================================================================

/// Create category request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    pub name: String,

    pub parent_id: Option<Id>,
}

/// Update category request; a missing `parentId` makes the category a root
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub id: Id,

    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    pub name: String,

    pub parent_id: Option<Id>,
}
