//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Id;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Id),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(Id),

    #[error("Recipe step not found: {0}")]
    StepNotFound(Id),

    #[error("Comment not found: {0}")]
    CommentNotFound(Id),

    #[error("Like not found: {0}")]
    LikeNotFound(Id),

    #[error("Category not found: {0}")]
    CategoryNotFound(Id),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("A category cannot be moved under its own subtree")]
    CategoryCycle,

    #[error("Categories may nest at most {max} levels deep")]
    CategoryTooDeep { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Administrator privileges required")]
    AdminRequired,

    #[error("Only the owner may perform this action")]
    NotOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Recipe already liked by this user")]
    LikeAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::RecipeNotFound(_) => "UNKNOWN_RECIPE",
            Self::StepNotFound(_) => "UNKNOWN_STEP",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::LikeNotFound(_) => "UNKNOWN_LIKE",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::InvalidReference(_) => "INVALID_REFERENCE",
            Self::CategoryCycle => "CATEGORY_CYCLE",
            Self::CategoryTooDeep { .. } => "CATEGORY_TOO_DEEP",

            // Authorization
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::NotOwner => "NOT_OWNER",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::LikeAlreadyExists => "LIKE_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::RecipeNotFound(_)
                | Self::StepNotFound(_)
                | Self::CommentNotFound(_)
                | Self::LikeNotFound(_)
                | Self::CategoryNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidStatus(_)
                | Self::ContentTooLong { .. }
                | Self::InvalidReference(_)
                | Self::CategoryCycle
                | Self::CategoryTooDeep { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AdminRequired | Self::NotOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::LikeAlreadyExists)
    }
}
