//! Comment entity - moderated user comment on a recipe

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{Id, Status};

use super::require_text;

/// Maximum comment length in characters
pub const MAX_COMMENT_LENGTH: usize = 2000;

/// Comment on a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Id,
    pub text: String,
    /// Set once at creation
    pub date: DateTime<Utc>,
    pub status: Status,
    pub user_id: Id,
    pub recipe_id: Id,
}

impl Comment {
    #[inline]
    pub fn is_authored_by(&self, user_id: Id) -> bool {
        self.user_id == user_id
    }

    /// Check comment text constraints
    pub fn validate_text(text: &str) -> Result<(), DomainError> {
        require_text("text", text)?;
        if text.chars().count() > MAX_COMMENT_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: MAX_COMMENT_LENGTH,
            });
        }
        Ok(())
    }
}

/// Values for inserting a comment; date and status are assigned by the store
#[derive(Debug, Clone)]
pub struct NewComment {
    pub text: String,
    pub user_id: Id,
    pub recipe_id: Id,
}

impl NewComment {
    pub fn new(text: String, user_id: Id, recipe_id: Id) -> Self {
        Self {
            text,
            user_id,
            recipe_id,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        Comment::validate_text(&self.text)
    }
}
