//! Recipe aggregate - header, ordered steps, and derived comment/like metrics

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{Id, Status};

use super::{require_text, Comment};

/// Recipe header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: Id,
    pub title: String,
    pub preview_image_path: Option<String>,
    pub category_id: Option<Id>,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One step of a recipe; steps are ordered by insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeStep {
    pub id: Id,
    pub recipe_id: Id,
    pub title: Option<String>,
    pub text: String,
    pub image_path: Option<String>,
}

/// List view: header plus counts, without steps or comment bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub recipe: Recipe,
    /// Active comments only
    pub comment_count: i64,
    pub like_count: i64,
}

/// Full read model of a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeAggregate {
    pub recipe: Recipe,
    pub steps: Vec<RecipeStep>,
    pub comments: Vec<Comment>,
    /// Active comments only
    pub comment_count: i64,
    pub like_count: i64,
}

/// Step input for create and update
///
/// On update a step carrying an `id` replaces that step in place; a step
/// without one is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDraft {
    pub id: Option<Id>,
    pub title: Option<String>,
    pub text: String,
    pub image_path: Option<String>,
}

impl StepDraft {
    /// New step with text only
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            id: None,
            title: None,
            text: text.into(),
            image_path: None,
        }
    }

    fn validate(&self, position: usize) -> Result<(), DomainError> {
        require_text(&format!("steps[{position}].text"), &self.text)
    }
}

/// Values for creating a recipe
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub preview_image_path: Option<String>,
    pub category_id: Option<Id>,
    pub steps: Vec<StepDraft>,
}

impl NewRecipe {
    /// A recipe needs a title and at least one step, none of which may
    /// reference an existing step id
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("title", &self.title)?;
        if self.steps.is_empty() {
            return Err(DomainError::ValidationError(
                "at least one step is required".to_string(),
            ));
        }
        for (position, step) in self.steps.iter().enumerate() {
            if step.id.is_some() {
                return Err(DomainError::ValidationError(format!(
                    "steps[{position}].id is not allowed when creating a recipe"
                )));
            }
            step.validate(position)?;
        }
        Ok(())
    }
}

/// Partial update of a recipe
///
/// `None` fields are left untouched. Steps missing from `steps` are kept as
/// they are; there is no deletion by omission.
#[derive(Debug, Clone, Default)]
pub struct RecipeChanges {
    pub title: Option<String>,
    pub preview_image_path: Option<String>,
    pub category_id: Option<Id>,
    pub status: Option<Status>,
    pub steps: Vec<StepDraft>,
}

impl RecipeChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.preview_image_path.is_none()
            && self.category_id.is_none()
            && self.status.is_none()
            && self.steps.is_empty()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::ValidationError(
                "at least one field must be provided".to_string(),
            ));
        }
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        for (position, step) in self.steps.iter().enumerate() {
            step.validate(position)?;
        }
        Ok(())
    }
}
