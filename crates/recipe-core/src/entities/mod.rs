//! Domain entities - core business objects

mod category;
mod comment;
mod like;
mod recipe;
mod user;

pub use category::{
    check_category_depth, Category, CategoryDetail, CategoryTree, NewCategory, MAX_CATEGORY_DEPTH,
};
pub use comment::{Comment, NewComment};
pub use like::Like;
pub use recipe::{
    NewRecipe, Recipe, RecipeAggregate, RecipeChanges, RecipeStep, RecipeSummary, StepDraft,
};
pub use user::{normalize_email, NewUser, User, UserChanges};

use crate::error::DomainError;

/// Reject empty or whitespace-only required text
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::ValidationError(format!("{field} is required")));
    }
    Ok(())
}
