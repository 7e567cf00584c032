//! # recipe-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    check_category_depth, normalize_email, Category, CategoryDetail, CategoryTree, Comment, Like,
    NewCategory, NewComment, NewRecipe, NewUser, Recipe, RecipeAggregate, RecipeChanges,
    RecipeStep, RecipeSummary, StepDraft, User, UserChanges, MAX_CATEGORY_DEPTH,
};
pub use error::DomainError;
pub use traits::{
    CategoryRepository, CommentFilter, CommentRepository, LikeRepository, RecipeRepository,
    RepoResult, UserRepository,
};
pub use value_objects::{BatchDeleteOutcome, Id, IdParseError, Moderation, Status, StatusParseError};
