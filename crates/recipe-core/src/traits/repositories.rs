//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs and the infrastructure layer
//! provides the implementation. Every store reports missing rows through
//! `Option`/`bool` rather than errors, so callers decide how absence maps to
//! their own failure.

use async_trait::async_trait;

use crate::entities::{
    Category, Comment, Like, NewCategory, NewComment, NewRecipe, NewUser, RecipeAggregate,
    RecipeChanges, RecipeSummary, User, UserChanges,
};
use crate::error::DomainError;
use crate::value_objects::{BatchDeleteOutcome, Id, Status};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Insert a user; a taken email yields `EmailAlreadyExists`
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Apply a partial update; a missing user yields `UserNotFound`
    async fn update(&self, id: Id, changes: &UserChanges) -> RepoResult<User>;

    /// Set the moderation status, `None` when the user does not exist
    async fn set_status(&self, id: Id, status: Status) -> RepoResult<Option<User>>;

    /// List users, optionally restricted to one status
    async fn list(&self, status: Option<Status>) -> RepoResult<Vec<User>>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Id) -> RepoResult<Option<String>>;

    /// Delete one user, `false` when nothing was removed
    async fn remove_by_id(&self, id: Id) -> RepoResult<bool>;

    /// Delete several users, reporting which ids were removed
    async fn remove_all_by_ids(&self, ids: &[Id]) -> RepoResult<BatchDeleteOutcome>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a category; nesting past the depth limit yields `CategoryTooDeep`
    async fn create(&self, category: &NewCategory) -> RepoResult<Category>;

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Category>>;

    /// Direct children of a category
    async fn children(&self, id: Id) -> RepoResult<Vec<Category>>;

    async fn list(&self) -> RepoResult<Vec<Category>>;

    /// Replace name and parent; a missing category yields `CategoryNotFound`
    ///
    /// The placement checks and the write are atomic with respect to other
    /// category writes: a parent inside the category's own subtree yields
    /// `CategoryCycle`, and a move past the depth limit `CategoryTooDeep`.
    async fn update(&self, id: Id, category: &NewCategory) -> RepoResult<Category>;

    /// The category and all of its descendants, unordered
    async fn subtree(&self, id: Id) -> RepoResult<Vec<Category>>;

    /// Delete a category; descendants go with it
    async fn remove_by_id(&self, id: Id) -> RepoResult<bool>;

    async fn remove_all_by_ids(&self, ids: &[Id]) -> RepoResult<BatchDeleteOutcome>;
}

// ============================================================================
// Comment Repository
// ============================================================================

/// Named comment lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentFilter {
    Recipe(Id),
    Status(Status),
    Author(Id),
    RecipeAndStatus(Id, Status),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment as inactive, dated now
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Comment>>;

    async fn list(&self) -> RepoResult<Vec<Comment>>;

    async fn find_by(&self, filter: CommentFilter) -> RepoResult<Vec<Comment>>;

    /// Replace the text; a missing comment yields `CommentNotFound`
    async fn update_text(&self, id: Id, text: &str) -> RepoResult<Comment>;

    async fn set_status(&self, id: Id, status: Status) -> RepoResult<Option<Comment>>;

    async fn remove_by_id(&self, id: Id) -> RepoResult<bool>;

    async fn remove_all_by_ids(&self, ids: &[Id]) -> RepoResult<BatchDeleteOutcome>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Record a like; a repeat like yields `LikeAlreadyExists`
    async fn create(&self, user_id: Id, recipe_id: Id) -> RepoResult<Like>;

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Like>>;

    async fn remove_by_id(&self, id: Id) -> RepoResult<bool>;
}

// ============================================================================
// Recipe Repository
// ============================================================================

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Insert the header and all steps atomically
    async fn create(&self, recipe: &NewRecipe) -> RepoResult<RecipeAggregate>;

    /// Load the full aggregate with steps, comments and counts
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<RecipeAggregate>>;

    /// Recipes with comment and like counts, optionally filtered by status
    async fn list(&self, status: Option<Status>) -> RepoResult<Vec<RecipeSummary>>;

    /// Apply header changes and step upserts atomically
    ///
    /// A missing recipe yields `RecipeNotFound`; a step id that does not
    /// belong to the recipe yields `StepNotFound` and nothing is written.
    async fn update(&self, id: Id, changes: &RecipeChanges) -> RepoResult<RecipeAggregate>;

    async fn set_status(&self, id: Id, status: Status) -> RepoResult<Option<RecipeAggregate>>;

    /// Delete a recipe with its steps, comments and likes
    async fn remove_by_id(&self, id: Id) -> RepoResult<bool>;

    async fn remove_all_by_ids(&self, ids: &[Id]) -> RepoResult<BatchDeleteOutcome>;
}
