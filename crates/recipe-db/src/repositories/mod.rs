//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in recipe-core.

mod category;
mod comment;
mod error;
mod like;
mod recipe;
mod user;

pub use category::PgCategoryRepository;
pub use comment::PgCommentRepository;
pub use like::PgLikeRepository;
pub use recipe::PgRecipeRepository;
pub use user::PgUserRepository;

use recipe_core::{BatchDeleteOutcome, Id};

/// Raw ids for an `= ANY($1)` bind
fn raw_ids(ids: &[Id]) -> Vec<i64> {
    ids.iter().map(|id| id.into_inner()).collect()
}

/// Compare the ids a `DELETE ... RETURNING id` removed against the request
fn batch_outcome(requested: &[Id], removed: Vec<i64>) -> BatchDeleteOutcome {
    let removed: Vec<Id> = removed.into_iter().map(Id::new).collect();
    BatchDeleteOutcome::from_removed(requested, &removed)
}
