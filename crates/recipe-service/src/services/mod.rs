//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and applies the
//! [`AccessGuard`] checks its routes need before touching a store.

pub mod auth;
pub mod category;
pub mod comment;
pub mod context;
pub mod error;
pub mod guard;
pub mod like;
pub mod recipe;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::AuthService;
pub use category::CategoryService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use guard::AccessGuard;
pub use like::LikeService;
pub use recipe::RecipeService;
pub use user::UserService;
