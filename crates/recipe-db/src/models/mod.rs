//! Database models - SQLx-compatible structs for PostgreSQL tables

mod category;
mod comment;
mod like;
mod recipe;
mod user;

pub use category::CategoryModel;
pub use comment::CommentModel;
pub use like::LikeModel;
pub use recipe::{RecipeCountsModel, RecipeModel, RecipeStepModel, RecipeSummaryModel};
pub use user::UserModel;
