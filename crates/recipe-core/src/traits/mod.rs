//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CategoryRepository, CommentFilter, CommentRepository, LikeRepository, RecipeRepository,
    RepoResult, UserRepository,
};
