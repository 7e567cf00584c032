//! # recipe-db
//!
//! Database layer implementing the `recipe-core` repository traits with
//! PostgreSQL via SQLx.
//!
//! - Connection pool management and schema migrations
//! - Row models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ```rust,ignore
//! use recipe_db::{create_pool, run_migrations, DatabaseConfig, PgRecipeRepository};
//!
//! let pool = create_pool(&DatabaseConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! let recipes = PgRecipeRepository::new(pool);
//! ```

pub mod mappers;
pub mod migrate;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migrate::{run_migrations, MigrationError};
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgCategoryRepository, PgCommentRepository, PgLikeRepository, PgRecipeRepository,
    PgUserRepository,
};
