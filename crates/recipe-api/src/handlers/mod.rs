//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod categories;
pub mod comments;
pub mod health;
pub mod likes;
pub mod recipes;
pub mod users;
