//! # recipe-service
//!
//! Application layer containing the access guard, use-case services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AccessGuard, AuthService, CategoryService, CommentService, LikeService, RecipeService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
