//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers between domain entities and DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    BatchDeleteRequest, CommentQuery, CreateCategoryRequest, CreateCommentRequest,
    CreateLikeRequest, CreateRecipeRequest, IdRequest, LoginRequest, RegisterRequest,
    StatusQuery, StepRequest, UpdateCategoryRequest, UpdateCommentRequest, UpdateRecipeRequest,
    UpdateUserRequest,
};

pub use responses::{
    ApiResponse, AuthResponse, CategoryDetailResponse, CategoryResponse, CategoryTreeResponse,
    CommentResponse, HealthChecks, HealthResponse, LikeResponse, ReadinessResponse,
    RecipeResponse, RecipeSummaryResponse, StepResponse, UserResponse,
};
