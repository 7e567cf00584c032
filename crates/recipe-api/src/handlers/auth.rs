//! Authentication handlers
//!
//! Endpoints for registration, login, and the current user.

use axum::extract::State;
use recipe_service::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use recipe_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<ApiJson<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(ApiJson(response)))
}

/// Login with email and password
///
/// POST /auth
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Created<ApiJson<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Created(ApiJson(response)))
}

/// Get the authenticated user
///
/// GET /auth/me
pub async fn current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.current_user(auth.user_id).await?;
    Ok(ApiJson(response))
}
