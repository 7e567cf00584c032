//! User administration handlers
//!
//! Every endpoint here is admin-only; the service enforces the role.

use axum::extract::State;
use recipe_core::{BatchDeleteOutcome, Moderation};
use recipe_service::dto::{BatchDeleteRequest, IdRequest, StatusQuery, UpdateUserRequest, UserResponse};
use recipe_service::UserService;

use crate::extractors::{AuthUser, IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiJson, ApiResult, NoContent};
use crate::state::AppState;

/// List users, optionally filtered by status
///
/// GET /user?status=
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<StatusQuery>,
) -> ApiResult<ApiJson<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let users = service.list(auth.user_id, query.status).await?;
    Ok(ApiJson(users))
}

/// Get user by ID
///
/// GET /user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.get(auth.user_id, id).await?;
    Ok(ApiJson(user))
}

/// PUT /user/Update
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.update(auth.user_id, request).await?;
    Ok(ApiJson(user))
}

/// POST /user/Delete
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete(auth.user_id, request.id).await?;
    Ok(NoContent)
}

/// POST /user/BatchDelete
pub async fn batch_delete_users(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<BatchDeleteRequest>,
) -> ApiResult<ApiJson<BatchDeleteOutcome>> {
    let service = UserService::new(state.service_context());
    let outcome = service.batch_delete(auth.user_id, &request.ids).await?;
    Ok(ApiJson(outcome))
}

/// POST /user/Activate
pub async fn activate_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service
        .moderate(auth.user_id, request.id, Moderation::Activate)
        .await?;
    Ok(ApiJson(user))
}

/// POST /user/Deactivate
pub async fn deactivate_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service
        .moderate(auth.user_id, request.id, Moderation::Deactivate)
        .await?;
    Ok(ApiJson(user))
}
