//! Like handlers

use axum::extract::State;
use recipe_service::dto::{CreateLikeRequest, IdRequest, LikeResponse};
use recipe_service::LikeService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Like a recipe as the caller
///
/// POST /like/Create
pub async fn create_like(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateLikeRequest>,
) -> ApiResult<Created<ApiJson<LikeResponse>>> {
    let service = LikeService::new(state.service_context());
    let like = service.create(auth.user_id, request).await?;
    Ok(Created(ApiJson(like)))
}

/// GET /like/{id}
pub async fn get_like(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<LikeResponse>> {
    let service = LikeService::new(state.service_context());
    let like = service.get(id).await?;
    Ok(ApiJson(like))
}

/// Remove one of the caller's likes
///
/// POST /like/Delete
pub async fn delete_like(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<NoContent> {
    let service = LikeService::new(state.service_context());
    service.delete(auth.user_id, request.id).await?;
    Ok(NoContent)
}
