//! Comment handlers

use axum::extract::State;
use recipe_core::{BatchDeleteOutcome, Moderation};
use recipe_service::dto::{
    BatchDeleteRequest, CommentQuery, CommentResponse, CreateCommentRequest, IdRequest,
    UpdateCommentRequest,
};
use recipe_service::CommentService;

use crate::extractors::{AuthUser, IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List comments by recipe and/or status
///
/// GET /comment?recipeId=&status=
pub async fn list_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(query): QueryParams<CommentQuery>,
) -> ApiResult<ApiJson<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service.list(query).await?;
    Ok(ApiJson(comments))
}

/// Comments written by the caller
///
/// GET /comment/mine
pub async fn list_my_comments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service.list_by_author(auth.user_id).await?;
    Ok(ApiJson(comments))
}

/// GET /comment/{id}
pub async fn get_comment(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service.get(id).await?;
    Ok(ApiJson(comment))
}

/// Post a comment as the caller
///
/// POST /comment/Create
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<ApiJson<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comment = service.create(auth.user_id, request).await?;
    Ok(Created(ApiJson(comment)))
}

/// Edit comment text (author or admin)
///
/// PUT /comment/Update
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<ApiJson<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service.update(auth.user_id, request).await?;
    Ok(ApiJson(comment))
}

/// Delete a comment (author or admin)
///
/// POST /comment/Delete
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete(auth.user_id, request.id).await?;
    Ok(NoContent)
}

/// POST /comment/BatchDelete
pub async fn batch_delete_comments(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<BatchDeleteRequest>,
) -> ApiResult<ApiJson<BatchDeleteOutcome>> {
    let service = CommentService::new(state.service_context());
    let outcome = service.batch_delete(auth.user_id, &request.ids).await?;
    Ok(ApiJson(outcome))
}

/// POST /comment/Activate
pub async fn activate_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<ApiJson<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service
        .moderate(auth.user_id, request.id, Moderation::Activate)
        .await?;
    Ok(ApiJson(comment))
}

/// POST /comment/Deactivate
pub async fn deactivate_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<ApiJson<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service
        .moderate(auth.user_id, request.id, Moderation::Deactivate)
        .await?;
    Ok(ApiJson(comment))
}
