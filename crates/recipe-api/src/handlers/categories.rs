//! Category handlers
//!
//! Reads are open to any authenticated user; writes require admin.

use axum::extract::State;
use recipe_core::BatchDeleteOutcome;
use recipe_service::dto::{
    BatchDeleteRequest, CategoryDetailResponse, CategoryResponse, CategoryTreeResponse,
    CreateCategoryRequest, IdRequest, UpdateCategoryRequest,
};
use recipe_service::CategoryService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Flat list of all categories
///
/// GET /category
pub async fn list_categories(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<ApiJson<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let categories = service.list().await?;
    Ok(ApiJson(categories))
}

/// Category with its direct children
///
/// GET /category/{id}
pub async fn get_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<CategoryDetailResponse>> {
    let service = CategoryService::new(state.service_context());
    let category = service.get(id).await?;
    Ok(ApiJson(category))
}

/// Full subtree rooted at a category
///
/// GET /category/{id}/tree
pub async fn get_category_tree(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<CategoryTreeResponse>> {
    let service = CategoryService::new(state.service_context());
    let tree = service.tree(id).await?;
    Ok(ApiJson(tree))
}

/// POST /category/Create
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<ApiJson<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let category = service.create(auth.user_id, request).await?;
    Ok(Created(ApiJson(category)))
}

/// Rename or re-parent a category
///
/// PUT /category/Update
pub async fn update_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateCategoryRequest>,
) -> ApiResult<ApiJson<CategoryResponse>> {
    let service = CategoryService::new(state.service_context());
    let category = service.update(auth.user_id, request).await?;
    Ok(ApiJson(category))
}

/// Delete a category and, by cascade, its descendants
///
/// POST /category/Delete
pub async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<NoContent> {
    let service = CategoryService::new(state.service_context());
    service.delete(auth.user_id, request.id).await?;
    Ok(NoContent)
}

/// POST /category/BatchDelete
pub async fn batch_delete_categories(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<BatchDeleteRequest>,
) -> ApiResult<ApiJson<BatchDeleteOutcome>> {
    let service = CategoryService::new(state.service_context());
    let outcome = service.batch_delete(auth.user_id, &request.ids).await?;
    Ok(ApiJson(outcome))
}
