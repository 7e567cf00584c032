//! Recipe handlers
//!
//! Reads and writes of the recipe aggregate. Moderation and deletion are
//! admin-only.

use axum::extract::State;
use recipe_core::{BatchDeleteOutcome, Moderation};
use recipe_service::dto::{
    BatchDeleteRequest, CreateRecipeRequest, IdRequest, RecipeResponse, RecipeSummaryResponse,
    StatusQuery, UpdateRecipeRequest,
};
use recipe_service::RecipeService;

use crate::extractors::{AuthUser, IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List recipe summaries
///
/// GET /recipe?status=
pub async fn list_recipes(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(query): QueryParams<StatusQuery>,
) -> ApiResult<ApiJson<Vec<RecipeSummaryResponse>>> {
    let service = RecipeService::new(state.service_context());
    let recipes = service.list(query.status).await?;
    Ok(ApiJson(recipes))
}

/// Get the full recipe with steps, comments and counts
///
/// GET /recipe/{id}
pub async fn get_recipe(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<RecipeResponse>> {
    let service = RecipeService::new(state.service_context());
    let recipe = service.get(id).await?;
    Ok(ApiJson(recipe))
}

/// Create a recipe with its steps
///
/// POST /recipe/Create
pub async fn create_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateRecipeRequest>,
) -> ApiResult<Created<ApiJson<RecipeResponse>>> {
    let service = RecipeService::new(state.service_context());
    let recipe = service.create(auth.user_id, request).await?;
    Ok(Created(ApiJson(recipe)))
}

/// Update header fields and steps
///
/// PUT /recipe/Update
pub async fn update_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateRecipeRequest>,
) -> ApiResult<ApiJson<RecipeResponse>> {
    let service = RecipeService::new(state.service_context());
    let recipe = service.update(auth.user_id, request).await?;
    Ok(ApiJson(recipe))
}

/// POST /recipe/Delete
pub async fn delete_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<NoContent> {
    let service = RecipeService::new(state.service_context());
    service.delete(auth.user_id, request.id).await?;
    Ok(NoContent)
}

/// POST /recipe/BatchDelete
pub async fn batch_delete_recipes(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<BatchDeleteRequest>,
) -> ApiResult<ApiJson<BatchDeleteOutcome>> {
    let service = RecipeService::new(state.service_context());
    let outcome = service.batch_delete(auth.user_id, &request.ids).await?;
    Ok(ApiJson(outcome))
}

/// POST /recipe/Activate
pub async fn activate_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<ApiJson<RecipeResponse>> {
    let service = RecipeService::new(state.service_context());
    let recipe = service
        .moderate(auth.user_id, request.id, Moderation::Activate)
        .await?;
    Ok(ApiJson(recipe))
}

/// POST /recipe/Deactivate
pub async fn deactivate_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<ApiJson<RecipeResponse>> {
    let service = RecipeService::new(state.service_context());
    let recipe = service
        .moderate(auth.user_id, request.id, Moderation::Deactivate)
        .await?;
    Ok(ApiJson(recipe))
}
