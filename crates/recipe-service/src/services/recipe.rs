//! Recipe service
//!
//! Any authenticated caller may create, read, and edit recipes. Moderation,
//! deletion, and status changes through `update` are admin only.

use recipe_core::{BatchDeleteOutcome, DomainError, Id, Moderation, NewRecipe, RecipeChanges, Status};
use tracing::{info, instrument};

use crate::dto::{CreateRecipeRequest, RecipeResponse, RecipeSummaryResponse, UpdateRecipeRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::guard::AccessGuard;

/// Recipe service
pub struct RecipeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RecipeService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn guard(&self) -> AccessGuard<'a> {
        AccessGuard::new(self.ctx)
    }

    /// Create an inactive recipe with its initial steps
    #[instrument(skip(self, request), fields(title = %request.title, steps = request.steps.len()))]
    pub async fn create(&self, subject: Id, request: CreateRecipeRequest) -> ServiceResult<RecipeResponse> {
        let recipe = NewRecipe::from(request);
        recipe.validate()?;
        self.ensure_category(recipe.category_id).await?;

        let aggregate = self.ctx.recipe_repo().create(&recipe).await?;

        info!(recipe_id = %aggregate.recipe.id, user_id = %subject, "Recipe created");
        Ok(RecipeResponse::from(&aggregate))
    }

    /// Full recipe with steps, comments, and counts
    #[instrument(skip(self))]
    pub async fn get(&self, id: Id) -> ServiceResult<RecipeResponse> {
        let aggregate = self
            .ctx
            .recipe_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Recipe", id))?;

        Ok(RecipeResponse::from(&aggregate))
    }

    /// Summaries ordered by id, optionally filtered by status
    #[instrument(skip(self))]
    pub async fn list(&self, status: Option<Status>) -> ServiceResult<Vec<RecipeSummaryResponse>> {
        let summaries = self.ctx.recipe_repo().list(status).await?;
        Ok(summaries.iter().map(RecipeSummaryResponse::from).collect())
    }

    /// Update header fields and upsert the given steps
    #[instrument(skip(self, request), fields(recipe_id = %request.id))]
    pub async fn update(&self, subject: Id, request: UpdateRecipeRequest) -> ServiceResult<RecipeResponse> {
        if request.status.is_some() {
            self.guard().require_admin(subject).await?;
        }

        let id = request.id;
        let changes = RecipeChanges::from(request);
        changes.validate()?;
        self.ensure_category(changes.category_id).await?;

        let aggregate = self.ctx.recipe_repo().update(id, &changes).await?;

        info!(recipe_id = %id, user_id = %subject, "Recipe updated");
        Ok(RecipeResponse::from(&aggregate))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, subject: Id, id: Id) -> ServiceResult<()> {
        self.guard().require_admin(subject).await?;

        if !self.ctx.recipe_repo().remove_by_id(id).await? {
            return Err(ServiceError::not_found("Recipe", id));
        }

        info!(recipe_id = %id, "Recipe deleted");
        Ok(())
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn batch_delete(&self, subject: Id, ids: &[Id]) -> ServiceResult<BatchDeleteOutcome> {
        self.guard().require_admin(subject).await?;

        let outcome = self.ctx.recipe_repo().remove_all_by_ids(ids).await?;

        info!(
            deleted = outcome.deleted.len(),
            not_found = outcome.not_found.len(),
            "Recipes batch deleted"
        );
        Ok(outcome)
    }

    /// Activate or deactivate a recipe; no other field changes
    #[instrument(skip(self))]
    pub async fn moderate(&self, subject: Id, id: Id, action: Moderation) -> ServiceResult<RecipeResponse> {
        self.guard().require_admin(subject).await?;

        let aggregate = self
            .ctx
            .recipe_repo()
            .set_status(id, action.target())
            .await?
            .ok_or_else(|| ServiceError::not_found("Recipe", id))?;

        info!(recipe_id = %id, %action, "Recipe moderated");
        Ok(RecipeResponse::from(&aggregate))
    }

    async fn ensure_category(&self, category_id: Option<Id>) -> ServiceResult<()> {
        let Some(category_id) = category_id else {
            return Ok(());
        };

        if self.ctx.category_repo().find_by_id(category_id).await?.is_none() {
            return Err(DomainError::InvalidReference(format!(
                "category {category_id} does not exist"
            ))
            .into());
        }
        Ok(())
    }
}
