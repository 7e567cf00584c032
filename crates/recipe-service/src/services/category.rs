//! Category service
//!
//! Reads are open to any authenticated caller; writes are admin only.

use recipe_core::{BatchDeleteOutcome, Category, CategoryDetail, CategoryTree, DomainError, Id, NewCategory};
use tracing::{info, instrument};

use crate::dto::{
    CategoryDetailResponse, CategoryResponse, CategoryTreeResponse, CreateCategoryRequest,
    UpdateCategoryRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::guard::AccessGuard;

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn guard(&self) -> AccessGuard<'a> {
        AccessGuard::new(self.ctx)
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, subject: Id, request: CreateCategoryRequest) -> ServiceResult<CategoryResponse> {
        self.guard().require_admin(subject).await?;

        let category = NewCategory::from(request);
        category.validate()?;
        if let Some(parent_id) = category.parent_id {
            self.ensure_parent(parent_id).await?;
        }

        let created = self.ctx.category_repo().create(&category).await?;

        info!(category_id = %created.id, "Category created");
        Ok(CategoryResponse::from(&created))
    }

    /// Rename or move a category
    ///
    /// Moving a category below itself or one of its descendants is rejected,
    /// as is a move that would push the subtree past the depth limit. Both
    /// checks run in the repository under the same lock as the write.
    #[instrument(skip(self, request), fields(category_id = %request.id))]
    pub async fn update(&self, subject: Id, request: UpdateCategoryRequest) -> ServiceResult<CategoryResponse> {
        self.guard().require_admin(subject).await?;

        let id = request.id;
        let category = NewCategory::from(request);
        category.validate()?;
        self.load(id).await?;

        if let Some(parent_id) = category.parent_id {
            self.ensure_parent(parent_id).await?;
        }

        let updated = self.ctx.category_repo().update(id, &category).await?;

        info!(category_id = %id, "Category updated");
        Ok(CategoryResponse::from(&updated))
    }

    /// Flat list of every category
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.category_repo().list().await?;
        Ok(categories.iter().map(CategoryResponse::from).collect())
    }

    /// Category with its direct children
    #[instrument(skip(self))]
    pub async fn get(&self, id: Id) -> ServiceResult<CategoryDetailResponse> {
        let category = self.load(id).await?;
        let children = self.ctx.category_repo().children(id).await?;

        Ok(CategoryDetailResponse::from(&CategoryDetail { category, children }))
    }

    /// Category with every descendant
    #[instrument(skip(self))]
    pub async fn tree(&self, id: Id) -> ServiceResult<CategoryTreeResponse> {
        let nodes = self.ctx.category_repo().subtree(id).await?;
        let tree = CategoryTree::build(id, nodes).ok_or_else(|| ServiceError::not_found("Category", id))?;

        Ok(CategoryTreeResponse::from(&tree))
    }

    /// Delete a category and its descendants; recipes in it lose their category
    #[instrument(skip(self))]
    pub async fn delete(&self, subject: Id, id: Id) -> ServiceResult<()> {
        self.guard().require_admin(subject).await?;

        if !self.ctx.category_repo().remove_by_id(id).await? {
            return Err(ServiceError::not_found("Category", id));
        }

        info!(category_id = %id, "Category deleted");
        Ok(())
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn batch_delete(&self, subject: Id, ids: &[Id]) -> ServiceResult<BatchDeleteOutcome> {
        self.guard().require_admin(subject).await?;

        let outcome = self.ctx.category_repo().remove_all_by_ids(ids).await?;

        info!(
            deleted = outcome.deleted.len(),
            not_found = outcome.not_found.len(),
            "Categories batch deleted"
        );
        Ok(outcome)
    }

    async fn load(&self, id: Id) -> ServiceResult<Category> {
        self.ctx
            .category_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", id))
    }

    async fn ensure_parent(&self, parent_id: Id) -> ServiceResult<()> {
        if self.ctx.category_repo().find_by_id(parent_id).await?.is_none() {
            return Err(DomainError::InvalidReference(format!(
                "parent category {parent_id} does not exist"
            ))
            .into());
        }
        Ok(())
    }
}
