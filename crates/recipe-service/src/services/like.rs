//! Like service

use recipe_core::{Id, Like};
use tracing::{info, instrument};

use crate::dto::{CreateLikeRequest, LikeResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::guard::AccessGuard;

/// Like service; a like can only be removed by the user who created it
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like a recipe as the caller; a repeat like is a conflict
    #[instrument(skip(self, request), fields(recipe_id = %request.recipe_id))]
    pub async fn create(&self, subject: Id, request: CreateLikeRequest) -> ServiceResult<LikeResponse> {
        let like = self
            .ctx
            .like_repo()
            .create(subject, request.recipe_id)
            .await?;

        info!(like_id = %like.id, user_id = %subject, "Recipe liked");
        Ok(LikeResponse::from(&like))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Id) -> ServiceResult<LikeResponse> {
        Ok(LikeResponse::from(&self.load(id).await?))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, subject: Id, id: Id) -> ServiceResult<()> {
        let like = self.load(id).await?;
        AccessGuard::new(self.ctx).require_ownership(subject, like.user_id)?;

        if !self.ctx.like_repo().remove_by_id(id).await? {
            return Err(ServiceError::not_found("Like", id));
        }

        info!(like_id = %id, user_id = %subject, "Like removed");
        Ok(())
    }

    async fn load(&self, id: Id) -> ServiceResult<Like> {
        self.ctx
            .like_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Like", id))
    }
}
