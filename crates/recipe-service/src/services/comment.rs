//! Comment service
//!
//! Comments are created inactive by any authenticated user. Authors and
//! administrators may edit or delete them; moderation and batch deletion
//! are admin only.

use recipe_core::traits::CommentFilter;
use recipe_core::{BatchDeleteOutcome, Comment, Id, Moderation, NewComment};
use tracing::{info, instrument};

use crate::dto::{CommentQuery, CommentResponse, CreateCommentRequest, UpdateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::guard::AccessGuard;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn guard(&self) -> AccessGuard<'a> {
        AccessGuard::new(self.ctx)
    }

    /// Add a comment authored by the caller
    #[instrument(skip(self, request), fields(recipe_id = %request.recipe_id))]
    pub async fn create(&self, subject: Id, request: CreateCommentRequest) -> ServiceResult<CommentResponse> {
        let comment = NewComment::new(request.text, subject, request.recipe_id);
        comment.validate()?;

        let created = self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %created.id, user_id = %subject, "Comment created");
        Ok(CommentResponse::from(&created))
    }

    /// Change the text; date and status stay as they are
    #[instrument(skip(self, request), fields(comment_id = %request.id))]
    pub async fn update(&self, subject: Id, request: UpdateCommentRequest) -> ServiceResult<CommentResponse> {
        Comment::validate_text(&request.text)?;

        let existing = self.load(request.id).await?;
        self.guard()
            .require_owner_or_admin(subject, existing.user_id)
            .await?;

        let updated = self
            .ctx
            .comment_repo()
            .update_text(request.id, &request.text)
            .await?;

        info!(comment_id = %updated.id, user_id = %subject, "Comment updated");
        Ok(CommentResponse::from(&updated))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Id) -> ServiceResult<CommentResponse> {
        Ok(CommentResponse::from(&self.load(id).await?))
    }

    /// List comments through the named filters only
    #[instrument(skip(self))]
    pub async fn list(&self, query: CommentQuery) -> ServiceResult<Vec<CommentResponse>> {
        let filter = match (query.recipe_id, query.status) {
            (Some(recipe_id), Some(status)) => Some(CommentFilter::RecipeAndStatus(recipe_id, status)),
            (Some(recipe_id), None) => Some(CommentFilter::Recipe(recipe_id)),
            (None, Some(status)) => Some(CommentFilter::Status(status)),
            (None, None) => None,
        };

        let comments = match filter {
            Some(filter) => self.ctx.comment_repo().find_by(filter).await?,
            None => self.ctx.comment_repo().list().await?,
        };

        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Comments written by one user
    #[instrument(skip(self))]
    pub async fn list_by_author(&self, author: Id) -> ServiceResult<Vec<CommentResponse>> {
        let comments = self
            .ctx
            .comment_repo()
            .find_by(CommentFilter::Author(author))
            .await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Delete a comment as its author or as an administrator
    ///
    /// The comment is loaded first; a missing comment is not found rather
    /// than forbidden.
    #[instrument(skip(self))]
    pub async fn delete(&self, subject: Id, id: Id) -> ServiceResult<()> {
        let existing = self.load(id).await?;
        self.guard()
            .require_owner_or_admin(subject, existing.user_id)
            .await?;

        if !self.ctx.comment_repo().remove_by_id(id).await? {
            return Err(ServiceError::not_found("Comment", id));
        }

        info!(comment_id = %id, user_id = %subject, "Comment deleted");
        Ok(())
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn batch_delete(&self, subject: Id, ids: &[Id]) -> ServiceResult<BatchDeleteOutcome> {
        self.guard().require_admin(subject).await?;

        let outcome = self.ctx.comment_repo().remove_all_by_ids(ids).await?;

        info!(
            deleted = outcome.deleted.len(),
            not_found = outcome.not_found.len(),
            "Comments batch deleted"
        );
        Ok(outcome)
    }

    #[instrument(skip(self))]
    pub async fn moderate(&self, subject: Id, id: Id, action: Moderation) -> ServiceResult<CommentResponse> {
        self.guard().require_admin(subject).await?;

        let comment = self
            .ctx
            .comment_repo()
            .set_status(id, action.target())
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", id))?;

        info!(comment_id = %id, %action, "Comment moderated");
        Ok(CommentResponse::from(&comment))
    }

    async fn load(&self, id: Id) -> ServiceResult<Comment> {
        self.ctx
            .comment_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", id))
    }
}
