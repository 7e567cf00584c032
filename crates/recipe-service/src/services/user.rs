//! User administration service
//!
//! Every operation except [`UserService::ensure_admin`] requires the caller
//! to be an administrator.

use recipe_core::{
    normalize_email, BatchDeleteOutcome, Id, Moderation, NewUser, Status, User, UserChanges,
};
use tracing::{info, instrument};

use crate::dto::{UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::guard::AccessGuard;

/// User administration service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn guard(&self) -> AccessGuard<'a> {
        AccessGuard::new(self.ctx)
    }

    /// List users, optionally filtered by status
    #[instrument(skip(self))]
    pub async fn list(&self, subject: Id, status: Option<Status>) -> ServiceResult<Vec<UserResponse>> {
        self.guard().require_admin(subject).await?;

        let users = self.ctx.user_repo().list(status).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, subject: Id, id: Id) -> ServiceResult<UserResponse> {
        self.guard().require_admin(subject).await?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;

        Ok(UserResponse::from(&user))
    }

    /// Update email, password, role, or status
    #[instrument(skip(self, request), fields(target_id = %request.id))]
    pub async fn update(&self, subject: Id, request: UpdateUserRequest) -> ServiceResult<UserResponse> {
        self.guard().require_admin(subject).await?;

        let password_hash = match request.password.as_deref() {
            Some(password) => Some(self.ctx.password_service().hash(password)?),
            None => None,
        };

        let changes = UserChanges {
            email: request.email.as_deref().map(normalize_email),
            password_hash,
            is_admin: request.is_admin,
            status: request.status,
        };

        if changes.is_empty() {
            return Err(ServiceError::validation("at least one field must be provided"));
        }

        let user = self.ctx.user_repo().update(request.id, &changes).await?;

        info!(user_id = %user.id, "User updated");

        Ok(UserResponse::from(&user))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, subject: Id, id: Id) -> ServiceResult<()> {
        self.guard().require_admin(subject).await?;

        if !self.ctx.user_repo().remove_by_id(id).await? {
            return Err(ServiceError::not_found("User", id));
        }

        info!(user_id = %id, "User deleted");
        Ok(())
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn batch_delete(&self, subject: Id, ids: &[Id]) -> ServiceResult<BatchDeleteOutcome> {
        self.guard().require_admin(subject).await?;

        let outcome = self.ctx.user_repo().remove_all_by_ids(ids).await?;

        info!(
            deleted = outcome.deleted.len(),
            not_found = outcome.not_found.len(),
            "Users batch deleted"
        );
        Ok(outcome)
    }

    /// Activate or deactivate a user
    #[instrument(skip(self))]
    pub async fn moderate(&self, subject: Id, id: Id, action: Moderation) -> ServiceResult<UserResponse> {
        self.guard().require_admin(subject).await?;

        let user = self
            .ctx
            .user_repo()
            .set_status(id, action.target())
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;

        info!(user_id = %id, %action, "User moderated");
        Ok(UserResponse::from(&user))
    }

    /// Make sure the configured administrator exists, is an admin, and is active
    ///
    /// An existing account keeps its password and is only promoted.
    #[instrument(skip(self, password))]
    pub async fn ensure_admin(&self, email: &str, password: &str) -> ServiceResult<User> {
        let repo = self.ctx.user_repo();
        let email = normalize_email(email);

        if let Some(existing) = repo.find_by_email(&email).await? {
            if existing.is_admin() && existing.is_active() {
                return Ok(existing);
            }

            let changes = UserChanges {
                is_admin: Some(true),
                status: Some(Status::Active),
                ..Default::default()
            };
            let promoted = repo.update(existing.id, &changes).await?;
            info!(user_id = %promoted.id, "Bootstrap administrator promoted");
            return Ok(promoted);
        }

        let user = NewUser {
            email,
            password_hash: self.ctx.password_service().hash(password)?,
            is_admin: true,
            status: Status::Active,
        };
        let created = repo.create(&user).await?;

        info!(user_id = %created.id, "Bootstrap administrator created");
        Ok(created)
    }
}
