//! Access guard
//!
//! Route-level authentication and authorization. Every protected operation
//! first resolves the caller with [`AccessGuard::authenticate`]; admin-only and
//! owner-only operations then apply [`AccessGuard::require_admin`] or
//! [`AccessGuard::require_ownership`]. Checks only read; nothing is written.

use recipe_common::AppError;
use recipe_core::{DomainError, Id, User};
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication and authorization checks
pub struct AccessGuard<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessGuard<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Verify a bearer token and return the subject user id
    ///
    /// # Errors
    /// `MissingAuth` when no token was sent, `InvalidToken` or `TokenExpired`
    /// when verification fails. All map to 401.
    #[instrument(skip_all)]
    pub fn authenticate(&self, bearer_token: Option<&str>) -> ServiceResult<Id> {
        let token = bearer_token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AppError::MissingAuth)?;

        let subject = self.ctx.jwt_service().verify(token).map_err(|e| {
            debug!(error = %e, "Bearer token rejected");
            e
        })?;

        Ok(subject)
    }

    /// Require the subject to be an administrator
    ///
    /// A subject whose user record no longer exists is forbidden as well.
    #[instrument(skip(self))]
    pub async fn require_admin(&self, subject: Id) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(subject)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %subject, "Admin check failed: unknown subject");
                ServiceError::forbidden("unknown subject")
            })?;

        if !user.is_admin() {
            warn!(user_id = %subject, "Admin check failed: not an administrator");
            return Err(DomainError::AdminRequired.into());
        }

        Ok(user)
    }

    /// Require the subject to own the resource
    #[instrument(skip(self))]
    pub fn require_ownership(&self, subject: Id, owner: Id) -> ServiceResult<()> {
        if subject != owner {
            warn!(user_id = %subject, owner_id = %owner, "Ownership check failed");
            return Err(DomainError::NotOwner.into());
        }
        Ok(())
    }

    /// Whether the subject is a known administrator
    pub async fn is_admin(&self, subject: Id) -> ServiceResult<bool> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(subject)
            .await?
            .is_some_and(|user| user.is_admin()))
    }

    /// Require ownership unless the subject is an administrator
    #[instrument(skip(self))]
    pub async fn require_owner_or_admin(&self, subject: Id, owner: Id) -> ServiceResult<()> {
        if subject == owner || self.is_admin(subject).await? {
            return Ok(());
        }
        warn!(user_id = %subject, owner_id = %owner, "Owner-or-admin check failed");
        Err(DomainError::NotOwner.into())
    }
}
