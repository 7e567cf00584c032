//! Authentication service
//!
//! Handles registration, login, and the current-user lookup.

use recipe_common::AppError;
use recipe_core::{normalize_email, Id, NewUser, User};
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new, inactive, non-admin user and issue a token
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let email = normalize_email(&request.email);

        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash = self.ctx.password_service().hash(&request.password)?;

        // A concurrent registration can still hit the unique index; the store
        // reports it as EmailAlreadyExists
        let user = self
            .ctx
            .user_repo()
            .create(&NewUser::registration(email, password_hash))
            .await?;

        info!(user_id = %user.id, "User registered successfully");

        self.issue(&user)
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password both fail with `InvalidCredentials`.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&normalize_email(&request.email))
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        self.ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
            .inspect_err(|_| warn!(user_id = %user.id, "Login failed: invalid password"))?;

        info!(user_id = %user.id, "User logged in successfully");

        self.issue(&user)
    }

    /// Load the authenticated user
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: Id) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        Ok(UserResponse::from(&user))
    }

    fn issue(&self, user: &User) -> ServiceResult<AuthResponse> {
        let jwt = self.ctx.jwt_service();
        let token = jwt.issue(user.id)?;

        Ok(AuthResponse::new(
            UserResponse::from(user),
            token,
            jwt.access_token_expiry(),
        ))
    }
}
