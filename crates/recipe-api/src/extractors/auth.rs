//! Authentication extractor
//!
//! Reads the bearer token from the Authorization header and resolves it to a
//! user id through the access guard.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use recipe_common::AppError;
use recipe_core::Id;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// Subject of the verified token
    pub user_id: Id,
}

impl AuthUser {
    pub fn new(user_id: Id) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // An absent header is MissingAuth; a header that is not a bearer
        // credential is an invalid token
        let token = match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
        {
            Ok(TypedHeader(Authorization(bearer))) => Some(bearer.token().to_owned()),
            Err(rejection) if rejection.is_missing() => None,
            Err(_) => return Err(AppError::InvalidToken.into()),
        };

        let app_state = AppState::from_ref(state);
        let user_id = app_state.guard().authenticate(token.as_deref())?;

        Ok(AuthUser::new(user_id))
    }
}
