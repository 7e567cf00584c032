//! Path parameter extractor

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use recipe_core::Id;

use crate::response::ApiError;

/// Single `:id` path segment parsed as a positive [`Id`]
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub Id);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        let id = Id::parse(&raw).map_err(|_| ApiError::invalid_path(format!("Invalid id '{raw}'")))?;

        Ok(IdPath(id))
    }
}
