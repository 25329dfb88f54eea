//! Acting-identity extraction.
//!
//! Session validation is delegated to the fronting identity-aware layer,
//! which injects the authenticated user's id into every proxied request.
//! This extractor only enforces *presence*: a missing or blank header is
//! rejected before any handler body runs, so no store access happens for
//! unauthenticated requests.

use crate::error::ApiError;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use quill_types::OwnerId;

/// Header the fronting layer uses to carry the authenticated identity.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated identity a request acts as.
#[derive(Debug, Clone)]
pub struct Identity(pub OwnerId);

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        let owner = OwnerId::new(raw).map_err(|_| ApiError::Unauthenticated)?;
        Ok(Self(owner))
    }
}
