use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth;
use crate::config;
use crate::error::ApiError;

/// Authenticated identity resolved by the guard, handed to handlers as an
/// explicit extractor parameter.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: i32,
}

/// Guard wrapping every blog route.
///
/// The whole `authorization` header value is verified as-is; clients send
/// the bare token with no `Bearer ` prefix. An absent header verifies as the
/// empty string and is rejected like any other bad token, before the handler
/// runs.
pub async fn require_auth(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let raw = request
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let claims = auth::verify_token(raw, &config::config().jwt_secret).map_err(|err| {
        tracing::warn!("rejected unauthenticated request: {}", err);
        ApiError::NotLoggedIn
    })?;

    request.extensions_mut().insert(AuthUser { id: claims.id });
    Ok(next.run(request).await)
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(ApiError::NotLoggedIn)
    }
}
