use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::auth::{verify_jwt, Principal};

/// The principal resolved for this request, if any.
///
/// Inserted by [`authenticate_jwt`] on every request. Handlers and guards
/// take it as an extractor; a request that never passed through the
/// middleware reads as anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentUser(pub Option<Principal>);

impl CurrentUser {
    pub fn principal(&self) -> Option<&Principal> {
        self.0.as_ref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<CurrentUser>().cloned().unwrap_or_default())
    }
}

/// Resolve the bearer token, if one is present and valid.
///
/// Never fails: a missing header, a malformed value, a bad signature
/// and an expired token all yield `None`.
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Option<Principal> {
    let token = extract_jwt_from_headers(headers)?;

    match verify_jwt(token, secret) {
        Ok(claims) => Some(Principal::from(claims)),
        Err(e) => {
            tracing::debug!("Ignoring bearer token: {}", e);
            None
        }
    }
}

/// Attach the request's [`CurrentUser`]. Does not reject anything.
pub async fn authenticate_jwt(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let current = CurrentUser(authenticate(request.headers(), &state.security.jwt_secret));
    request.extensions_mut().insert(current);

    next.run(request).await
}

/// Extract the token from `Authorization: Bearer <token>`.
fn extract_jwt_from_headers(headers: &HeaderMap) -> Option<&str> {
    let auth_str = headers.get(AUTHORIZATION)?.to_str().ok()?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .or_else(|| auth_str.strip_prefix("bearer "))?
        .trim();

    (!token.is_empty()).then_some(token)
}
