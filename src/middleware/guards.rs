//! Route guards. Each one is a pure check over the request's principal,
//! wrapped in a middleware that answers 401 when the check fails.

use std::collections::HashMap;

use axum::{
    extract::{Path, Request},
    middleware::Next,
    response::Response,
};

use crate::auth::Principal;
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;

pub const LOGIN_REQUIRED: &str = "You must be logged in";
pub const ADMIN_REQUIRED: &str = "Admin privileges required";
pub const SELF_OR_ADMIN_REQUIRED: &str =
    "Access denied - only admins or the correct user can access this route";

pub fn require_authenticated(principal: Option<&Principal>) -> Result<&Principal, ApiError> {
    principal.ok_or_else(|| ApiError::unauthorized(LOGIN_REQUIRED))
}

pub fn require_admin(principal: Option<&Principal>) -> Result<&Principal, ApiError> {
    match principal {
        Some(p) if p.is_admin => Ok(p),
        _ => Err(ApiError::unauthorized(ADMIN_REQUIRED)),
    }
}

pub fn require_self_or_admin<'a>(
    principal: Option<&'a Principal>,
    target_username: &str,
) -> Result<&'a Principal, ApiError> {
    match principal {
        Some(p) if p.is_admin || p.username == target_username => Ok(p),
        _ => Err(ApiError::unauthorized(SELF_OR_ADMIN_REQUIRED)),
    }
}

pub async fn ensure_logged_in(
    current: CurrentUser,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    require_authenticated(current.principal()).inspect_err(|_| {
        tracing::debug!("Rejected anonymous {} {}", request.method(), request.uri().path());
    })?;
    Ok(next.run(request).await)
}

pub async fn ensure_admin(
    current: CurrentUser,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    require_admin(current.principal()).inspect_err(|_| {
        tracing::debug!("Rejected non-admin {} {}", request.method(), request.uri().path());
    })?;
    Ok(next.run(request).await)
}

/// Compares against the `:username` route parameter.
pub async fn ensure_correct_user_or_admin(
    current: CurrentUser,
    Path(params): Path<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let target = params.get("username").map(String::as_str).unwrap_or_default();

    require_self_or_admin(current.principal(), target).inspect_err(|_| {
        tracing::debug!("Rejected access to user {} on {}", target, request.uri().path());
    })?;
    Ok(next.run(request).await)
}
