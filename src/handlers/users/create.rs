// handlers/users/create.rs - POST /users handler

use axum::{extract::State, http::StatusCode};
use serde::Serialize;

use crate::app::AppState;
use crate::auth::create_token;
use crate::database::models::{NewUser, User};
use crate::handlers::extract::ValidatedJson;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub user: User,
    pub token: String,
}

/// Admin only. Unlike registration, the body may set `isAdmin`.
pub async fn user_create(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<NewUser>,
) -> ApiResult<CreatedUser> {
    let user = state.users().register(data).await?;
    let token = create_token(&user.username, user.is_admin, &state.security)?;

    Ok(ApiResponse::body(CreatedUser { user, token }, StatusCode::CREATED))
}
