// handlers/auth/register.rs - POST /auth/register handler

use axum::{extract::State, http::StatusCode};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::auth::create_token;
use crate::database::models::{NewUser, RegisterUser};
use crate::handlers::extract::ValidatedJson;
use crate::middleware::{ApiResponse, ApiResult};

/// Self-service signup. The new account is never an admin; `isAdmin` in the body is rejected.
pub async fn register_post(
    State(state): State<AppState>,
    ValidatedJson(registration): ValidatedJson<RegisterUser>,
) -> ApiResult<Value> {
    let user = state.users().register(NewUser::from(registration)).await?;
    let token = create_token(&user.username, user.is_admin, &state.security)?;

    Ok(ApiResponse::body(json!({ "token": token }), StatusCode::CREATED))
}
