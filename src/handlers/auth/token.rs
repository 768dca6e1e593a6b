// handlers/auth/token.rs - POST /auth/token handler

use axum::{extract::State, http::StatusCode};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::auth::create_token;
use crate::database::models::LoginRequest;
use crate::handlers::extract::ValidatedJson;
use crate::middleware::{ApiResponse, ApiResult};

/**
 * POST /auth/token - exchange `{ username, password }` for `{ token }`
 *
 * Unknown usernames and wrong passwords both answer 401
 * "Invalid username/password".
 */
pub async fn token_post(
    State(state): State<AppState>,
    ValidatedJson(login): ValidatedJson<LoginRequest>,
) -> ApiResult<Value> {
    let user = state
        .users()
        .authenticate(&login.username, &login.password)
        .await?;

    let token = create_token(&user.username, user.is_admin, &state.security)?;

    Ok(ApiResponse::body(json!({ "token": token }), StatusCode::OK))
}
