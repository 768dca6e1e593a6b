// handlers/users/update.rs - PATCH /users/:username handler

use axum::extract::{Path, State};

use crate::app::AppState;
use crate::database::models::{User, UserUpdate};
use crate::handlers::extract::ValidatedJson;
use crate::middleware::{ApiResponse, ApiResult};

pub async fn user_update(
    State(state): State<AppState>,
    Path(username): Path<String>,
    ValidatedJson(data): ValidatedJson<UserUpdate>,
) -> ApiResult<User> {
    let user = state.users().update(&username, data).await?;
    Ok(ApiResponse::success("user", user))
}
