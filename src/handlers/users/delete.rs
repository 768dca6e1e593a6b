// handlers/users/delete.rs - DELETE /users/:username handler

use axum::extract::{Path, State};

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};

pub async fn user_delete(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<String> {
    state.users().remove(&username).await?;
    Ok(ApiResponse::success("deleted", username))
}
