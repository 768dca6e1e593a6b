// handlers/users/show.rs - GET /users/:username handler

use axum::extract::{Path, State};

use crate::app::AppState;
use crate::database::models::UserDetail;
use crate::middleware::{ApiResponse, ApiResult};

/// Includes `jobsApplications`, the titles of jobs applied to.
pub async fn user_show(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<UserDetail> {
    let user = state.users().get(&username).await?;
    Ok(ApiResponse::success("user", user))
}
