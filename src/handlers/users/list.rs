// handlers/users/list.rs - GET /users handler

use axum::extract::State;

use crate::app::AppState;
use crate::database::models::User;
use crate::middleware::{ApiResponse, ApiResult};

pub async fn user_list(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    let users = state.users().find_all().await?;
    Ok(ApiResponse::success("users", users))
}
