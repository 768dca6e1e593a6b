// handlers/users/apply.rs - POST /users/:username/jobs/:id handler

use axum::extract::State;

use crate::app::AppState;
use crate::handlers::extract::ApiPath;
use crate::middleware::{ApiResponse, ApiResult};

/// Apply `username` to job `id`. Both must exist; applying twice is a 400.
pub async fn user_apply(
    State(state): State<AppState>,
    ApiPath((username, job_id)): ApiPath<(String, i32)>,
) -> ApiResult<i32> {
    state.users().get(&username).await?;
    state.jobs().get(job_id).await?;

    state.users().apply_to_job(&username, job_id).await?;
    Ok(ApiResponse::success("applied", job_id))
}
