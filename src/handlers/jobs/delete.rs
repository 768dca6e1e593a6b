// handlers/jobs/delete.rs - DELETE /jobs/:id handler

use axum::extract::State;

use crate::app::AppState;
use crate::handlers::extract::ApiPath;
use crate::middleware::{ApiResponse, ApiResult};

pub async fn job_delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<i32> {
    state.jobs().remove(id).await?;
    Ok(ApiResponse::success("deleted", id))
}
