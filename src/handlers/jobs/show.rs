// handlers/jobs/show.rs - GET /jobs/:id handler

use axum::extract::State;

use crate::app::AppState;
use crate::database::models::Job;
use crate::handlers::extract::ApiPath;
use crate::middleware::{ApiResponse, ApiResult};

pub async fn job_show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Job> {
    let job = state.jobs().get(id).await?;
    Ok(ApiResponse::success("job", job))
}
