// handlers/jobs/update.rs - PATCH /jobs/:id handler

use axum::extract::State;

use crate::app::AppState;
use crate::database::models::{Job, JobUpdate};
use crate::handlers::extract::{ApiPath, ValidatedJson};
use crate::middleware::{ApiResponse, ApiResult};

/// Title, salary and equity only. A body naming `id` or `companyHandle` is a 400.
pub async fn job_update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(data): ValidatedJson<JobUpdate>,
) -> ApiResult<Job> {
    let job = state.jobs().update(id, data).await?;
    Ok(ApiResponse::success("job", job))
}
