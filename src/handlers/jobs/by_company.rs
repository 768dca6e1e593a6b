// handlers/jobs/by_company.rs - GET /jobs/companies/:handle handler

use axum::extract::{Path, State};

use crate::app::AppState;
use crate::database::models::Job;
use crate::middleware::{ApiResponse, ApiResult};

/// 404 when the company has no jobs, whether or not the company exists.
pub async fn job_list_by_company(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> ApiResult<Vec<Job>> {
    let jobs = state.jobs().for_company(&handle).await?;
    Ok(ApiResponse::success("jobs", jobs))
}
