// handlers/jobs/list.rs - GET /jobs handler

use axum::extract::State;

use crate::app::AppState;
use crate::database::models::Job;
use crate::filter::JobFilter;
use crate::handlers::extract::ApiQuery;
use crate::middleware::{ApiResponse, ApiResult};

/**
 * GET /jobs - list jobs ordered by title
 *
 * Optional query filters:
 * - `title`: case-insensitive substring
 * - `minSalary`: inclusive lower bound
 * - `hasEquity=true`: only jobs with non-zero equity
 */
pub async fn job_list(
    State(state): State<AppState>,
    ApiQuery(filters): ApiQuery<JobFilter>,
) -> ApiResult<Vec<Job>> {
    let jobs = state.jobs().find_all(&filters).await?;
    Ok(ApiResponse::success("jobs", jobs))
}
