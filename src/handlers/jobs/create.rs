// handlers/jobs/create.rs - POST /jobs handler

use axum::extract::State;

use crate::app::AppState;
use crate::database::models::{Job, NewJob};
use crate::handlers::extract::ValidatedJson;
use crate::middleware::{ApiResponse, ApiResult};

/// Admin only. The company must exist; the id is assigned on insert.
pub async fn job_create(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<NewJob>,
) -> ApiResult<Job> {
    let job = state.jobs().create(data).await?;
    Ok(ApiResponse::created("job", job))
}
