// handlers/companies/delete.rs - DELETE /companies/:handle handler

use axum::extract::{Path, State};

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};

pub async fn company_delete(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> ApiResult<String> {
    state.companies().remove(&handle).await?;
    Ok(ApiResponse::success("deleted", handle))
}
