// handlers/companies/show.rs - GET /companies/:handle handler

use axum::extract::{Path, State};

use crate::app::AppState;
use crate::database::models::CompanyDetail;
use crate::middleware::{ApiResponse, ApiResult};

/// The company plus its jobs.
pub async fn company_show(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> ApiResult<CompanyDetail> {
    let company = state.companies().get(&handle).await?;
    Ok(ApiResponse::success("company", company))
}
