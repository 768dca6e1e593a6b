// handlers/companies/update.rs - PATCH /companies/:handle handler

use axum::extract::{Path, State};

use crate::app::AppState;
use crate::database::models::{Company, CompanyUpdate};
use crate::handlers::extract::ValidatedJson;
use crate::middleware::{ApiResponse, ApiResult};

/// Partial update of name, description, numEmployees, logoUrl. The handle is immutable.
pub async fn company_update(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    ValidatedJson(data): ValidatedJson<CompanyUpdate>,
) -> ApiResult<Company> {
    let company = state.companies().update(&handle, data).await?;
    Ok(ApiResponse::success("company", company))
}
