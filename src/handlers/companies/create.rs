// handlers/companies/create.rs - POST /companies handler

use axum::extract::State;

use crate::app::AppState;
use crate::database::models::{Company, NewCompany};
use crate::handlers::extract::ValidatedJson;
use crate::middleware::{ApiResponse, ApiResult};

/// Admin only. 400 when the handle is already taken.
pub async fn company_create(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<NewCompany>,
) -> ApiResult<Company> {
    let company = state.companies().create(data).await?;
    Ok(ApiResponse::created("company", company))
}
