// handlers/companies/list.rs - GET /companies handler

use axum::extract::State;

use crate::app::AppState;
use crate::database::models::Company;
use crate::filter::CompanyFilter;
use crate::handlers::extract::ApiQuery;
use crate::middleware::{ApiResponse, ApiResult};

/**
 * GET /companies - list companies ordered by name
 *
 * Optional query filters:
 * - `name`: case-insensitive substring
 * - `minEmployees` / `maxEmployees`: inclusive bounds, min may not exceed max
 */
pub async fn company_list(
    State(state): State<AppState>,
    ApiQuery(filters): ApiQuery<CompanyFilter>,
) -> ApiResult<Vec<Company>> {
    let companies = state.companies().find_all(&filters).await?;
    Ok(ApiResponse::success("companies", companies))
}
