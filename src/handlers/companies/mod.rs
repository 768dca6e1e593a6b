// handlers/companies/mod.rs - /companies routes
//
// Reads are public. Every write is admin-only.

use axum::{
    middleware::from_fn,
    routing::{get, patch, post},
    Router,
};

use crate::app::AppState;
use crate::middleware::ensure_admin;

pub mod create; // POST /companies
pub mod delete; // DELETE /companies/:handle
pub mod list;   // GET /companies
pub mod show;   // GET /companies/:handle
pub mod update; // PATCH /companies/:handle

pub use create::company_create;
pub use delete::company_delete;
pub use list::company_list;
pub use show::company_show;
pub use update::company_update;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/companies", get(company_list))
        .route(
            "/companies",
            post(company_create).route_layer(from_fn(ensure_admin)),
        )
        .route("/companies/:handle", get(company_show))
        .route(
            "/companies/:handle",
            patch(company_update)
                .delete(company_delete)
                .route_layer(from_fn(ensure_admin)),
        )
}
