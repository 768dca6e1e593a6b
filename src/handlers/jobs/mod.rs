// handlers/jobs/mod.rs - /jobs routes
//
// Reads are public. Writes need a login, then admin rights; the outer
// layer runs first.

use axum::{
    middleware::from_fn,
    routing::{get, patch, post},
    Router,
};

use crate::app::AppState;
use crate::middleware::{ensure_admin, ensure_logged_in};

pub mod by_company; // GET /jobs/companies/:handle
pub mod create;     // POST /jobs
pub mod delete;     // DELETE /jobs/:id
pub mod list;       // GET /jobs
pub mod show;       // GET /jobs/:id
pub mod update;     // PATCH /jobs/:id

pub use by_company::job_list_by_company;
pub use create::job_create;
pub use delete::job_delete;
pub use list::job_list;
pub use show::job_show;
pub use update::job_update;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(job_list))
        .route(
            "/jobs",
            post(job_create)
                .route_layer(from_fn(ensure_admin))
                .route_layer(from_fn(ensure_logged_in)),
        )
        .route("/jobs/companies/:handle", get(job_list_by_company))
        .route("/jobs/:id", get(job_show))
        .route(
            "/jobs/:id",
            patch(job_update)
                .delete(job_delete)
                .route_layer(from_fn(ensure_admin))
                .route_layer(from_fn(ensure_logged_in)),
        )
}
