// handlers/users/mod.rs - /users routes
//
// Creating and listing users is admin-only. Per-user routes are open to the
// user themself or an admin.

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};

use crate::app::AppState;
use crate::middleware::{ensure_admin, ensure_correct_user_or_admin, ensure_logged_in};

pub mod apply;  // POST /users/:username/jobs/:id
pub mod create; // POST /users
pub mod delete; // DELETE /users/:username
pub mod list;   // GET /users
pub mod show;   // GET /users/:username
pub mod update; // PATCH /users/:username

pub use apply::user_apply;
pub use create::user_create;
pub use delete::user_delete;
pub use list::user_list;
pub use show::user_show;
pub use update::user_update;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            post(user_create)
                .get(user_list)
                .route_layer(from_fn(ensure_admin)),
        )
        .route(
            "/users/:username",
            get(user_show)
                .patch(user_update)
                .delete(user_delete)
                .route_layer(from_fn(ensure_correct_user_or_admin))
                .route_layer(from_fn(ensure_logged_in)),
        )
        .route(
            "/users/:username/jobs/:id",
            post(user_apply).route_layer(from_fn(ensure_correct_user_or_admin)),
        )
}
