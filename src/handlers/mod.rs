// handlers/mod.rs - route layer
//
// One module per resource. Each exposes `routes()` with its guards attached
// per method; `app::app` merges them under the authentication middleware.

pub mod auth;
pub mod companies;
pub mod extract;
pub mod health;
pub mod jobs;
pub mod users;

pub use extract::{ApiPath, ApiQuery, ValidatedJson};
