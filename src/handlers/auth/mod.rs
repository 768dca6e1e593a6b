// handlers/auth/mod.rs - token acquisition endpoints
//
// Both routes are public; they are how an anonymous client obtains a bearer token.

use axum::{routing::post, Router};

use crate::app::AppState;

pub mod register; // POST /auth/register - create a non-admin account
pub mod token;    // POST /auth/token - exchange credentials for a token

pub use register::register_post;
pub use token::token_post;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/token", post(token_post))
        .route("/auth/register", post(register_post))
}
