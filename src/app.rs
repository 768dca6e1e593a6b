use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::SecurityConfig;
use crate::error::ApiError;
use crate::handlers;
use crate::middleware::authenticate_jwt;
use crate::services::{CompanyService, JobService, UserService};

/// Shared by every handler. Cloned per request, so everything here is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub security: Arc<SecurityConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, security: SecurityConfig) -> Self {
        Self {
            pool,
            security: Arc::new(security),
        }
    }

    pub fn companies(&self) -> CompanyService {
        CompanyService::new(self.pool.clone())
    }

    pub fn jobs(&self) -> JobService {
        JobService::new(self.pool.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.pool.clone(), self.security.bcrypt_cost)
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .merge(handlers::auth::routes())
        .merge(handlers::companies::routes())
        .merge(handlers::jobs::routes())
        .merge(handlers::users::routes())
        .fallback(not_found)
        // Runs before every route guard; never rejects on its own
        .layer(from_fn_with_state(state.clone(), authenticate_jwt))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}
