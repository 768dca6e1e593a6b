pub mod company_service;
pub mod job_service;
pub mod user_service;

pub use company_service::CompanyService;
pub use job_service::JobService;
pub use user_service::UserService;

use crate::database::QueryError;
use crate::filter::FilterError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Duplicate(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("Database error: {0}")]
    Database(sqlx::Error),
    #[error("Password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            match db.code().as_deref() {
                Some(UNIQUE_VIOLATION) => return ServiceError::Duplicate(db.message().to_string()),
                Some(FOREIGN_KEY_VIOLATION | CHECK_VIOLATION) => {
                    return ServiceError::Validation(db.message().to_string())
                }
                _ => {}
            }
        }
        ServiceError::Database(err)
    }
}

impl From<QueryError> for ServiceError {
    fn from(err: QueryError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<FilterError> for ServiceError {
    fn from(err: FilterError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
