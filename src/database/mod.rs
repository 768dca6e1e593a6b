pub mod manager;
pub mod models;
pub mod query_builder;

pub use manager::{DatabaseError, DatabaseManager};
pub use query_builder::{
    bind_value, sql_for_partial_update, update_statement, Column, Patch, QueryError, SqlFragment,
    SqlValue, UpdateStatement,
};
