pub mod company_filter;
pub mod error;
pub mod filter;
pub mod filter_where;
pub mod job_filter;
pub mod types;

pub use company_filter::CompanyFilter;
pub use error::FilterError;
pub use filter::{build_filtered_query, ListFilter};
pub use filter_where::FilterWhere;
pub use job_filter::JobFilter;
pub use types::*;
