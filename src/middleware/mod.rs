pub mod auth;
pub mod guards;
pub mod response;

pub use auth::{authenticate, authenticate_jwt, CurrentUser};
pub use guards::{
    ensure_admin, ensure_correct_user_or_admin, ensure_logged_in, require_admin,
    require_authenticated, require_self_or_admin,
};
pub use response::{ApiResponse, ApiResult};
