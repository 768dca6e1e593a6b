pub mod company;
pub mod job;
pub mod user;

pub use company::{Company, CompanyDetail, CompanyField, CompanyUpdate, NewCompany, COMPANY_COLUMNS};
pub use job::{Job, JobField, JobUpdate, NewJob, JOB_COLUMNS};
pub use user::{
    LoginRequest, NewUser, RegisterUser, User, UserDetail, UserField, UserUpdate, USER_COLUMNS,
};
