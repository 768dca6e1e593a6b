use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::database::query_builder::{Column, Patch};

pub const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewJob {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(range(min = 0))]
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    #[validate(length(min = 1, max = 25))]
    pub company_handle: String,
}

/// `id` and `companyHandle` are not updatable and fail deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobUpdate {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(range(min = 0))]
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    Title,
    Salary,
    Equity,
}

impl Column for JobField {
    fn column(self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::Salary => "salary",
            JobField::Equity => "equity",
        }
    }
}

impl JobUpdate {
    pub fn into_patch(self) -> Patch<JobField> {
        let mut patch = Patch::new();
        patch
            .set_opt(JobField::Title, self.title)
            .set_opt(JobField::Salary, self.salary)
            .set_opt(JobField::Equity, self.equity);
        patch
    }
}

/// Equity is a fraction of the company: 0 through 1 inclusive.
pub fn equity_in_range(equity: Option<Decimal>) -> bool {
    equity.map_or(true, |e| e >= Decimal::ZERO && e <= Decimal::ONE)
}
