use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::database::models::job::Job;
use crate::database::query_builder::{Column, Patch};

/// Columns returned for every company read.
pub const COMPANY_COLUMNS: &str = "handle, name, description, num_employees, logo_url";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

/// A company together with its open jobs.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCompany {
    #[validate(length(min = 1, max = 25))]
    pub handle: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 0))]
    pub num_employees: Option<i32>,
    #[validate(url)]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyUpdate {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub num_employees: Option<i32>,
    #[validate(url)]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyField {
    Name,
    Description,
    NumEmployees,
    LogoUrl,
}

impl Column for CompanyField {
    fn column(self) -> &'static str {
        match self {
            CompanyField::Name => "name",
            CompanyField::Description => "description",
            CompanyField::NumEmployees => "num_employees",
            CompanyField::LogoUrl => "logo_url",
        }
    }
}

impl CompanyUpdate {
    pub fn into_patch(self) -> Patch<CompanyField> {
        let mut patch = Patch::new();
        patch
            .set_opt(CompanyField::Name, self.name)
            .set_opt(CompanyField::Description, self.description)
            .set_opt(CompanyField::NumEmployees, self.num_employees)
            .set_opt(CompanyField::LogoUrl, self.logo_url);
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::query_builder::{sql_for_partial_update, update_statement, SqlValue};

    #[test]
    fn num_employees_maps_to_snake_case_column() {
        let update = CompanyUpdate {
            num_employees: Some(5),
            ..Default::default()
        };

        let fragment = sql_for_partial_update(update.into_patch()).unwrap();

        assert_eq!(fragment.clause, r#""num_employees"=$1"#);
        assert_eq!(fragment.values, vec![SqlValue::Int(5)]);
        assert_eq!(fragment.next_placeholder(), "$2");
    }

    #[test]
    fn employee_count_update_targets_one_handle() {
        let update = CompanyUpdate {
            num_employees: Some(5),
            ..Default::default()
        };
        let fragment = sql_for_partial_update(update.into_patch()).unwrap();

        let stmt = update_statement("companies", "handle", fragment, "c1", COMPANY_COLUMNS);

        assert_eq!(
            stmt.sql,
            r#"UPDATE companies SET "num_employees"=$1 WHERE handle = $2 RETURNING handle, name, description, num_employees, logo_url"#
        );
        assert_eq!(stmt.values, vec![SqlValue::Int(5), SqlValue::from("c1")]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let parsed = serde_json::from_value::<CompanyUpdate>(serde_json::json!({ "handle": "new" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn negative_employee_count_fails_validation() {
        let update = CompanyUpdate {
            num_employees: Some(-1),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let company = Company {
            handle: "c1".into(),
            name: "C1".into(),
            description: "Desc1".into(),
            num_employees: Some(1),
            logo_url: None,
        };
        let value = serde_json::to_value(&company).unwrap();
        assert_eq!(value["numEmployees"], 1);
        assert!(value.get("logoUrl").is_some());
    }
}
