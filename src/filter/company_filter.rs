use serde::Deserialize;

use super::error::FilterError;
use super::filter::ListFilter;
use super::filter_where::FilterWhere;
use super::types::FilterOp;

/// Query-string filters for `GET /companies`. Unrecognized keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFilter {
    pub name: Option<String>,
    pub min_employees: Option<i32>,
    pub max_employees: Option<i32>,
}

impl CompanyFilter {
    /// Range consistency is the caller's job; the builder does not check it.
    pub fn validate(&self) -> Result<(), FilterError> {
        match (self.min_employees, self.max_employees) {
            (Some(min), Some(max)) if min > max => Err(FilterError::InvalidRange {
                min: "minEmployees",
                max: "maxEmployees",
            }),
            _ => Ok(()),
        }
    }
}

impl ListFilter for CompanyFilter {
    const ORDER_BY: &'static str = "name";

    fn apply(&self, filter_where: &mut FilterWhere) {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            filter_where.contains("name", name);
        }
        if let Some(min) = self.min_employees {
            filter_where.compare("num_employees", FilterOp::Gte, min);
        }
        if let Some(max) = self.max_employees {
            filter_where.compare("num_employees", FilterOp::Lte, max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::query_builder::SqlValue;
    use crate::filter::build_filtered_query;

    const BASE: &str = "SELECT handle, name FROM companies";

    #[test]
    fn all_filters_compose_in_order() {
        let filters = CompanyFilter {
            name: Some("C".to_string()),
            min_employees: Some(1),
            max_employees: Some(3),
        };

        let result = build_filtered_query(BASE, &filters);

        assert_eq!(
            result.query,
            "SELECT handle, name FROM companies WHERE name ILIKE $1 AND num_employees >= $2 AND num_employees <= $3 ORDER BY name"
        );
        assert_eq!(
            result.params,
            vec![SqlValue::from("%C%"), SqlValue::Int(1), SqlValue::Int(3)]
        );
    }

    #[test]
    fn no_filters_means_no_where() {
        let result = build_filtered_query(BASE, &CompanyFilter::default());
        assert_eq!(result.query, "SELECT handle, name FROM companies ORDER BY name");
        assert!(result.params.is_empty());
    }

    #[test]
    fn empty_name_is_ignored() {
        let filters = CompanyFilter {
            name: Some(String::new()),
            max_employees: Some(2),
            ..Default::default()
        };

        let result = build_filtered_query(BASE, &filters);

        assert_eq!(
            result.query,
            "SELECT handle, name FROM companies WHERE num_employees <= $1 ORDER BY name"
        );
        assert_eq!(result.params, vec![SqlValue::Int(2)]);
    }

    #[test]
    fn min_above_max_is_invalid() {
        let filters = CompanyFilter {
            min_employees: Some(5),
            max_employees: Some(1),
            ..Default::default()
        };
        assert_eq!(
            filters.validate().unwrap_err().to_string(),
            "minEmployees cannot be greater than maxEmployees"
        );

        let equal = CompanyFilter {
            min_employees: Some(2),
            max_employees: Some(2),
            ..Default::default()
        };
        assert!(equal.validate().is_ok());
    }

    #[test]
    fn parses_camel_case_query_keys() {
        let filters: CompanyFilter =
            serde_json::from_value(serde_json::json!({ "minEmployees": 2, "nope": "x" })).unwrap();
        assert_eq!(filters.min_employees, Some(2));
        assert_eq!(filters.name, None);
    }
}
