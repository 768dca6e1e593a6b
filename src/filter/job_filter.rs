use serde::Deserialize;

use super::filter::ListFilter;
use super::filter_where::FilterWhere;
use super::types::FilterOp;

/// Query-string filters for `GET /jobs`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    pub title: Option<String>,
    pub min_salary: Option<i32>,
    pub has_equity: Option<bool>,
    /// Set only through `for_company`; never read from the query string.
    #[serde(skip)]
    pub company_handle: Option<String>,
}

impl JobFilter {
    pub fn for_company(handle: impl Into<String>) -> Self {
        Self {
            company_handle: Some(handle.into()),
            ..Default::default()
        }
    }
}

impl ListFilter for JobFilter {
    const ORDER_BY: &'static str = "title";

    fn apply(&self, filter_where: &mut FilterWhere) {
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            filter_where.contains("title", title);
        }
        if let Some(min) = self.min_salary {
            filter_where.compare("salary", FilterOp::Gte, min);
        }
        if self.has_equity == Some(true) {
            filter_where.raw("equity > 0");
        }
        if let Some(handle) = self.company_handle.as_deref() {
            filter_where.compare("company_handle", FilterOp::Eq, handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::query_builder::SqlValue;
    use crate::filter::build_filtered_query;

    const BASE: &str = "SELECT id, title FROM jobs";

    #[test]
    fn has_equity_adds_predicate_without_placeholder() {
        let filters = JobFilter {
            has_equity: Some(true),
            ..Default::default()
        };

        let result = build_filtered_query(BASE, &filters);

        assert_eq!(result.query, "SELECT id, title FROM jobs WHERE equity > 0 ORDER BY title");
        assert!(result.params.is_empty());
    }

    #[test]
    fn placeholders_skip_over_equity() {
        let filters = JobFilter {
            title: Some("job".to_string()),
            has_equity: Some(true),
            min_salary: Some(120000),
            company_handle: None,
        };

        let result = build_filtered_query(BASE, &filters);

        assert_eq!(
            result.query,
            "SELECT id, title FROM jobs WHERE title ILIKE $1 AND salary >= $2 AND equity > 0 ORDER BY title"
        );
        assert_eq!(result.params, vec![SqlValue::from("%job%"), SqlValue::Int(120000)]);
    }

    #[test]
    fn has_equity_false_is_no_filter() {
        let filters = JobFilter {
            has_equity: Some(false),
            ..Default::default()
        };
        let result = build_filtered_query(BASE, &filters);
        assert_eq!(result.query, "SELECT id, title FROM jobs ORDER BY title");
    }

    #[test]
    fn company_filter_uses_equality() {
        let result = build_filtered_query(BASE, &JobFilter::for_company("c1"));
        assert_eq!(
            result.query,
            "SELECT id, title FROM jobs WHERE company_handle = $1 ORDER BY title"
        );
        assert_eq!(result.params, vec![SqlValue::from("c1")]);
    }

    #[test]
    fn company_handle_ignored_in_query() {
        let filters: JobFilter =
            serde_json::from_value(serde_json::json!({ "companyHandle": "c1", "title": "x" })).unwrap();

        assert_eq!(filters.company_handle, None);
        assert_eq!(filters.title.as_deref(), Some("x"));
    }
}
