use crate::database::query_builder::SqlValue;

use super::types::FilterOp;

/// Accumulates WHERE predicates and their parameters.
///
/// Every bound predicate takes the next placeholder; raw predicates
/// bind nothing and leave the counter alone.
#[derive(Debug, Default)]
pub struct FilterWhere {
    predicates: Vec<String>,
    param_values: Vec<SqlValue>,
}

impl FilterWhere {
    pub fn new() -> Self {
        Self::default()
    }

    /// `column <op> $n`
    pub fn compare(&mut self, column: &str, op: FilterOp, value: impl Into<SqlValue>) -> &mut Self {
        let placeholder = self.param(value.into());
        self.predicates.push(format!("{} {} {}", column, op.as_sql(), placeholder));
        self
    }

    /// Case-insensitive substring match, `column ILIKE '%needle%'`
    pub fn contains(&mut self, column: &str, needle: &str) -> &mut Self {
        self.compare(column, FilterOp::ILike, format!("%{}%", needle))
    }

    /// Predicate with no parameter, e.g. `equity > 0`
    pub fn raw(&mut self, predicate: &'static str) -> &mut Self {
        self.predicates.push(predicate.to_string());
        self
    }

    /// `AND`-joined predicates (without the keyword) and the bound values.
    /// Returns `None` for the clause when nothing was added.
    pub fn finish(self) -> (Option<String>, Vec<SqlValue>) {
        let clause = if self.predicates.is_empty() {
            None
        } else {
            Some(self.predicates.join(" AND "))
        };
        (clause, self.param_values)
    }

    fn param(&mut self, value: SqlValue) -> String {
        self.param_values.push(value);
        format!("${}", self.param_values.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_predicates_do_not_consume_placeholders() {
        let mut w = FilterWhere::new();
        w.contains("title", "eng").raw("equity > 0").compare("salary", FilterOp::Gte, 10);

        let (clause, params) = w.finish();
        assert_eq!(
            clause.as_deref(),
            Some("title ILIKE $1 AND equity > 0 AND salary >= $2")
        );
        assert_eq!(params, vec![SqlValue::from("%eng%"), SqlValue::Int(10)]);
    }

    #[test]
    fn empty_builder_has_no_clause() {
        assert_eq!(FilterWhere::new().finish(), (None, vec![]));
    }
}
