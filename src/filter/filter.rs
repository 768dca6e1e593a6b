use super::filter_where::FilterWhere;
use super::types::SqlResult;

/// A per-entity set of optional list filters.
pub trait ListFilter {
    /// Natural key the listing is sorted by.
    const ORDER_BY: &'static str;

    /// Add one predicate per filter that is present.
    fn apply(&self, filter_where: &mut FilterWhere);
}

/// Append the filter's WHERE clause (if any) and its ORDER BY to `base_select`.
pub fn build_filtered_query<F: ListFilter>(base_select: &str, filters: &F) -> SqlResult {
    let mut filter_where = FilterWhere::new();
    filters.apply(&mut filter_where);

    let (clause, params) = filter_where.finish();

    let mut query = base_select.to_string();
    if let Some(clause) = clause {
        query.push_str(" WHERE ");
        query.push_str(&clause);
    }
    query.push_str(" ORDER BY ");
    query.push_str(F::ORDER_BY);

    SqlResult { query, params }
}
