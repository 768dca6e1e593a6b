use rust_decimal::Decimal;
use sqlx::{self, postgres::PgArguments, FromRow};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("No data")]
    NoData,
}

/// A bound query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Int(i32),
    Decimal(Decimal),
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Int(v)
    }
}

impl From<Decimal> for SqlValue {
    fn from(v: Decimal) -> Self {
        SqlValue::Decimal(v)
    }
}

/// An updatable field of one entity, resolved to its storage column.
///
/// Implemented by a closed enum per entity so that only enumerated
/// fields can ever reach a SET clause.
pub trait Column: Copy + PartialEq {
    fn column(self) -> &'static str;
}

/// Sparse set of field updates, kept in insertion order.
#[derive(Debug, Clone)]
pub struct Patch<C> {
    entries: Vec<(C, SqlValue)>,
}

impl<C: Column> Default for Patch<C> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<C: Column> Patch<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. Setting the same field twice keeps its original position.
    pub fn set(&mut self, field: C, value: impl Into<SqlValue>) -> &mut Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
        self
    }

    pub fn set_opt<V: Into<SqlValue>>(&mut self, field: C, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.set(field, value);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// SET clause plus its positional parameters (`$1..$n` in order).
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFragment {
    pub clause: String,
    pub values: Vec<SqlValue>,
}

impl SqlFragment {
    /// Placeholder for the first parameter the caller appends after the clause.
    pub fn next_placeholder(&self) -> String {
        format!("${}", self.values.len() + 1)
    }
}

/// Build the `"col"=$1, "col2"=$2` part of a partial UPDATE.
///
/// Fails with [`QueryError::NoData`] when the patch is empty. The caller
/// appends its own WHERE clause starting at [`SqlFragment::next_placeholder`].
pub fn sql_for_partial_update<C: Column>(patch: Patch<C>) -> Result<SqlFragment, QueryError> {
    if patch.is_empty() {
        return Err(QueryError::NoData);
    }

    let mut cols = Vec::with_capacity(patch.len());
    let mut values = Vec::with_capacity(patch.len());

    for (idx, (field, value)) in patch.entries.into_iter().enumerate() {
        cols.push(format!("\"{}\"=${}", field.column(), idx + 1));
        values.push(value);
    }

    Ok(SqlFragment {
        clause: cols.join(", "),
        values,
    })
}

/// A full `UPDATE` with its parameters in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

/// `UPDATE <table> SET <fragment> WHERE <key_column> = $<n+1> RETURNING <returning>`.
///
/// The key is bound after the SET values, so it takes the placeholder
/// right after the fragment's last one.
pub fn update_statement(
    table: &str,
    key_column: &str,
    fragment: SqlFragment,
    key: impl Into<SqlValue>,
    returning: &str,
) -> UpdateStatement {
    let sql = format!(
        "UPDATE {} SET {} WHERE {} = {} RETURNING {}",
        table,
        fragment.clause,
        key_column,
        fragment.next_placeholder(),
        returning
    );

    let mut values = fragment.values;
    values.push(key.into());

    UpdateStatement { sql, values }
}

/// Bind one parameter onto a typed query.
pub fn bind_value<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    v: &'q SqlValue,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, sqlx::postgres::PgRow>,
{
    match v {
        SqlValue::Text(s) => q.bind(s),
        SqlValue::Int(i) => q.bind(*i),
        SqlValue::Decimal(d) => q.bind(*d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum PersonField {
        FirstName,
        LastName,
        Age,
    }

    impl Column for PersonField {
        fn column(self) -> &'static str {
            match self {
                PersonField::FirstName => "first_name",
                PersonField::LastName => "last_name",
                PersonField::Age => "age",
            }
        }
    }

    #[test]
    fn builds_set_clause_in_insertion_order() {
        let mut patch = Patch::new();
        patch
            .set(PersonField::FirstName, "John")
            .set(PersonField::LastName, "Doe")
            .set(PersonField::Age, 25);

        let fragment = sql_for_partial_update(patch).unwrap();

        assert_eq!(fragment.clause, r#""first_name"=$1, "last_name"=$2, "age"=$3"#);
        assert_eq!(
            fragment.values,
            vec![SqlValue::from("John"), SqlValue::from("Doe"), SqlValue::Int(25)]
        );
        assert_eq!(fragment.next_placeholder(), "$4");
    }

    #[test]
    fn order_follows_patch_not_declaration() {
        let mut patch = Patch::new();
        patch.set(PersonField::Age, 1).set(PersonField::FirstName, "b");

        let fragment = sql_for_partial_update(patch).unwrap();

        assert_eq!(fragment.clause, r#""age"=$1, "first_name"=$2"#);
        assert_eq!(fragment.values, vec![SqlValue::Int(1), SqlValue::from("b")]);
    }

    #[test]
    fn update_statement_binds_key_last() {
        let mut patch = Patch::new();
        patch.set(PersonField::FirstName, "Jane").set(PersonField::Age, 30);
        let fragment = sql_for_partial_update(patch).unwrap();

        let stmt = update_statement("people", "id", fragment, 7, "id, first_name");

        assert_eq!(
            stmt.sql,
            r#"UPDATE people SET "first_name"=$1, "age"=$2 WHERE id = $3 RETURNING id, first_name"#
        );
        assert_eq!(
            stmt.values,
            vec![SqlValue::from("Jane"), SqlValue::Int(30), SqlValue::Int(7)]
        );
    }

    #[test]
    fn empty_patch_is_rejected() {
        let patch: Patch<PersonField> = Patch::new();
        assert_eq!(sql_for_partial_update(patch), Err(QueryError::NoData));
    }

    #[test]
    fn placeholder_count_matches_values() {
        let mut patch = Patch::new();
        patch.set(PersonField::LastName, "x");
        patch.set_opt(PersonField::Age, None::<i32>);
        patch.set_opt(PersonField::FirstName, Some("y"));

        let fragment = sql_for_partial_update(patch).unwrap();

        assert_eq!(fragment.clause.matches('$').count(), fragment.values.len());
        assert_eq!(fragment.values.len(), 2);
    }

    #[test]
    fn setting_a_field_twice_keeps_position() {
        let mut patch = Patch::new();
        patch
            .set(PersonField::FirstName, "a")
            .set(PersonField::Age, 3)
            .set(PersonField::FirstName, "c");

        let fragment = sql_for_partial_update(patch).unwrap();

        assert_eq!(fragment.clause, r#""first_name"=$1, "age"=$2"#);
        assert_eq!(fragment.values, vec![SqlValue::from("c"), SqlValue::Int(3)]);
    }
}
