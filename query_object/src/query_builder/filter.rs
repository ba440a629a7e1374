//! WHERE clause helpers
//!
//! Comparison operators and `?` placeholder bookkeeping.

use std::fmt;

/// The positional placeholder token understood by the executor
pub const PLACEHOLDER: char = '?';

/// Comparison operators for `QueryBuilder::where_`
///
/// `where_` accepts any `Display` value as its operator, so a raw token such
/// as `"<=>"` works too. The operator is rendered verbatim without validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOperator {
    Eq,      // =
    Ne,      // !=
    Gt,      // >
    Gte,     // >=
    Lt,      // <
    Lte,     // <=
    Like,    // LIKE
    NotLike, // NOT LIKE
}

impl QueryOperator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            QueryOperator::Eq => "=",
            QueryOperator::Ne => "!=",
            QueryOperator::Gt => ">",
            QueryOperator::Gte => ">=",
            QueryOperator::Lt => "<",
            QueryOperator::Lte => "<=",
            QueryOperator::Like => "LIKE",
            QueryOperator::NotLike => "NOT LIKE",
        }
    }
}

impl fmt::Display for QueryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_sql())
    }
}

/// Count the `?` placeholders in a SQL fragment
///
/// Every `?` counts, including ones inside string literals.
pub fn count_placeholders(sql: &str) -> usize {
    sql.chars().filter(|c| *c == PLACEHOLDER).count()
}

/// Render `count` placeholders separated by `", "`
pub fn placeholders(count: usize) -> String {
    vec![PLACEHOLDER.to_string(); count].join(", ")
}

/// Render `<field> <operator> ?`
pub fn comparison(field: &str, operator: impl fmt::Display) -> String {
    format!("{} {} {}", field, operator, PLACEHOLDER)
}

/// Render `<field> IN (?, ?, ...)`
pub fn in_list(field: &str, count: usize) -> String {
    format!("{} IN ({})", field, placeholders(count))
}
