//! Query builder utilities
//!
//! This module provides SQL query construction utilities.

use crate::errors::QueryError;
use crate::query_builder::compiled::CompiledQuery;
use crate::query_builder::filter;
use crate::query_builder::grouping::GroupBy;
use crate::query_builder::pagination::Pagination;
use crate::query_builder::sql_generation::{SqlGenerator, SELECT_ALL, SELECT_COUNT};
use serde_json::Value;
use std::fmt;

/// Query builder accumulating clauses for a single SELECT against one table
///
/// Clauses are rendered with `?` placeholders; the bound values are kept in
/// placeholder order. Field names, operators, directions and raw fragments are
/// inserted verbatim: the builder performs no escaping, so never pass
/// untrusted input as anything but a bound value.
///
/// A builder is meant for one query. There is no way to remove clauses.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    pub(crate) table_name: String,
    pub(crate) connection: Option<String>,
    pub(crate) wheres: Vec<String>,
    pub(crate) bindings: Vec<Value>,
    pub(crate) order_by: Vec<String>,
    pub(crate) group_by: GroupBy,
    pub(crate) pagination: Pagination,
}

impl QueryBuilder {
    /// Create a builder for `table`
    pub fn new(table: impl AsRef<str>) -> Result<Self, QueryError> {
        Self::from_options(Some(table.as_ref()), None)
    }

    /// Create a builder for `table` labelled with a registered connection name
    pub fn with_connection(
        table: impl AsRef<str>,
        connection: impl AsRef<str>,
    ) -> Result<Self, QueryError> {
        Self::from_options(Some(table.as_ref()), Some(connection.as_ref()))
    }

    /// Create a builder from optional parts
    ///
    /// A missing or blank table is a configuration error. A missing or blank
    /// connection simply leaves the builder unlabelled.
    pub fn from_options(
        table: Option<&str>,
        connection: Option<&str>,
    ) -> Result<Self, QueryError> {
        let table_name = match table.map(str::trim) {
            Some(table) if !table.is_empty() => table.to_string(),
            _ => {
                return Err(QueryError::configuration(
                    "a table name is required to build a query",
                ))
            }
        };

        let connection = connection
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        debug_log!(
            "[QUERY_BUILDER] New builder for table '{}' (connection: {:?})",
            table_name,
            connection
        );

        Ok(Self {
            table_name,
            connection,
            wheres: Vec::new(),
            bindings: Vec::new(),
            order_by: Vec::new(),
            group_by: GroupBy::default(),
            pagination: Pagination::default(),
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn connection(&self) -> Option<&str> {
        self.connection.as_deref()
    }

    pub fn wheres(&self) -> &[String] {
        &self.wheres
    }

    pub fn bindings(&self) -> &[Value] {
        &self.bindings
    }

    pub fn order_clauses(&self) -> &[String] {
        &self.order_by
    }

    pub fn group_by_fields(&self) -> &[String] {
        &self.group_by.fields
    }

    /// The stored limit, including a stored `0`
    pub fn limit_value(&self) -> Option<i64> {
        self.pagination.limit
    }

    /// Add `<field> <operator> ?` and bind `value`
    ///
    /// The operator is not validated; passing user input here is an
    /// injection risk.
    pub fn where_(
        &mut self,
        field: &str,
        operator: impl fmt::Display,
        value: impl Into<Value>,
    ) -> &mut Self {
        let clause = filter::comparison(field, operator);
        trace_log!("[QUERY_BUILDER] WHERE {}", clause);
        self.wheres.push(clause);
        self.bindings.push(value.into());
        self
    }

    /// Add a raw WHERE fragment with its values
    ///
    /// The number of `?` in `sql` must equal the number of values, otherwise
    /// nothing is added and `QueryError::ArgumentMismatch` is returned.
    pub fn where_raw<I, V>(&mut self, sql: &str, values: I) -> Result<&mut Self, QueryError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let placeholders = filter::count_placeholders(sql);

        if placeholders != values.len() {
            debug_log!(
                "[QUERY_BUILDER] Rejected raw WHERE '{}': {} placeholders, {} values",
                sql,
                placeholders,
                values.len()
            );
            return Err(QueryError::ArgumentMismatch {
                placeholders,
                values: values.len(),
            });
        }

        trace_log!("[QUERY_BUILDER] WHERE (raw) {}", sql);
        self.wheres.push(sql.to_string());
        self.bindings.extend(values);
        Ok(self)
    }

    /// Add `<field> IN (?, ...)` with one placeholder per value
    ///
    /// An empty list renders `IN ()`, which most engines reject at execution
    /// time.
    pub fn where_in<I, V>(&mut self, field: &str, list: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = list.into_iter().map(Into::into).collect();
        let clause = filter::in_list(field, values.len());
        trace_log!("[QUERY_BUILDER] WHERE {}", clause);
        self.wheres.push(clause);
        self.bindings.extend(values);
        self
    }

    /// Add `<field> <direction>` to ORDER BY; the direction is not validated
    pub fn order_by(&mut self, field: &str, direction: impl fmt::Display) -> &mut Self {
        self.order_by.push(format!("{} {}", field, direction));
        self
    }

    /// Add a GROUP BY field; empty names are rejected
    pub fn group_by(&mut self, field: &str) -> Result<&mut Self, QueryError> {
        self.group_by.push(field)?;
        Ok(self)
    }

    /// Set the limit; `0` renders no LIMIT clause
    pub fn limit(&mut self, limit: i64) -> &mut Self {
        self.pagination.limit = Some(limit);
        self
    }

    /// Render `SELECT *` limited to one row
    pub fn first(&mut self) -> CompiledQuery {
        self.pagination.limit = Some(1);
        self.to_sql(SELECT_ALL)
    }

    /// Render `SELECT *` with the given limit, replacing any previous one
    pub fn all(&mut self, limit: Option<i64>) -> CompiledQuery {
        self.pagination.limit = limit;
        self.to_sql(SELECT_ALL)
    }

    /// Render `SELECT COUNT(*)` over the accumulated clauses
    pub fn count(&self) -> CompiledQuery {
        self.to_sql(SELECT_COUNT)
    }

    /// Render the statement without touching the builder state
    pub fn to_sql(&self, select_statement: &str) -> CompiledQuery {
        let sql = SqlGenerator::build_select(
            select_statement,
            &self.table_name,
            &self.wheres,
            &self.group_by,
            &self.order_by,
            &self.pagination,
        );

        debug_log!(
            "[QUERY_BUILDER] SQL: {} ({} bindings)",
            sql,
            self.bindings.len()
        );

        CompiledQuery::new(sql, self.bindings.clone())
    }
}
