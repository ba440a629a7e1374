//! Query builder utilities
//!
//! This module provides SQL query construction utilities.

use crate::query_builder::grouping::GroupBy;
use crate::query_builder::pagination::Pagination;

/// Select statement used by `first` and `all`
pub const SELECT_ALL: &str = "SELECT *";
/// Select statement used by `count`
pub const SELECT_COUNT: &str = "SELECT COUNT(*)";

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build `<select> FROM <table>`
    pub fn build_from_clause(select_statement: &str, table_name: &str) -> String {
        format!("{} FROM {}", select_statement, table_name)
    }

    /// Build WHERE clause from accumulated fragments
    pub fn build_where_clause(wheres: &[String]) -> String {
        if wheres.is_empty() {
            return "".to_string();
        }

        format!("WHERE {}", wheres.join(" AND "))
    }

    /// Build GROUP BY clause
    pub fn build_group_by_clause(group_by: &GroupBy) -> String {
        group_by.to_sql()
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(order_by: &[String]) -> String {
        if order_by.is_empty() {
            return "".to_string();
        }

        format!("ORDER BY {}", order_by.join(", "))
    }

    /// Build LIMIT clause
    pub fn build_limit_clause(pagination: &Pagination) -> String {
        pagination.to_sql()
    }

    /// Assemble the full statement in fixed section order, skipping empty
    /// sections
    pub fn build_select(
        select_statement: &str,
        table_name: &str,
        wheres: &[String],
        group_by: &GroupBy,
        order_by: &[String],
        pagination: &Pagination,
    ) -> String {
        let sections = [
            Self::build_where_clause(wheres),
            Self::build_group_by_clause(group_by),
            Self::build_order_clause(order_by),
            Self::build_limit_clause(pagination),
        ];

        let mut sql = Self::build_from_clause(select_statement, table_name);
        for section in sections.iter().filter(|s| !s.is_empty()) {
            sql.push(' ');
            sql.push_str(section);
        }
        sql
    }
}
