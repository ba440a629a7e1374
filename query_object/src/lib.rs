//! Query Object - Core query building layer for QueryHaus
//!
//! This crate accumulates WHERE, GROUP BY, ORDER BY and LIMIT clauses and
//! renders them into a parameterized SQL string with `?` placeholders plus the
//! ordered list of bound values. It never opens connections or runs queries.

#[cfg(feature = "debug-logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod prelude;
pub mod query_builder;

pub use errors::QueryError;
pub use query_builder::{CompiledQuery, GroupBy, Pagination, QueryBuilder, QueryOperator, SortOrder};
