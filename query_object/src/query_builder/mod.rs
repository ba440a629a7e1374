//! Query builder utilities
//!
//! This module provides SQL query construction utilities.

pub mod builder;
pub mod compiled;
pub mod filter;
pub mod grouping;
pub mod ordering;
pub mod pagination;
pub mod sql_generation;


#[cfg(test)]
mod integration_tests;

pub use builder::QueryBuilder;
pub use compiled::CompiledQuery;
pub use filter::QueryOperator;
pub use grouping::GroupBy;
pub use ordering::SortOrder;
pub use pagination::Pagination;
