//! Convenience re-exports for common query-object usage

// Error types
pub use crate::errors::QueryError;

// Query building
pub use crate::query_builder::{
    CompiledQuery, GroupBy, Pagination, QueryBuilder, QueryOperator, SortOrder,
};

// Statements accepted by `QueryBuilder::to_sql`
pub use crate::query_builder::sql_generation::{SELECT_ALL, SELECT_COUNT};

// Binding values
pub use serde_json::{json, Value};
