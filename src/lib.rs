//! # QueryHaus
//!
//! A minimal MySQL query builder: accumulate WHERE, GROUP BY, ORDER BY and
//! LIMIT clauses and render them into SQL with `?` placeholders plus the
//! ordered values to bind. Named connection configurations live in a
//! process-wide registry and can be turned into `sqlx` pools.
//!
//! QueryHaus never executes the statements it builds.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use queryhaus::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     registry::add_config(
//!         "main",
//!         DatabaseConfig::new(
//!             "localhost".to_string(),
//!             "root".to_string(),
//!             "password".to_string(),
//!             "shop".to_string(),
//!         ),
//!     );
//!
//!     let haus = QueryHaus::new();
//!     let mut users = haus.table_on("users", "main")?;
//!     users
//!         .where_("active", QueryOperator::Eq, true)
//!         .where_in("role", ["admin", "editor"])
//!         .order_by("created_at", SortOrder::Desc);
//!
//!     let query = users.all(Some(25));
//!     println!("{} {:?}", query.sql, query.bindings);
//!
//!     let pool = haus.connect_for(&users).await?;
//!     // hand `query` and `pool` to your executor
//!     # drop(pool);
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;
pub mod registry;

// Re-export the main public types for convenience
pub use core::{Connector, MySqlConnector, QueryHaus};
pub use errors::QueryHausError;
pub use registry::ConnectionRegistry;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Re-export the query builder crate
pub use query_object;
pub use query_object::{CompiledQuery, QueryBuilder, QueryError};

// Re-export external dependencies used in public API
pub use async_trait;
pub use serde_json;
pub use sqlx;
