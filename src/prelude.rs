//! Convenience re-exports for common QueryHaus usage
//!
//! This prelude module re-exports the most commonly used items from the QueryHaus ecosystem,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use queryhaus::prelude::*;
//!
//! let mut query = QueryBuilder::new("users")?;
//! let compiled = query.where_("id", QueryOperator::Eq, 42).first();
//! assert_eq!(compiled.sql, "SELECT * FROM users WHERE id = ? LIMIT 1");
//! # Ok::<(), QueryError>(())
//! ```

// Core QueryHaus components
pub use crate::core::{Connector, MySqlConnector, QueryHaus};
pub use crate::errors::QueryHausError;
pub use crate::registry::{self, ConnectionRegistry};

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Re-export commonly used query-object types for convenience
pub use query_object::prelude::*;

// Common external dependencies
pub use anyhow;
pub use async_trait::async_trait;
pub use sqlx;
pub use sqlx::MySqlPool;
pub use tokio;
