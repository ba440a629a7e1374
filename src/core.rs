//! Core QueryHaus functionality
//!
//! This module contains the `QueryHaus` entry point and the `Connector` seam
//! that turns a registered connection configuration into a native handle.

use async_trait::async_trait;
use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use std::time::Duration;

use crate::errors::QueryHausError;
use crate::registry;
use config::{AppConfig, DatabaseConfig};
use query_object::QueryBuilder;

/// Opens a native database handle from a connection configuration
#[async_trait]
pub trait Connector: Send + Sync {
    type Handle: Send;

    async fn connect(&self, config: &DatabaseConfig) -> Result<Self::Handle, QueryHausError>;
}

/// Connector producing a persistent `sqlx` MySQL pool
///
/// The pool keeps `min_connections` open between uses; every failure is
/// returned as an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlConnector;

impl MySqlConnector {
    /// Build connect options without touching the network
    pub fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.username)
            .password(&config.password)
            .database(&config.database)
    }

    /// Build pool options from the configured sizing and timeouts
    pub fn pool_options(config: &DatabaseConfig) -> MySqlPoolOptions {
        let mut pool_options = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        pool_options
    }
}

#[async_trait]
impl Connector for MySqlConnector {
    type Handle = MySqlPool;

    async fn connect(&self, config: &DatabaseConfig) -> Result<MySqlPool, QueryHausError> {
        config.validate()?;

        debug_log!(
            "[CONNECTOR] Opening MySQL pool to {}:{}/{}",
            config.host,
            config.port,
            config.database
        );

        let pool = Self::pool_options(config)
            .connect_with(Self::connect_options(config))
            .await?;

        Ok(pool)
    }
}

/// Main QueryHaus entry point: installs named connections and hands out
/// query builders labelled with them
#[derive(Debug, Clone, Default)]
pub struct QueryHaus {
    default_connection: Option<String>,
}

impl QueryHaus {
    /// Create an entry point without a default connection
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `config`, register all of its connections process-wide and
    /// use its default connection for new builders
    pub fn from_config(config: &AppConfig) -> Result<Self, QueryHausError> {
        config.validate()?;
        registry::install(config);

        debug_log!(
            "[QUERYHAUS] Installed {} connections (default: {:?})",
            config.connections.len(),
            config.default_connection
        );

        Ok(Self {
            default_connection: config.default_connection.clone(),
        })
    }

    /// Load `queryhaus.toml` (see `AppConfig::load`) and install it
    pub fn load() -> Result<Self, QueryHausError> {
        let config = AppConfig::load()?;
        Self::from_config(&config)
    }

    pub fn default_connection(&self) -> Option<&str> {
        self.default_connection.as_deref()
    }

    /// Start a query on `table` using the default connection, if any
    pub fn table(&self, table: &str) -> Result<QueryBuilder, QueryHausError> {
        Ok(QueryBuilder::from_options(
            Some(table),
            self.default_connection.as_deref(),
        )?)
    }

    /// Start a query on `table` using a registered connection
    pub fn table_on(&self, table: &str, connection: &str) -> Result<QueryBuilder, QueryHausError> {
        if !registry::is_registered(connection) {
            return Err(QueryHausError::ConnectionNotFound(connection.to_string()));
        }
        Ok(QueryBuilder::with_connection(table, connection)?)
    }

    /// The connection a builder will run on: its own label, else the default
    pub fn resolve_connection(&self, builder: &QueryBuilder) -> Result<DatabaseConfig, QueryHausError> {
        let name = builder
            .connection()
            .or(self.default_connection.as_deref())
            .ok_or_else(|| {
                QueryHausError::ConnectionNotFound(format!(
                    "no connection for table '{}'",
                    builder.table_name()
                ))
            })?;

        registry::connection_config(name)
    }

    /// Open a handle for a registered connection with any connector
    pub async fn connect_with<C: Connector>(
        &self,
        connector: &C,
        connection: &str,
    ) -> Result<C::Handle, QueryHausError> {
        let config = registry::connection_config(connection)?;
        connector.connect(&config).await
    }

    /// Open a MySQL pool for a registered connection
    pub async fn connect(&self, connection: &str) -> Result<MySqlPool, QueryHausError> {
        self.connect_with(&MySqlConnector, connection).await
    }

    /// Open a MySQL pool for the connection a builder is labelled with
    pub async fn connect_for(&self, builder: &QueryBuilder) -> Result<MySqlPool, QueryHausError> {
        let config = self.resolve_connection(builder)?;
        MySqlConnector.connect(&config).await
    }
}
