//! Named connection configurations
//!
//! A process-wide registry is filled once at configuration time and read
//! afterwards by whatever opens connections. Query building never touches it.

use config::{AppConfig, DatabaseConfig};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::errors::QueryHausError;

/// Map from connection name to its configuration
#[derive(Debug, Clone, Default)]
pub struct ConnectionRegistry {
    connections: HashMap<String, DatabaseConfig>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a configuration under `name`, replacing and returning any
    /// previous one
    pub fn add_config(
        &mut self,
        name: impl Into<String>,
        config: DatabaseConfig,
    ) -> Option<DatabaseConfig> {
        let name = name.into();
        debug_log!(
            "[REGISTRY] Registering connection '{}' ({}:{})",
            name,
            config.host,
            config.port
        );
        self.connections.insert(name, config)
    }

    /// Register every connection of an application config
    pub fn extend_from(&mut self, config: &AppConfig) {
        for (name, connection) in &config.connections {
            self.add_config(name.clone(), connection.clone());
        }
    }

    /// Get a copy of the configuration registered under `name`
    pub fn get(&self, name: &str) -> Result<DatabaseConfig, QueryHausError> {
        self.connections
            .get(name)
            .cloned()
            .ok_or_else(|| QueryHausError::ConnectionNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.connections.contains_key(name)
    }

    /// List all registered connection names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.connections.keys().cloned().collect();
        names.sort();
        names
    }

    /// Remove a connection by name
    pub fn remove(&mut self, name: &str) -> Result<DatabaseConfig, QueryHausError> {
        self.connections
            .remove(name)
            .ok_or_else(|| QueryHausError::ConnectionNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

fn global() -> &'static RwLock<ConnectionRegistry> {
    static REGISTRY: OnceLock<RwLock<ConnectionRegistry>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(ConnectionRegistry::new()))
}

/// Register a connection in the process-wide registry
pub fn add_config(name: impl Into<String>, config: DatabaseConfig) -> Option<DatabaseConfig> {
    global().write().add_config(name, config)
}

/// Register every connection of `config` in the process-wide registry
pub fn install(config: &AppConfig) {
    global().write().extend_from(config);
}

/// Look up a connection in the process-wide registry
pub fn connection_config(name: &str) -> Result<DatabaseConfig, QueryHausError> {
    global().read().get(name)
}

pub fn is_registered(name: &str) -> bool {
    global().read().contains(name)
}

pub fn registered_connections() -> Vec<String> {
    global().read().names()
}

pub fn remove_connection(name: &str) -> Result<DatabaseConfig, QueryHausError> {
    global().write().remove(name)
}
