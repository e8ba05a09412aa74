//! Connection pool lifecycle

use std::time::Duration;

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::{DatabaseProbe, DomainError};

/// Build driver options from configuration, leaving unset fields at the
/// driver defaults
fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new().port(config.port);

    if let Some(host) = &config.host {
        options = options.host(host);
    }

    if let Some(user) = &config.user {
        options = options.username(user);
    }

    if let Some(password) = &config.password {
        options = options.password(password);
    }

    if let Some(name) = &config.name {
        options = options.database(name);
    }

    options
}

/// Open the process-wide pool. Fails if no connection can be established.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<MySqlPool, DomainError> {
    info!(
        host = config.host.as_deref().unwrap_or("localhost"),
        port = config.port,
        "Connecting to MySQL..."
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(connect_options(config))
        .await
        .map_err(|e| DomainError::connection(format!("Failed to connect to MySQL: {}", e)))?;

    info!("MySQL connection established");

    Ok(pool)
}

/// Readiness probe backed by the shared pool
#[derive(Debug, Clone)]
pub struct MySqlDatabase {
    pool: MySqlPool,
}

impl MySqlDatabase {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseProbe for MySqlDatabase {
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Database ping failed: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_options_from_config() {
        let config = DatabaseConfig {
            host: Some("db.internal".to_string()),
            user: Some("inventario".to_string()),
            password: Some("secreto".to_string()),
            name: Some("tienda".to_string()),
            port: 3307,
            ..Default::default()
        };

        let options = connect_options(&config);

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 3307);
        assert_eq!(options.get_username(), "inventario");
        assert_eq!(options.get_database(), Some("tienda"));
    }

    #[test]
    fn test_connect_options_keep_driver_defaults() {
        let options = connect_options(&DatabaseConfig::default());

        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 3306);
        assert_eq!(options.get_database(), None);
    }
}
