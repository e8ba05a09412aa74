//! Table definitions and the MySQL schema manager

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;

use crate::domain::{DomainError, SchemaManager};

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
      id INT AUTO_INCREMENT PRIMARY KEY,
      nombre VARCHAR(100),
      email VARCHAR(100) UNIQUE,
      password VARCHAR(255)
    )
"#;

const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS productos (
      id INT AUTO_INCREMENT PRIMARY KEY,
      nombre VARCHAR(100),
      codigo VARCHAR(50),
      categoria VARCHAR(50),
      precio DECIMAL(10,2),
      stock INT,
      descripcion TEXT
    )
"#;

/// Creates the `users` and `productos` tables if they are missing
#[derive(Debug, Clone)]
pub struct MySqlSchemaManager {
    pool: MySqlPool,
}

impl MySqlSchemaManager {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemaManager for MySqlSchemaManager {
    async fn ensure_schema(&self) -> Result<(), DomainError> {
        for (table, statement) in [
            ("users", CREATE_USERS_TABLE),
            ("productos", CREATE_PRODUCTS_TABLE),
        ] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to create table '{}': {}", table, e))
                })?;

            debug!(table, "Table ensured");
        }

        Ok(())
    }
}
