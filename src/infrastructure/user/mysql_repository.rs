//! MySQL user repository implementation

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::Row;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::database::map_write_error;

/// MySQL implementation of UserRepository over the `users` table
#[derive(Debug, Clone)]
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, nombre, email, password FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user by email: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let result = sqlx::query("INSERT INTO users(nombre, email, password) VALUES(?, ?, ?)")
            .bind(user.nombre.as_deref())
            .bind(user.email.as_deref())
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_write_error(e, "Failed to create user", || {
                    format!(
                        "Email '{}' is already registered",
                        user.email.as_deref().unwrap_or_default()
                    )
                })
            })?;

        let id = i32::try_from(result.last_insert_id())
            .map_err(|e| DomainError::storage(format!("Invalid user ID from database: {}", e)))?;

        Ok(user.into_user(UserId::new(id)))
    }
}

fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
    let read = |e: sqlx::Error| DomainError::storage(format!("Failed to read user row: {}", e));

    Ok(User::new(
        UserId::new(row.try_get("id").map_err(read)?),
        row.try_get("nombre").map_err(read)?,
        row.try_get("email").map_err(read)?,
        row.try_get("password").map_err(read)?,
    ))
}
