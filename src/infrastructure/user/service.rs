//! Credential service for registration and login

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{NewUser, User, UserProfile, UserRepository};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for registering a new account.
///
/// Fields are stored as received; nothing is validated.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

/// Credential service: hash-and-store on register, fetch-and-verify on login
#[derive(Debug)]
pub struct CredentialService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> CredentialService<R, H>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
{
    /// Create a new credential service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a user. A duplicate email surfaces as `DomainError::Conflict`.
    pub async fn register(&self, request: RegisterRequest) -> Result<User, DomainError> {
        let password_hash = self.hash_password(request.password).await?;

        let user = self
            .repository
            .create(NewUser::new(request.nombre, request.email, password_hash))
            .await?;

        info!(user_id = %user.id(), "User registered");

        Ok(user)
    }

    /// Verify credentials and return the public profile.
    ///
    /// An unknown email and a wrong password both yield
    /// `DomainError::Authentication`.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, DomainError> {
        let Some(user) = self.repository.get_by_email(email).await? else {
            debug!("Login rejected: unknown email");
            return Err(DomainError::authentication());
        };

        let Some(hash) = user.password_hash() else {
            debug!(user_id = %user.id(), "Login rejected: no stored hash");
            return Err(DomainError::authentication());
        };

        if !self.verify_password(password, hash).await? {
            debug!(user_id = %user.id(), "Login rejected: password mismatch");
            return Err(DomainError::authentication());
        }

        Ok(user.profile())
    }

    /// Hash on the blocking pool
    pub async fn hash_password(&self, password: String) -> Result<String, DomainError> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("Password verification task failed: {}", e)))
    }
}
