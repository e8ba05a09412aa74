//! Application state for shared services

use std::sync::Arc;

use crate::domain::{
    DatabaseProbe, DomainError, NewProduct, Product, ProductRepository, User, UserProfile,
    UserRepository,
};
use crate::infrastructure::product::ProductService;
use crate::infrastructure::user::{CredentialService, PasswordHasher, RegisterRequest};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub credential_service: Arc<dyn CredentialServiceTrait>,
    pub product_service: Arc<dyn ProductServiceTrait>,
    pub database: Arc<dyn DatabaseProbe>,
}

impl AppState {
    pub fn new(
        credential_service: Arc<dyn CredentialServiceTrait>,
        product_service: Arc<dyn ProductServiceTrait>,
        database: Arc<dyn DatabaseProbe>,
    ) -> Self {
        Self {
            credential_service,
            product_service,
            database,
        }
    }
}

/// Trait for credential service operations
#[async_trait::async_trait]
pub trait CredentialServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<User, DomainError>;
    async fn login(&self, email: &str, password: &str) -> Result<UserProfile, DomainError>;
}

/// Trait for product service operations
#[async_trait::async_trait]
pub trait ProductServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, DomainError>;
    async fn create(&self, product: NewProduct) -> Result<Product, DomainError>;
    async fn delete(&self, id: &str) -> Result<u64, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R, H> CredentialServiceTrait for CredentialService<R, H>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn register(&self, request: RegisterRequest) -> Result<User, DomainError> {
        CredentialService::register(self, request).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<UserProfile, DomainError> {
        CredentialService::login(self, email, password).await
    }
}

#[async_trait::async_trait]
impl<R> ProductServiceTrait for ProductService<R>
where
    R: ProductRepository + 'static,
{
    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        ProductService::list(self).await
    }

    async fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        ProductService::create(self, product).await
    }

    async fn delete(&self, id: &str) -> Result<u64, DomainError> {
        ProductService::delete(self, id).await
    }
}
