//! Inventory backend
//!
//! A small JSON API over MySQL with:
//! - Account registration and credential check (bcrypt hashes)
//! - Product listing, creation and deletion
//! - Schema creation and admin seeding at startup

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::DomainError;
use infrastructure::bootstrap::{BootstrapReport, Bootstrapper};
use infrastructure::database::{InMemoryDatabase, MySqlDatabase, MySqlSchemaManager};
use infrastructure::product::{InMemoryProductRepository, MySqlProductRepository, ProductService};
use infrastructure::user::{
    BcryptHasher, CredentialService, InMemoryUserRepository, MySqlUserRepository,
};
use sqlx::MySqlPool;

/// Create the application state with every service backed by the shared pool
pub fn create_app_state(pool: MySqlPool) -> AppState {
    let hasher = Arc::new(BcryptHasher::new());

    let credential_service = CredentialService::new(
        Arc::new(MySqlUserRepository::new(pool.clone())),
        hasher,
    );
    let product_service = ProductService::new(Arc::new(MySqlProductRepository::new(pool.clone())));

    AppState::new(
        Arc::new(credential_service),
        Arc::new(product_service),
        Arc::new(MySqlDatabase::new(pool)),
    )
}

/// Create the application state over in-memory storage
///
/// Nothing is persisted; useful for local experiments and tests.
pub fn create_in_memory_app_state(hasher: BcryptHasher) -> AppState {
    let credential_service =
        CredentialService::new(Arc::new(InMemoryUserRepository::new()), Arc::new(hasher));
    let product_service = ProductService::new(Arc::new(InMemoryProductRepository::new()));

    AppState::new(
        Arc::new(credential_service),
        Arc::new(product_service),
        Arc::new(InMemoryDatabase::new()),
    )
}

/// Create the tables and seed the administrator
pub async fn bootstrap_database(pool: &MySqlPool) -> Result<BootstrapReport, DomainError> {
    Bootstrapper::new(
        Arc::new(MySqlSchemaManager::new(pool.clone())),
        Arc::new(MySqlUserRepository::new(pool.clone())),
        Arc::new(BcryptHasher::new()),
    )
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn test_in_memory_app_state_serves_requests() {
        let app = api::create_router(create_in_memory_app_state(BcryptHasher::with_cost(4)));

        let response = app
            .oneshot(Request::builder().uri("/productos").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"[]");
    }
}
