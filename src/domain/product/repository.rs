//! Product repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{NewProduct, Product};
use crate::domain::DomainError;

/// Repository trait for product storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List every product ordered by id
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    /// Insert a product as given
    async fn create(&self, product: NewProduct) -> Result<Product, DomainError>;

    /// Delete by raw id, returning the number of rows removed.
    ///
    /// The id is passed through as received; an id that matches nothing
    /// removes zero rows and is not an error.
    async fn delete(&self, id: &str) -> Result<u64, DomainError>;
}
