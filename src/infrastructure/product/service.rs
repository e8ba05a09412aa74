//! Product service: pass-through CRUD over the repository

use std::sync::Arc;

use tracing::info;

use crate::domain::product::{NewProduct, Product, ProductRepository};
use crate::domain::DomainError;

#[derive(Debug)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.repository.list().await
    }

    pub async fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let product = self.repository.create(product).await?;
        info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// Delete by id. Returns the number of rows removed; zero is not an error.
    pub async fn delete(&self, id: &str) -> Result<u64, DomainError> {
        let removed = self.repository.delete(id).await?;
        info!(product_id = id, removed, "Product delete requested");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::MockProductRepository;
    use crate::infrastructure::product::repository::InMemoryProductRepository;

    #[tokio::test]
    async fn test_create_then_list() {
        let service = ProductService::new(Arc::new(InMemoryProductRepository::new()));

        let created = service
            .create(NewProduct {
                nombre: Some("Regla".to_string()),
                stock: Some(5),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(service.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let service = ProductService::new(Arc::new(InMemoryProductRepository::new()));
        assert_eq!(service.delete("999").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_propagates_storage_errors() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_list()
            .returning(|| Err(DomainError::storage("lost connection")));

        let service = ProductService::new(Arc::new(repository));

        assert!(matches!(
            service.list().await,
            Err(DomainError::Storage { .. })
        ));
    }
}
