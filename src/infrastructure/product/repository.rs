//! In-memory product repository implementation

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::product::{NewProduct, Product, ProductId, ProductRepository};
use crate::domain::DomainError;

/// Scale of the `precio DECIMAL(10,2)` column
const PRICE_SCALE: u32 = 2;

#[derive(Debug, Default)]
struct Products {
    rows: BTreeMap<i32, Product>,
    last_id: i32,
}

/// In-memory implementation of ProductRepository.
///
/// Prices are rescaled to two decimal places the way the column stores them.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Products>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.rows.values().cloned().collect())
    }

    async fn create(&self, mut product: NewProduct) -> Result<Product, DomainError> {
        if let Some(precio) = product.precio.as_mut() {
            precio.rescale(PRICE_SCALE);
        }

        let mut products = self.products.write().await;
        products.last_id += 1;

        let id = products.last_id;
        let product = product.into_product(ProductId::new(id));
        products.rows.insert(id, product.clone());

        Ok(product)
    }

    async fn delete(&self, id: &str) -> Result<u64, DomainError> {
        let Ok(id) = id.trim().parse::<i32>() else {
            return Ok(0);
        };

        let mut products = self.products.write().await;
        Ok(products.rows.remove(&id).map_or(0, |_| 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn lapiz() -> NewProduct {
        NewProduct {
            nombre: Some("Lápiz".to_string()),
            codigo: Some("LP-01".to_string()),
            categoria: Some("Papelería".to_string()),
            precio: Some(Decimal::from_str("1.5").unwrap()),
            stock: Some(100),
            descripcion: Some("HB".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let repo = InMemoryProductRepository::new();

        let created = repo.create(lapiz()).await.unwrap();
        let listed = repo.list().await.unwrap();

        assert_eq!(created.id, ProductId::new(1));
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_price_is_stored_with_two_decimals() {
        let repo = InMemoryProductRepository::new();

        let created = repo.create(lapiz()).await.unwrap();

        assert_eq!(created.precio.unwrap().to_string(), "1.50");
    }

    #[tokio::test]
    async fn test_delete_existing_and_missing() {
        let repo = InMemoryProductRepository::new();
        repo.create(lapiz()).await.unwrap();

        assert_eq!(repo.delete("1").await.unwrap(), 1);
        assert_eq!(repo.delete("1").await.unwrap(), 0);
        assert_eq!(repo.delete("abc").await.unwrap(), 0);
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repo = InMemoryProductRepository::new();

        repo.create(lapiz()).await.unwrap();
        repo.delete("1").await.unwrap();
        let second = repo.create(lapiz()).await.unwrap();

        assert_eq!(second.id, ProductId::new(2));
    }
}
