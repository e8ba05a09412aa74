//! MySQL product repository implementation

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::Row;

use crate::domain::product::{NewProduct, Product, ProductId, ProductRepository};
use crate::domain::DomainError;
use crate::infrastructure::database::map_write_error;

/// MySQL implementation of ProductRepository over the `productos` table
#[derive(Debug, Clone)]
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, nombre, codigo, categoria, precio, stock, descripcion
            FROM productos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list products: {}", e)))?;

        rows.iter().map(row_to_product).collect()
    }

    async fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO productos(nombre, codigo, categoria, precio, stock, descripcion)
            VALUES(?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(product.nombre.as_deref())
        .bind(product.codigo.as_deref())
        .bind(product.categoria.as_deref())
        .bind(product.precio)
        .bind(product.stock)
        .bind(product.descripcion.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, "Failed to create product", || {
                "Product violates a unique constraint".to_string()
            })
        })?;

        let id = i32::try_from(result.last_insert_id()).map_err(|e| {
            DomainError::storage(format!("Invalid product ID from database: {}", e))
        })?;

        Ok(product.into_product(ProductId::new(id)))
    }

    async fn delete(&self, id: &str) -> Result<u64, DomainError> {
        // Bound as text; MySQL coerces it against the INT column
        let result = sqlx::query("DELETE FROM productos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete product: {}", e)))?;

        Ok(result.rows_affected())
    }
}

fn row_to_product(row: &MySqlRow) -> Result<Product, DomainError> {
    let read = |e: sqlx::Error| DomainError::storage(format!("Failed to read product row: {}", e));

    Ok(Product {
        id: ProductId::new(row.try_get("id").map_err(read)?),
        nombre: row.try_get("nombre").map_err(read)?,
        codigo: row.try_get("codigo").map_err(read)?,
        categoria: row.try_get("categoria").map_err(read)?,
        precio: row.try_get("precio").map_err(read)?,
        stock: row.try_get("stock").map_err(read)?,
        descripcion: row.try_get("descripcion").map_err(read)?,
    })
}
