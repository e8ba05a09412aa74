//! Product entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::scalar::{optional_integer, optional_text};

/// Database-assigned product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A row of the `productos` table.
///
/// Every column except the id is nullable, so every field is optional.
/// `precio` serializes as a decimal string (`"12.50"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub nombre: Option<String>,
    pub codigo: Option<String>,
    pub categoria: Option<String>,
    pub precio: Option<Decimal>,
    pub stock: Option<i32>,
    pub descripcion: Option<String>,
}

/// Product fields as received from a client.
///
/// Scalars are coerced to the column type the way MySQL would coerce them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(default, deserialize_with = "optional_text")]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub codigo: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub categoria: Option<String>,
    #[serde(default)]
    pub precio: Option<Decimal>,
    #[serde(default, deserialize_with = "optional_integer")]
    pub stock: Option<i32>,
    #[serde(default, deserialize_with = "optional_text")]
    pub descripcion: Option<String>,
}

impl NewProduct {
    /// Attach the identifier assigned on insert
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            nombre: self.nombre,
            codigo: self.codigo,
            categoria: self.categoria,
            precio: self.precio,
            stock: self.stock,
            descripcion: self.descripcion,
        }
    }
}
