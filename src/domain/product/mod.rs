//! Product domain
//!
//! Inventory entries served by the `/productos` endpoints.

mod entity;
mod repository;

pub use entity::{NewProduct, Product, ProductId};
pub use repository::ProductRepository;

#[cfg(test)]
pub use repository::MockProductRepository;
