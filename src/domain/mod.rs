//! Domain layer - Core entities and repository traits

pub mod error;
pub mod product;
pub mod scalar;
pub mod storage;
pub mod user;

pub use error::DomainError;
pub use product::{NewProduct, Product, ProductId, ProductRepository};
pub use storage::{DatabaseProbe, SchemaManager};
pub use user::{NewUser, User, UserId, UserProfile, UserRepository};
