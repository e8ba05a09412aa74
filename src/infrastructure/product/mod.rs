//! Product infrastructure module

mod mysql_repository;
mod repository;
mod service;

pub use mysql_repository::MySqlProductRepository;
pub use repository::InMemoryProductRepository;
pub use service::ProductService;
