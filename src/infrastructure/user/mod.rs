//! User infrastructure module
//!
//! Password hashing with bcrypt, MySQL and in-memory repositories, and the
//! credential service behind registration and login.

mod mysql_repository;
mod password;
mod repository;
mod service;

pub use mysql_repository::MySqlUserRepository;
pub use password::{BcryptHasher, PasswordHasher};
pub use repository::InMemoryUserRepository;
pub use service::{CredentialService, RegisterRequest};
