//! Infrastructure layer - Database access, hashing, startup and logging

pub mod bootstrap;
pub mod database;
pub mod logging;
pub mod product;
pub mod user;
