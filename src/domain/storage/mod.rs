//! Storage lifecycle traits
//!
//! Schema management for the startup bootstrap and a connectivity probe
//! for readiness checks.

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::DomainError;

/// Creates the tables the service needs
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SchemaManager: Send + Sync {
    /// Create every required table. Must be a no-op for tables that exist.
    async fn ensure_schema(&self) -> Result<(), DomainError>;
}

/// Cheap round-trip to the backing store
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn ping(&self) -> Result<(), DomainError>;
}
