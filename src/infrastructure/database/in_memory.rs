//! In-memory stand-in for the database lifecycle

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{DatabaseProbe, DomainError, SchemaManager};

/// Tracks which tables exist and whether the store is reachable
#[derive(Debug)]
pub struct InMemoryDatabase {
    tables: RwLock<BTreeSet<String>>,
    schema_runs: AtomicUsize,
    available: AtomicBool,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(BTreeSet::new()),
            schema_runs: AtomicUsize::new(0),
            available: AtomicBool::new(true),
        }
    }

    /// Names of the tables created so far
    pub async fn tables(&self) -> Vec<String> {
        self.tables.read().await.iter().cloned().collect()
    }

    /// How many times `ensure_schema` ran
    pub fn schema_runs(&self) -> usize {
        self.schema_runs.load(Ordering::SeqCst)
    }

    /// Simulate the database going away
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DomainError::storage("In-memory database is unavailable"))
        }
    }
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchemaManager for InMemoryDatabase {
    async fn ensure_schema(&self) -> Result<(), DomainError> {
        self.check_available()?;
        self.schema_runs.fetch_add(1, Ordering::SeqCst);

        let mut tables = self.tables.write().await;
        tables.insert("users".to_string());
        tables.insert("productos".to_string());

        Ok(())
    }
}

#[async_trait]
impl DatabaseProbe for InMemoryDatabase {
    async fn ping(&self) -> Result<(), DomainError> {
        self.check_available()
    }
}
