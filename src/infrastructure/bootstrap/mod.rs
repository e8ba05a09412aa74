//! Startup schema bootstrap
//!
//! Creates the tables and seeds the administrative account before the
//! listener opens. Any error here is fatal to startup.
//!
//! The admin lookup and insert are two separate statements with no lock
//! between them. Two processes bootstrapping an empty database at the same
//! moment can both miss the row; the loser's insert then fails on the
//! unique email and its startup aborts.

use std::sync::Arc;

use tracing::info;

use crate::domain::user::{NewUser, UserRepository};
use crate::domain::{DomainError, SchemaManager};
use crate::infrastructure::user::PasswordHasher;

/// Reserved email of the seeded administrator
pub const ADMIN_EMAIL: &str = "admin@example.com";
/// Display name of the seeded administrator
pub const ADMIN_NAME: &str = "Admin";
/// Password the administrator is seeded with
pub const ADMIN_DEFAULT_PASSWORD: &str = "admin123";

/// Outcome of a bootstrap run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Whether this run inserted the admin row
    pub admin_created: bool,
}

/// Runs schema creation then the conditional admin seed
#[derive(Debug)]
pub struct Bootstrapper<S, R, H>
where
    S: SchemaManager,
    R: UserRepository,
    H: PasswordHasher,
{
    schema: Arc<S>,
    users: Arc<R>,
    hasher: Arc<H>,
}

impl<S, R, H> Bootstrapper<S, R, H>
where
    S: SchemaManager,
    R: UserRepository,
    H: PasswordHasher + 'static,
{
    pub fn new(schema: Arc<S>, users: Arc<R>, hasher: Arc<H>) -> Self {
        Self {
            schema,
            users,
            hasher,
        }
    }

    pub async fn run(&self) -> Result<BootstrapReport, DomainError> {
        self.schema.ensure_schema().await?;

        let admin_created = self.seed_admin().await?;

        info!("Database initialized");

        Ok(BootstrapReport { admin_created })
    }

    async fn seed_admin(&self) -> Result<bool, DomainError> {
        if self.users.get_by_email(ADMIN_EMAIL).await?.is_some() {
            return Ok(false);
        }

        let hasher = Arc::clone(&self.hasher);
        let password_hash =
            tokio::task::spawn_blocking(move || hasher.hash(ADMIN_DEFAULT_PASSWORD))
                .await
                .map_err(|e| {
                    DomainError::internal(format!("Password hashing task failed: {}", e))
                })??;

        let admin = self
            .users
            .create(NewUser::new(
                Some(ADMIN_NAME.to_string()),
                Some(ADMIN_EMAIL.to_string()),
                password_hash,
            ))
            .await?;

        info!(user_id = %admin.id(), email = ADMIN_EMAIL, "Admin user created");

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::MockSchemaManager;
    use crate::domain::user::MockUserRepository;
    use crate::infrastructure::database::InMemoryDatabase;
    use crate::infrastructure::user::{BcryptHasher, InMemoryUserRepository};

    type TestBootstrapper = Bootstrapper<InMemoryDatabase, InMemoryUserRepository, BcryptHasher>;

    fn create_bootstrapper() -> (
        TestBootstrapper,
        Arc<InMemoryDatabase>,
        Arc<InMemoryUserRepository>,
    ) {
        let database = Arc::new(InMemoryDatabase::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(BcryptHasher::with_cost(4));

        (
            Bootstrapper::new(database.clone(), users.clone(), hasher),
            database,
            users,
        )
    }

    #[tokio::test]
    async fn test_first_run_creates_tables_and_admin() {
        let (bootstrapper, database, users) = create_bootstrapper();

        let report = bootstrapper.run().await.unwrap();

        assert!(report.admin_created);
        assert_eq!(database.tables().await, vec!["productos", "users"]);

        let admin = users.get_by_email(ADMIN_EMAIL).await.unwrap().unwrap();
        assert_eq!(admin.nombre(), Some(ADMIN_NAME));

        let hasher = BcryptHasher::with_cost(4);
        assert!(hasher.verify(ADMIN_DEFAULT_PASSWORD, admin.password_hash().unwrap()));
    }

    #[tokio::test]
    async fn test_second_run_is_idempotent() {
        let (bootstrapper, database, users) = create_bootstrapper();

        bootstrapper.run().await.unwrap();
        let report = bootstrapper.run().await.unwrap();

        assert!(!report.admin_created);
        assert_eq!(database.schema_runs(), 2);
        assert_eq!(database.tables().await.len(), 2);
        assert_eq!(users.len().await, 1);
    }

    #[tokio::test]
    async fn test_existing_admin_is_left_alone() {
        let (bootstrapper, _database, users) = create_bootstrapper();
        users
            .create(NewUser::new(
                Some("Jefa".to_string()),
                Some(ADMIN_EMAIL.to_string()),
                "custom-hash",
            ))
            .await
            .unwrap();

        let report = bootstrapper.run().await.unwrap();

        assert!(!report.admin_created);
        let admin = users.get_by_email(ADMIN_EMAIL).await.unwrap().unwrap();
        assert_eq!(admin.nombre(), Some("Jefa"));
        assert_eq!(admin.password_hash(), Some("custom-hash"));
    }

    #[tokio::test]
    async fn test_schema_failure_aborts_before_seeding() {
        let mut schema = MockSchemaManager::new();
        schema
            .expect_ensure_schema()
            .returning(|| Err(DomainError::storage("access denied")));

        let mut users = MockUserRepository::new();
        users.expect_get_by_email().never();
        users.expect_create().never();

        let bootstrapper = Bootstrapper::new(
            Arc::new(schema),
            Arc::new(users),
            Arc::new(BcryptHasher::with_cost(4)),
        );

        assert!(matches!(
            bootstrapper.run().await,
            Err(DomainError::Storage { .. })
        ));
    }

    #[tokio::test]
    async fn test_lost_race_surfaces_conflict() {
        let mut schema = MockSchemaManager::new();
        schema.expect_ensure_schema().returning(|| Ok(()));

        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(|_| Ok(None));
        users.expect_create().returning(|_| {
            Err(DomainError::conflict(
                "Email 'admin@example.com' is already registered",
            ))
        });

        let bootstrapper = Bootstrapper::new(
            Arc::new(schema),
            Arc::new(users),
            Arc::new(BcryptHasher::with_cost(4)),
        );

        assert!(matches!(
            bootstrapper.run().await,
            Err(DomainError::Conflict { .. })
        ));
    }
}
