//! In-memory user repository implementation

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Users {
    rows: BTreeMap<i32, User>,
    /// folded email -> id, only for non-null emails
    email_index: HashMap<String, i32>,
    last_id: i32,
}

/// In-memory implementation of UserRepository.
///
/// Mirrors the table: ids auto-increment from 1 and emails are unique
/// unless null. Emails compare case-insensitively, like the default MySQL
/// collation; accent folding is not modelled.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Users>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.rows.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;

        Ok(users
            .email_index
            .get(&fold_email(email))
            .and_then(|id| users.rows.get(id))
            .cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let key = user.email.as_deref().map(fold_email);

        if let Some(key) = &key {
            if users.email_index.contains_key(key) {
                return Err(DomainError::conflict(format!(
                    "Email '{}' is already registered",
                    user.email.as_deref().unwrap_or_default()
                )));
            }
        }

        users.last_id += 1;
        let id = users.last_id;

        if let Some(key) = key {
            users.email_index.insert(key, id);
        }

        let user = user.into_user(UserId::new(id));
        users.rows.insert(id, user.clone());

        Ok(user)
    }
}

fn fold_email(email: &str) -> String {
    email.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: Option<&str>) -> NewUser {
        NewUser::new(Some("Test".to_string()), email.map(String::from), "hash")
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(new_user(Some("a@example.com"))).await.unwrap();
        let second = repo.create(new_user(Some("b@example.com"))).await.unwrap();

        assert_eq!(first.id(), UserId::new(1));
        assert_eq!(second.id(), UserId::new(2));
    }

    #[tokio::test]
    async fn test_get_by_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user(Some("a@example.com"))).await.unwrap();

        let found = repo.get_by_email("a@example.com").await.unwrap();
        assert_eq!(found.unwrap().email(), Some("a@example.com"));

        assert!(repo.get_by_email("missing@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_email_uniqueness() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user(Some("a@example.com"))).await.unwrap();

        let result = repo.create(new_user(Some("a@example.com"))).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_email_comparison_ignores_case() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user(Some("Ana@Example.com"))).await.unwrap();

        let found = repo.get_by_email("ana@example.com").await.unwrap().unwrap();
        assert_eq!(found.email(), Some("Ana@Example.com"));

        let result = repo.create(new_user(Some("ANA@example.com"))).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_null_emails_do_not_conflict() {
        let repo = InMemoryUserRepository::new();

        repo.create(new_user(None)).await.unwrap();
        repo.create(new_user(None)).await.unwrap();

        assert_eq!(repo.len().await, 2);
    }
}
