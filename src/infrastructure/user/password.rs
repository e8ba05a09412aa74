//! Password hashing utilities using bcrypt

use std::fmt::Debug;

use crate::domain::DomainError;

/// Work factor used for every stored hash
const HASH_COST: u32 = 10;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a password against a hash
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// bcrypt-based password hasher
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a hasher with the production work factor
    pub fn new() -> Self {
        Self { cost: HASH_COST }
    }

    /// Create a hasher with a custom work factor (4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        // Malformed hashes count as a mismatch
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> BcryptHasher {
        BcryptHasher::with_cost(4)
    }

    #[test]
    fn test_default_cost() {
        let hash = BcryptHasher::new().hash("admin123").unwrap();
        assert!(hash.starts_with("$2b$10$"));
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = fast_hasher();
        let password = "admin123";

        let hash = hasher.hash(password).unwrap();

        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_embeds_cost() {
        let hash = fast_hasher().hash("secret").unwrap();
        assert!(hash.starts_with("$2b$04$"));
    }

    #[test]
    fn test_hash_is_unique() {
        let hasher = fast_hasher();

        let hash1 = hasher.hash("secret").unwrap();
        let hash2 = hasher.hash("secret").unwrap();

        // Hashes should be different due to random salt
        assert_ne!(hash1, hash2);
        assert!(hasher.verify("secret", &hash1));
        assert!(hasher.verify("secret", &hash2));
    }

    #[test]
    fn test_verify_accepts_2a_prefix() {
        let hasher = fast_hasher();
        let hash = hasher.hash("secret").unwrap().replacen("$2b$", "$2a$", 1);

        assert!(hasher.verify("secret", &hash));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = fast_hasher();

        assert!(!hasher.verify("password", "invalid_hash_format"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn test_invalid_cost_fails() {
        let hasher = BcryptHasher::with_cost(2);
        assert!(hasher.hash("secret").is_err());
    }

    #[test]
    fn test_empty_password() {
        let hasher = fast_hasher();

        let hash = hasher.hash("").unwrap();
        assert!(hasher.verify("", &hash));
    }
}
