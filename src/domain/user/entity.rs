//! User entity and related types

use serde::{Deserialize, Serialize};

/// Database-assigned user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user row as stored in the `users` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    /// Display name
    nombre: Option<String>,
    /// Unique login key
    email: Option<String>,
    /// bcrypt hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: Option<String>,
}

impl User {
    pub fn new(
        id: UserId,
        nombre: Option<String>,
        email: Option<String>,
        password_hash: Option<String>,
    ) -> Self {
        Self {
            id,
            nombre,
            email,
            password_hash,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn nombre(&self) -> Option<&str> {
        self.nombre.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }

    /// The fields that are safe to return to a client
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            nombre: self.nombre.clone(),
            email: self.email.clone(),
        }
    }
}

/// A user that has not been inserted yet
#[derive(Debug, Clone)]
pub struct NewUser {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(
        nombre: Option<String>,
        email: Option<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            nombre,
            email,
            password_hash: password_hash.into(),
        }
    }

    /// Attach the identifier assigned on insert
    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.nombre, self.email, Some(self.password_hash))
    }
}

/// Public view of a user returned after login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub nombre: Option<String>,
    pub email: Option<String>,
}
