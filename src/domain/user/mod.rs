//! User domain
//!
//! Account entities and the repository trait used by registration, login
//! and the startup seed step.

mod entity;
mod repository;

pub use entity::{NewUser, User, UserId, UserProfile};
pub use repository::UserRepository;

#[cfg(test)]
pub use repository::MockUserRepository;
