//! Request/response types shared by the handlers

pub mod error;
pub mod json;
pub mod message;

pub use error::ApiError;
pub use json::Json;
pub use message::MessageResponse;
