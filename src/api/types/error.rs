//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use super::message::MessageResponse;
use crate::domain::DomainError;

/// Body of every failed login, whatever the cause
pub const LOGIN_FAILED_MESSAGE: &str = "Error";
/// Body of every 5xx; the detail only goes to the log
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: MessageResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: MessageResponse::new(message),
        }
    }

    /// Failed login
    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, LOGIN_FAILED_MESSAGE)
    }

    /// Unique-key conflict
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Internal server error
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Authentication => Self::unauthorized(),
            DomainError::Conflict { message } => {
                warn!(%message, "Request rejected by a unique constraint");
                Self::conflict(message)
            }
            DomainError::Connection { .. }
            | DomainError::Storage { .. }
            | DomainError::Internal { .. } => {
                error!(error = %err, "Request failed");
                Self::internal()
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.response.msg)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_maps_to_generic_401() {
        let api_err: ApiError = DomainError::authentication().into();

        assert_eq!(api_err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(api_err.response.msg, "Error");
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let api_err: ApiError = DomainError::conflict("Email 'a@b.c' is already registered").into();

        assert_eq!(api_err.status, StatusCode::CONFLICT);
        assert!(api_err.response.msg.contains("a@b.c"));
    }

    #[test]
    fn test_storage_detail_is_hidden() {
        let api_err: ApiError = DomainError::storage("Access denied for user 'root'").into();

        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.response.msg, INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_all_server_errors_are_500() {
        for err in [
            DomainError::connection("refused"),
            DomainError::storage("timeout"),
            DomainError::internal("join error"),
        ] {
            assert_eq!(ApiError::from(err).status, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_error_serialization() {
        let json = serde_json::to_string(&ApiError::unauthorized().response).unwrap();
        assert_eq!(json, r#"{"msg":"Error"}"#);
    }
}
