//! Authentication API endpoints
//!
//! Account registration and credential check. Login answers with the
//! public profile only; there is no session or token.

use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, MessageResponse};
use crate::domain::scalar::optional_text;
use crate::domain::{DomainError, UserProfile};
use crate::infrastructure::user::RegisterRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    #[serde(default, deserialize_with = "optional_text")]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    pub password: String,
}

/// Login request
///
/// Missing or null fields are a failed login, not a malformed body.
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub usuario: UserProfile,
}

/// Register a new account
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .credential_service
        .register(RegisterRequest {
            nombre: body.nombre,
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok(Json(MessageResponse::new("Registrado")))
}

/// Check credentials
///
/// POST /auth/login
///
/// A missing email or password, an unknown email and a wrong password all
/// answer 401 `{"msg":"Error"}`.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(email), Some(password)) = (body.email, body.password) else {
        return Err(DomainError::authentication().into());
    };

    let usuario = state.credential_service.login(&email, &password).await?;

    Ok(Json(LoginResponse { usuario }))
}
