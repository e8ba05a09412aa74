//! Product endpoints

use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Router,
};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, MessageResponse};
use crate::domain::{NewProduct, Product};

/// Create the product router
pub fn create_products_router() -> Router<AppState> {
    Router::new()
        .route("/productos", get(list_products).post(create_product))
        .route("/productos/{id}", delete(delete_product))
}

/// GET /productos
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.product_service.list().await?;
    Ok(Json(products))
}

/// POST /productos
pub async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<NewProduct>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.product_service.create(product).await?;
    Ok(Json(MessageResponse::new("Producto creado")))
}

/// DELETE /productos/{id}
///
/// Always acknowledges, whether or not a row matched.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.product_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Eliminado")))
}
