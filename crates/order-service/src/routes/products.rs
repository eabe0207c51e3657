//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use vermilion_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List the full product catalog.
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.products().to_vec())
}

/// Look up a single product by id.
///
/// Returns 404 with `{"message": "Product not found"}` when the catalog has
/// no matching id.
pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Product>> {
    let id = ProductId::new(id);

    state
        .products()
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}
