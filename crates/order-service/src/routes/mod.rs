//! HTTP route handlers for the Order Service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health              - Health check
//!
//! # Products
//! GET  /api/products        - Full product catalog
//! GET  /api/products/{id}   - Single product, 404 if unknown
//!
//! # Orders
//! POST /api/orders          - Create an order (201 + stored order)
//! ```

pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/", post(orders::create))
}

/// Create all routes for the Order Service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/orders", order_routes())
}
