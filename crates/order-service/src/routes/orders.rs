//! Order route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;

use crate::state::AppState;

/// Create an order from an arbitrary JSON body.
///
/// The body is merged into the stored order without shape validation; the
/// service assigns `id`, `status` and `createdAt`. Always responds 201 with
/// the stored order.
pub async fn create(State(state): State<AppState>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let order = state.orders().create(body);

    tracing::info!(
        order_id = order["id"].as_i64().unwrap_or_default(),
        total = order["total"].as_i64().unwrap_or_default(),
        "Order accepted"
    );

    (StatusCode::CREATED, Json(order))
}
