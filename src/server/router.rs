//! Router builder for the order routes

use crate::server::handlers::{
    AppState, create_order, delete_order, get_order, health, list_orders, update_order,
};
use axum::{Router, routing::get, routing::post};
use tower_http::trace::TraceLayer;

/// Build the order routes
///
/// - POST /orders - Create an order (201)
/// - GET /orders - List orders with pagination and filters (200)
/// - GET /orders/{id} - Fetch one order (200)
/// - PUT /orders/{id} - Partially update an order (200)
/// - DELETE /orders/{id} - Delete an order (204)
/// - GET /health - Liveness probe
pub fn build_order_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/orders", post(create_order).get(list_orders))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
