use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/order", post(handlers::submit_order))
        .route("/order/{order_id}", get(handlers::get_order))
        .route("/orderBook", get(handlers::get_order_book))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
