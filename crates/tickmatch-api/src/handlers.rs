use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use tickmatch_types::{BookSummary, OrderId, OrderSummary};

use crate::error::ApiError;
use crate::models::{SubmitOrderRequest, SubmitOrderResponse};
use crate::state::AppState;

/// `POST /order`: submit a limit order and run it through the book.
pub async fn submit_order(
    State(state): State<AppState>,
    payload: Result<Json<SubmitOrderRequest>, JsonRejection>,
) -> Result<Json<SubmitOrderResponse>, ApiError> {
    // Every malformed body is a plain 400, whatever axum's default would be.
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let order = request.validate()?;

    let order_id = state
        .engine
        .lock()
        .await
        .submit(order.side, order.size, order.price)?;

    tracing::info!(
        order = %order_id,
        side = %order.side,
        price = order.price,
        size = order.size,
        "Order accepted"
    );
    Ok(Json(SubmitOrderResponse { order_id }))
}

/// `GET /order/{order_id}`: order summary with its fills.
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderSummary>, ApiError> {
    // An id that cannot be parsed cannot exist either.
    let not_found = || ApiError::NotFound(format!("order {order_id}"));
    let id: OrderId = order_id.parse().map_err(|_| not_found())?;

    let engine = state.engine.lock().await;
    engine
        .find_order(&id)
        .map(|order| Json(order.summary()))
        .ok_or_else(not_found)
}

/// `GET /orderBook`: resting size per price, `{"BUY": {...}, "SELL": {...}}`.
pub async fn get_order_book(State(state): State<AppState>) -> Result<Json<BookSummary>, ApiError> {
    let summary = state.engine.lock().await.get_summary()?;
    Ok(Json(summary))
}
