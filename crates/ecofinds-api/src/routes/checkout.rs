//! Routes for the Checkout context.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use ecofinds_checkout::application::command_handlers::{CheckoutReceipt, handle_checkout};
use ecofinds_checkout::application::query_handlers::{PurchaseHistoryView, get_purchase_history};
use ecofinds_checkout::domain::commands::Checkout;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/checkout
async fn checkout(State(state): State<AppState>) -> Result<Json<CheckoutReceipt>, ApiError> {
    let command = Checkout {
        correlation_id: Uuid::new_v4(),
    };
    let receipt = handle_checkout(
        &command,
        state.clock.as_ref(),
        state.store.as_ref(),
        state.processor.as_ref(),
    )
    .await?;
    Ok(Json(receipt))
}

/// GET /api/v1/purchases
async fn purchases(State(state): State<AppState>) -> Result<Json<PurchaseHistoryView>, ApiError> {
    let view = get_purchase_history(state.store.as_ref()).await?;
    Ok(Json(view))
}

/// Returns the router for the checkout context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/checkout", post(checkout))
        .route("/purchases", get(purchases))
}
