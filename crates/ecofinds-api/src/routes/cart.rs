//! Routes for the Cart context.

use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use ecofinds_cart::application::command_handlers::{
    handle_add_to_cart, handle_clear_cart, handle_remove_from_cart, handle_set_quantity,
};
use ecofinds_cart::application::query_handlers::{CartView, get_cart};
use ecofinds_cart::domain::commands::{AddToCart, ClearCart, RemoveFromCart, SetQuantity};
use ecofinds_checkout::domain::pricing::PricingBreakdown;
use ecofinds_core::product::ProductSnapshot;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for quantity updates. The quantity is accepted signed so a
/// client sending a decremented-below-zero value gets removal semantics
/// instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct SetQuantityRequest {
    /// Replacement quantity; zero or negative removes the line item.
    pub quantity: i64,
}

/// GET /api/v1/cart
async fn get_cart_view(State(state): State<AppState>) -> Result<Json<CartView>, ApiError> {
    let view = get_cart(state.store.as_ref()).await?;
    Ok(Json(view))
}

/// POST /api/v1/cart/items
async fn add_item(
    State(state): State<AppState>,
    Json(product): Json<ProductSnapshot>,
) -> Result<Json<CartView>, ApiError> {
    let command = AddToCart {
        correlation_id: Uuid::new_v4(),
        product,
    };
    let view = handle_add_to_cart(&command, state.clock.as_ref(), state.store.as_ref()).await?;
    Ok(Json(view))
}

/// PUT /api/v1/cart/items/{product_id}
async fn set_quantity(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(request): Json<SetQuantityRequest>,
) -> Result<Json<CartView>, ApiError> {
    let quantity = u32::try_from(request.quantity.max(0)).unwrap_or(u32::MAX);
    let command = SetQuantity {
        correlation_id: Uuid::new_v4(),
        product_id,
        quantity,
    };
    let view = handle_set_quantity(&command, state.store.as_ref()).await?;
    Ok(Json(view))
}

/// DELETE /api/v1/cart/items/{product_id}
async fn remove_item(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<CartView>, ApiError> {
    let command = RemoveFromCart {
        correlation_id: Uuid::new_v4(),
        product_id,
    };
    let view = handle_remove_from_cart(&command, state.store.as_ref()).await?;
    Ok(Json(view))
}

/// DELETE /api/v1/cart
async fn clear_cart(State(state): State<AppState>) -> Result<Json<CartView>, ApiError> {
    let command = ClearCart {
        correlation_id: Uuid::new_v4(),
    };
    let view = handle_clear_cart(&command, state.store.as_ref()).await?;
    Ok(Json(view))
}

/// GET /api/v1/cart/summary
async fn get_summary(State(state): State<AppState>) -> Result<Json<PricingBreakdown>, ApiError> {
    let view = get_cart(state.store.as_ref()).await?;
    let breakdown = PricingBreakdown::compute(view.subtotal, view.items.is_empty());
    Ok(Json(breakdown))
}

/// Returns the router for the cart context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_cart_view).delete(clear_cart))
        .route("/items", post(add_item))
        .route("/items/{product_id}", put(set_quantity).delete(remove_item))
        .route("/summary", get(get_summary))
}
