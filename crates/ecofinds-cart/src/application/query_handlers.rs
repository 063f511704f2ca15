//! Query handlers for the Cart context.
//!
//! Read-only views over the persisted cart document. Aggregates are derived
//! on every read, never stored.

use chrono::{DateTime, Utc};
use ecofinds_core::error::DomainError;
use ecofinds_core::storage::DocumentStore;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::application::persistence::load_cart;
use crate::domain::aggregates::Cart;
use crate::domain::line_item::LineItem;

/// Read-only view of a single cart line.
#[derive(Debug, Clone, Serialize)]
pub struct LineItemView {
    /// Line-item identifier.
    pub id: Uuid,
    /// Referenced product identifier.
    pub product_id: String,
    /// Listing title at add time.
    pub title: String,
    /// Unit price at add time.
    pub unit_price: Decimal,
    /// Current quantity.
    pub quantity: u32,
    /// Extended price for the line.
    pub line_total: Decimal,
    /// Representative image, if the snapshot carried one.
    pub image: Option<String>,
    /// Seller display name, if known.
    pub seller: Option<String>,
    /// Insertion timestamp.
    pub added_at: DateTime<Utc>,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id.clone(),
            title: item.product.title.clone(),
            unit_price: item.product.price,
            quantity: item.quantity,
            line_total: item.line_total(),
            image: item.product.primary_image().map(str::to_owned),
            seller: item.product.seller.clone(),
            added_at: item.added_at,
        }
    }
}

/// Read-only view of the whole cart.
#[derive(Debug, Serialize)]
pub struct CartView {
    /// Line items in insertion order.
    pub items: Vec<LineItemView>,
    /// Sum of all quantities.
    pub item_count: u32,
    /// Sum of all line totals.
    pub subtotal: Decimal,
}

impl CartView {
    /// Builds a view from a cart aggregate.
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(LineItemView::from).collect(),
            item_count: cart.item_count(),
            subtotal: cart.subtotal(),
        }
    }
}

/// Retrieves the current cart.
///
/// # Errors
///
/// This query currently cannot fail (reads fall back to an empty cart), but
/// keeps a `Result` return so callers are insulated from future stricter
/// read policies.
pub async fn get_cart(store: &dyn DocumentStore) -> Result<CartView, DomainError> {
    let cart = load_cart(store).await;
    Ok(CartView::from_cart(&cart))
}
