//! Cart line items.

use chrono::{DateTime, Utc};
use ecofinds_core::product::ProductSnapshot;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One product-and-quantity entry within a cart.
///
/// The embedded product snapshot is captured when the item is added and never
/// revalidated against the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Line-item identifier, distinct from the product id.
    pub id: Uuid,
    /// Identifier of the referenced product.
    pub product_id: String,
    /// Denormalized product snapshot.
    pub product: ProductSnapshot,
    /// Positive quantity, minimum 1.
    pub quantity: u32,
    /// Insertion timestamp, immutable.
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Returns the extended price for this line (`unit price × quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}
