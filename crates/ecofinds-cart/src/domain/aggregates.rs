//! Aggregate root for the Cart context.

use ecofinds_core::clock::Clock;
use ecofinds_core::error::DomainError;
use ecofinds_core::product::ProductSnapshot;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::line_item::LineItem;

/// The aggregate root for a cart: an ordered sequence of line items where
/// insertion order is display order and at most one line item exists per
/// distinct product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstitutes a cart from a previously persisted sequence of items.
    #[must_use]
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Consumes the cart, yielding its line items.
    #[must_use]
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a product to the cart.
    ///
    /// If a line item for the same product already exists its quantity is
    /// incremented by one; otherwise a new line item is appended with
    /// quantity 1, a fresh id, and the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the product id is empty or the
    /// price is negative.
    pub fn add(&mut self, product: ProductSnapshot, clock: &dyn Clock) -> Result<(), DomainError> {
        if product.id.trim().is_empty() {
            return Err(DomainError::Validation("product id must not be empty".into()));
        }
        if product.price < Decimal::ZERO {
            return Err(DomainError::Validation(format!(
                "product {} has a negative price",
                product.id
            )));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            existing.quantity += 1;
            return Ok(());
        }

        self.items.push(LineItem {
            id: Uuid::new_v4(),
            product_id: product.id.clone(),
            product,
            quantity: 1,
            added_at: clock.now(),
        });
        Ok(())
    }

    /// Removes the line item for `product_id`. Removing an absent product is
    /// a no-op.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Replaces the quantity of the line item for `product_id`.
    ///
    /// A quantity of zero behaves exactly as `remove`. Setting the quantity
    /// of an absent product is a no-op.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `unit price × quantity` over all line items. Zero for an empty
    /// cart.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of all line-item quantities (not the count of distinct lines).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
