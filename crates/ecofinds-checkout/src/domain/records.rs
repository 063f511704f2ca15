//! Purchase records — immutable receipts of completed checkouts.

use chrono::NaiveDate;
use ecofinds_cart::domain::line_item::LineItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a purchase.
///
/// The checkout transition only ever produces `Confirmed`; the remaining
/// statuses are reserved for a real backend to set asynchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    /// Order accepted.
    Confirmed,
    /// Order handed to a carrier.
    Shipped,
    /// Order received by the buyer.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

/// One purchased-item entry within a purchase record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchasedItem {
    /// Identifier of the purchased product.
    pub product_id: String,
    /// Listing title at purchase time.
    pub title: String,
    /// Unit price at purchase time.
    pub unit_price: Decimal,
    /// Purchased quantity.
    pub quantity: u32,
    /// Representative image, if the snapshot carried one.
    pub image: Option<String>,
    /// Date of the transaction.
    pub purchase_date: NaiveDate,
}

/// An immutable, durably stored receipt of a completed checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Purchase identifier, generated at checkout time.
    pub id: Uuid,
    /// Purchased-item entries, one per cart line item, in cart order.
    pub products: Vec<PurchasedItem>,
    /// Cart subtotal at the moment of checkout. Shipping and tax are
    /// presentation-only and never persisted.
    pub total_amount: Decimal,
    /// Date of the transaction.
    pub purchase_date: NaiveDate,
    /// Lifecycle status, `Confirmed` at creation.
    pub status: PurchaseStatus,
}

impl PurchaseRecord {
    /// Builds a purchase record from a snapshot of cart line items.
    ///
    /// The caller passes the snapshot subtotal so the recorded amount cannot
    /// drift from what the user was shown, even if the cart were mutated
    /// while the order is processing.
    #[must_use]
    pub fn from_line_items(
        items: &[LineItem],
        subtotal: Decimal,
        purchase_date: NaiveDate,
    ) -> Self {
        let products = items
            .iter()
            .map(|item| PurchasedItem {
                product_id: item.product_id.clone(),
                title: item.product.title.clone(),
                unit_price: item.product.price,
                quantity: item.quantity,
                image: item.product.primary_image().map(str::to_owned),
                purchase_date,
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            products,
            total_amount: subtotal,
            purchase_date,
            status: PurchaseStatus::Confirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ecofinds_cart::domain::aggregates::Cart;
    use ecofinds_core::product::ProductSnapshot;
    use ecofinds_test_support::FixedClock;

    fn product(id: &str, price: Decimal) -> ProductSnapshot {
        ProductSnapshot {
            id: id.to_owned(),
            title: format!("Product {id}"),
            price,
            images: vec![format!("{id}.jpg")],
            seller: None,
            category: None,
            condition: None,
            created_at: None,
        }
    }

    #[test]
    fn test_from_line_items_carries_one_entry_per_line_item() {
        // Arrange
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap());
        let mut cart = Cart::new();
        cart.add(product("p1", Decimal::new(1000, 2)), &clock).unwrap();
        cart.add(product("p1", Decimal::new(1000, 2)), &clock).unwrap();
        cart.add(product("p2", Decimal::new(500, 2)), &clock).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        // Act
        let record = PurchaseRecord::from_line_items(cart.items(), cart.subtotal(), date);

        // Assert
        assert_eq!(record.products.len(), 2);
        assert_eq!(record.products[0].product_id, "p1");
        assert_eq!(record.products[0].quantity, 2);
        assert_eq!(record.products[0].image.as_deref(), Some("p1.jpg"));
        assert_eq!(record.products[1].product_id, "p2");
        assert_eq!(record.products[1].quantity, 1);
        assert_eq!(record.total_amount, Decimal::new(2500, 2));
        assert_eq!(record.purchase_date, date);
        assert_eq!(record.status, PurchaseStatus::Confirmed);
    }

    #[test]
    fn test_status_serializes_as_snake_case() {
        // Arrange & Act
        let json = serde_json::to_value(PurchaseStatus::Confirmed).unwrap();

        // Assert
        assert_eq!(json, serde_json::json!("confirmed"));
    }

    #[test]
    fn test_record_round_trips_through_json() {
        // Arrange
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let record = PurchaseRecord {
            id: Uuid::new_v4(),
            products: vec![PurchasedItem {
                product_id: "p1".to_owned(),
                title: "Product p1".to_owned(),
                unit_price: Decimal::new(1000, 2),
                quantity: 2,
                image: None,
                purchase_date: date,
            }],
            total_amount: Decimal::new(2000, 2),
            purchase_date: date,
            status: PurchaseStatus::Confirmed,
        };

        // Act
        let json = serde_json::to_value(&record).unwrap();
        let reloaded: PurchaseRecord = serde_json::from_value(json).unwrap();

        // Assert
        assert_eq!(reloaded.id, record.id);
        assert_eq!(reloaded.total_amount, record.total_amount);
        assert_eq!(reloaded.products.len(), 1);
        assert_eq!(reloaded.status, PurchaseStatus::Confirmed);
    }
}
