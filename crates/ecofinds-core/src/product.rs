//! Product snapshot value type.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A denormalized snapshot of product attributes, captured at the moment a
/// product is added to the cart and never re-fetched afterwards. Only `id`
/// and `price` are required by the cart; the remaining fields are passed
/// through for display and may go stale relative to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Product identifier (foreign key; the cart does not own product data).
    pub id: String,
    /// Listing title.
    #[serde(default)]
    pub title: String,
    /// Unit price.
    pub price: Decimal,
    /// Image URLs, first entry is the representative image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Display name of the seller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    /// Listing category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Item condition (e.g. "like new").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Listing creation time on the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ProductSnapshot {
    /// Returns the representative image for the product, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
