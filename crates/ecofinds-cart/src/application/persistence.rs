//! Cart document persistence.
//!
//! The cart is persisted whole under a single storage key. A failed or
//! malformed read falls back to an empty cart: the cart is a client-local
//! convenience cache, not a system of record, so losing it is preferable to
//! refusing every operation.

use ecofinds_core::error::DomainError;
use ecofinds_core::storage::{CART_KEY, DocumentStore};

use crate::domain::aggregates::Cart;

/// Loads the cart from durable storage, falling back to an empty cart when
/// the document is absent, unreadable, or malformed.
pub async fn load_cart(store: &dyn DocumentStore) -> Cart {
    let document = match store.get(CART_KEY).await {
        Ok(Some(document)) => document,
        Ok(None) => return Cart::new(),
        Err(e) => {
            tracing::warn!(error = %e, "cart read failed, starting from an empty cart");
            return Cart::new();
        }
    };

    match serde_json::from_value(document) {
        Ok(cart) => cart,
        Err(e) => {
            tracing::warn!(error = %e, "stored cart is malformed, starting from an empty cart");
            Cart::new()
        }
    }
}

/// Persists the full cart collection.
///
/// # Errors
///
/// Returns `DomainError::Storage` if serialization or the write fails. The
/// durable document is left unchanged on failure.
pub async fn save_cart(store: &dyn DocumentStore, cart: &Cart) -> Result<(), DomainError> {
    let document = serde_json::to_value(cart)
        .map_err(|e| DomainError::Storage(format!("cart serialization failed: {e}")))?;
    store.put(CART_KEY, document).await
}
