//! Pre-commit pricing breakdown.
//!
//! These derived values are shown to the user before checkout and recomputed
//! on every request; only the subtotal is ever persisted (as the purchase
//! record's `total_amount`).

use ecofinds_core::money::round_cents;
use rust_decimal::Decimal;
use serde::Serialize;

/// Flat shipping fee applied to any non-empty cart.
#[must_use]
pub fn shipping_fee() -> Decimal {
    Decimal::new(599, 2) // 5.99
}

/// Tax rate applied to the subtotal.
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::new(8, 2) // 8%
}

/// Presentation-only pricing breakdown for the current cart.
#[derive(Debug, Clone, Serialize)]
pub struct PricingBreakdown {
    /// Cart subtotal.
    pub subtotal: Decimal,
    /// Flat shipping fee, zero for an empty cart.
    pub shipping: Decimal,
    /// Tax on the subtotal, rounded to cents.
    pub tax: Decimal,
    /// `subtotal + shipping + tax`.
    pub total: Decimal,
}

impl PricingBreakdown {
    /// Computes the breakdown for a cart subtotal.
    #[must_use]
    pub fn compute(subtotal: Decimal, cart_is_empty: bool) -> Self {
        let shipping = if cart_is_empty {
            Decimal::ZERO
        } else {
            shipping_fee()
        };
        let tax = round_cents(subtotal * tax_rate());
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}
