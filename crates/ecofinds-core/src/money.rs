//! Currency arithmetic helpers.
//!
//! All money values in this system are `rust_decimal::Decimal`, never binary
//! floating point. Persisted documents serialize amounts as decimal strings.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to whole cents.
///
/// Derived amounts such as tax can carry more than two decimal places;
/// everything shown to a user or persisted is rounded with half-up semantics.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
