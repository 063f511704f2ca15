//! Order-processing port.

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::DomainError;

/// Port for the order-placement step of a checkout.
///
/// A real deployment would submit the order to a payment or fulfillment
/// backend here; this core ships a simulated implementation that merely
/// delays. The checkout handler bounds every call with a timeout, so
/// implementations may block indefinitely without wedging a checkout.
#[async_trait]
pub trait OrderProcessor: Send + Sync {
    /// Processes the order identified by `purchase_id` for `total_amount`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Processing` if the order was rejected or the
    /// backend could not be reached.
    async fn process(&self, purchase_id: Uuid, total_amount: Decimal) -> Result<(), DomainError>;
}
