//! Simulated order processor.

use std::time::Duration;

use async_trait::async_trait;
use ecofinds_core::error::DomainError;
use ecofinds_core::processor::OrderProcessor;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Order processor that stands in for a real payment/fulfillment backend by
/// sleeping for a configurable delay and then accepting the order.
#[derive(Debug, Clone)]
pub struct SimulatedOrderProcessor {
    delay: Duration,
}

impl SimulatedOrderProcessor {
    /// Creates a simulated processor with the given artificial delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedOrderProcessor {
    /// The reference behavior: a two-second simulated processing window.
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[async_trait]
impl OrderProcessor for SimulatedOrderProcessor {
    async fn process(&self, purchase_id: Uuid, total_amount: Decimal) -> Result<(), DomainError> {
        tokio::time::sleep(self.delay).await;
        tracing::debug!(%purchase_id, %total_amount, "simulated order accepted");
        Ok(())
    }
}
