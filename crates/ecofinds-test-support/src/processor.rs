//! Test processors — mock `OrderProcessor` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use ecofinds_core::error::DomainError;
use ecofinds_core::processor::OrderProcessor;
use rust_decimal::Decimal;
use uuid::Uuid;

/// An order processor that commits immediately without delay.
#[derive(Debug)]
pub struct InstantOrderProcessor;

#[async_trait]
impl OrderProcessor for InstantOrderProcessor {
    async fn process(&self, _purchase_id: Uuid, _total_amount: Decimal) -> Result<(), DomainError> {
        Ok(())
    }
}

/// An order processor that always rejects the order.
#[derive(Debug)]
pub struct FailingOrderProcessor;

#[async_trait]
impl OrderProcessor for FailingOrderProcessor {
    async fn process(&self, _purchase_id: Uuid, _total_amount: Decimal) -> Result<(), DomainError> {
        Err(DomainError::Processing("payment declined".into()))
    }
}

/// An order processor that records every call and succeeds.
#[derive(Debug, Default)]
pub struct RecordingOrderProcessor {
    calls: Mutex<Vec<(Uuid, Decimal)>>,
}

impl RecordingOrderProcessor {
    /// Creates a new recording processor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all processed orders.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn processed(&self) -> Vec<(Uuid, Decimal)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderProcessor for RecordingOrderProcessor {
    async fn process(&self, purchase_id: Uuid, total_amount: Decimal) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push((purchase_id, total_amount));
        Ok(())
    }
}
