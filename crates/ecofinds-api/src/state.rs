//! Shared application state.

use std::sync::Arc;

use ecofinds_core::clock::Clock;
use ecofinds_core::processor::OrderProcessor;
use ecofinds_core::storage::DocumentStore;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of time for line items and purchase dates.
    pub clock: Arc<dyn Clock>,
    /// Durable document store holding the cart and purchase history.
    pub store: Arc<dyn DocumentStore>,
    /// Order-processing backend for checkouts.
    pub processor: Arc<dyn OrderProcessor>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        store: Arc<dyn DocumentStore>,
        processor: Arc<dyn OrderProcessor>,
    ) -> Self {
        Self {
            clock,
            store,
            processor,
        }
    }
}
