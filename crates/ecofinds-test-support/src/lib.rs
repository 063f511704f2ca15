//! Shared test mocks and utilities for the EcoFinds cart & checkout core.

mod clock;
mod processor;
mod store;

pub use clock::FixedClock;
pub use processor::{FailingOrderProcessor, InstantOrderProcessor, RecordingOrderProcessor};
pub use store::{FailingDocumentStore, InMemoryDocumentStore, PutFailingDocumentStore};
