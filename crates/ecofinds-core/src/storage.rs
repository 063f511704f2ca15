//! Durable document storage abstraction.
//!
//! The cart and purchase history are persisted as whole JSON documents under
//! well-known keys, with read-modify-write semantics: every mutation reads
//! the full document, changes it in memory, and writes the full document
//! back. Last write wins; there is no locking across keys.

use async_trait::async_trait;

use crate::error::DomainError;

/// Storage key for the cart document (ordered array of line items).
pub const CART_KEY: &str = "ecofinds_cart";

/// Storage key for the purchase-history document (ordered array of
/// purchase records, append-only).
pub const PURCHASES_KEY: &str = "user_purchases";

/// Key→JSON-document store, persisted across process restarts.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads the document stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, DomainError>;

    /// Replaces the document stored under `key` with `document`.
    async fn put(&self, key: &str, document: serde_json::Value) -> Result<(), DomainError>;
}
