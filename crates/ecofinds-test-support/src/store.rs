//! Test stores — mock `DocumentStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use ecofinds_core::error::DomainError;
use ecofinds_core::storage::DocumentStore;

/// A document store backed by an in-memory map. Records every `put` so tests
/// can assert on what was persisted and in which order.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: Mutex<HashMap<String, serde_json::Value>>,
    puts: Mutex<Vec<(String, serde_json::Value)>>,
}

impl InMemoryDocumentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a document under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_document(key: &str, document: serde_json::Value) -> Self {
        let store = Self::default();
        store
            .documents
            .lock()
            .unwrap()
            .insert(key.to_owned(), document);
        store
    }

    /// Returns a snapshot of all `put` calls in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn recorded_puts(&self) -> Vec<(String, serde_json::Value)> {
        self.puts.lock().unwrap().clone()
    }

    /// Returns the current document under `key`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn document(&self, key: &str) -> Option<serde_json::Value> {
        self.documents.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, DomainError> {
        Ok(self.documents.lock().unwrap().get(key).cloned())
    }

    async fn put(&self, key: &str, document: serde_json::Value) -> Result<(), DomainError> {
        self.puts
            .lock()
            .unwrap()
            .push((key.to_owned(), document.clone()));
        self.documents
            .lock()
            .unwrap()
            .insert(key.to_owned(), document);
        Ok(())
    }
}

/// A document store that always returns a storage error. Useful for testing
/// read-fallback and write-failure paths.
#[derive(Debug)]
pub struct FailingDocumentStore;

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn get(&self, _key: &str) -> Result<Option<serde_json::Value>, DomainError> {
        Err(DomainError::Storage("disk full".into()))
    }

    async fn put(&self, _key: &str, _document: serde_json::Value) -> Result<(), DomainError> {
        Err(DomainError::Storage("disk full".into()))
    }
}

/// A document store that behaves like `InMemoryDocumentStore` but fails every
/// `put` on one specific key. Useful for exercising the checkout's
/// partial-failure paths (history write vs. cart clear).
#[derive(Debug)]
pub struct PutFailingDocumentStore {
    inner: InMemoryDocumentStore,
    failing_key: String,
}

impl PutFailingDocumentStore {
    /// Creates a store that fails `put` calls for `failing_key`.
    #[must_use]
    pub fn new(inner: InMemoryDocumentStore, failing_key: &str) -> Self {
        Self {
            inner,
            failing_key: failing_key.to_owned(),
        }
    }

    /// Returns the current document under `key`, if any.
    #[must_use]
    pub fn document(&self, key: &str) -> Option<serde_json::Value> {
        self.inner.document(key)
    }
}

#[async_trait]
impl DocumentStore for PutFailingDocumentStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, DomainError> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, document: serde_json::Value) -> Result<(), DomainError> {
        if key == self.failing_key {
            return Err(DomainError::Storage(format!("write to {key} refused")));
        }
        self.inner.put(key, document).await
    }
}
