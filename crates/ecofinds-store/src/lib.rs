//! EcoFinds Store — durable storage backend.
//!
//! Implements the `DocumentStore` contract on top of the local filesystem,
//! one JSON file per storage key. This is the stand-in for a real backend
//! database in this client-local core.

pub mod file_document_store;

pub use file_document_store::FileDocumentStore;
