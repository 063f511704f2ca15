//! Purchase-history persistence.
//!
//! The history is an append-only ordered sequence persisted whole under a
//! single key: read the full document, append, write the full document back.
//! Last write wins; acceptable for single-process client-local state.

use ecofinds_core::error::DomainError;
use ecofinds_core::storage::{DocumentStore, PURCHASES_KEY};

use crate::domain::records::PurchaseRecord;

/// Loads the purchase history, falling back to an empty sequence when the
/// document is absent, unreadable, or malformed.
pub async fn load_purchases(store: &dyn DocumentStore) -> Vec<PurchaseRecord> {
    let document = match store.get(PURCHASES_KEY).await {
        Ok(Some(document)) => document,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "purchase history read failed, treating as empty");
            return Vec::new();
        }
    };

    match serde_json::from_value(document) {
        Ok(purchases) => purchases,
        Err(e) => {
            tracing::warn!(error = %e, "stored purchase history is malformed, treating as empty");
            Vec::new()
        }
    }
}

/// Persists the full purchase history.
///
/// # Errors
///
/// Returns `DomainError::Storage` if serialization or the write fails.
pub async fn save_purchases(
    store: &dyn DocumentStore,
    purchases: &[PurchaseRecord],
) -> Result<(), DomainError> {
    let document = serde_json::to_value(purchases)
        .map_err(|e| DomainError::Storage(format!("purchase history serialization failed: {e}")))?;
    store.put(PURCHASES_KEY, document).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ecofinds_test_support::{FailingDocumentStore, InMemoryDocumentStore};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::domain::records::PurchaseStatus;

    fn record(total_cents: i64) -> PurchaseRecord {
        PurchaseRecord {
            id: Uuid::new_v4(),
            products: Vec::new(),
            total_amount: Decimal::new(total_cents, 2),
            purchase_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            status: PurchaseStatus::Confirmed,
        }
    }

    #[tokio::test]
    async fn test_load_purchases_returns_empty_for_fresh_store() {
        // Arrange
        let store = InMemoryDocumentStore::new();

        // Act
        let purchases = load_purchases(&store).await;

        // Assert
        assert!(purchases.is_empty());
    }

    #[tokio::test]
    async fn test_load_purchases_treats_read_failure_as_empty() {
        // Arrange
        let store = FailingDocumentStore;

        // Act
        let purchases = load_purchases(&store).await;

        // Assert
        assert!(purchases.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_append_order() {
        // Arrange
        let store = InMemoryDocumentStore::new();
        let first = record(1000);
        let second = record(2500);

        // Act
        save_purchases(&store, &[first.clone(), second.clone()])
            .await
            .unwrap();
        let loaded = load_purchases(&store).await;

        // Assert
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, first.id);
        assert_eq!(loaded[1].id, second.id);
    }
}
