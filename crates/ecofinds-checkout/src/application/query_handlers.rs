//! Query handlers for the Checkout context.

use ecofinds_core::error::DomainError;
use ecofinds_core::storage::DocumentStore;
use serde::Serialize;

use crate::application::persistence::load_purchases;
use crate::domain::records::PurchaseRecord;

/// Read-only view of the purchase history.
#[derive(Debug, Serialize)]
pub struct PurchaseHistoryView {
    /// Purchase records in append order, oldest first.
    pub purchases: Vec<PurchaseRecord>,
}

/// Retrieves the full purchase history.
///
/// # Errors
///
/// This query currently cannot fail (reads fall back to an empty history),
/// but keeps a `Result` return so callers are insulated from future stricter
/// read policies.
pub async fn get_purchase_history(
    store: &dyn DocumentStore,
) -> Result<PurchaseHistoryView, DomainError> {
    let purchases = load_purchases(store).await;
    Ok(PurchaseHistoryView { purchases })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ecofinds_core::storage::PURCHASES_KEY;
    use ecofinds_test_support::InMemoryDocumentStore;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::domain::records::PurchaseStatus;

    #[tokio::test]
    async fn test_get_purchase_history_empty_for_fresh_store() {
        // Arrange
        let store = InMemoryDocumentStore::new();

        // Act
        let view = get_purchase_history(&store).await.unwrap();

        // Assert
        assert!(view.purchases.is_empty());
    }

    #[tokio::test]
    async fn test_get_purchase_history_returns_records_in_append_order() {
        // Arrange
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let records: Vec<PurchaseRecord> = (1..=2)
            .map(|i| PurchaseRecord {
                id: Uuid::new_v4(),
                products: Vec::new(),
                total_amount: Decimal::new(i * 1000, 2),
                purchase_date: date,
                status: PurchaseStatus::Confirmed,
            })
            .collect();
        let store = InMemoryDocumentStore::with_document(
            PURCHASES_KEY,
            serde_json::to_value(&records).unwrap(),
        );

        // Act
        let view = get_purchase_history(&store).await.unwrap();

        // Assert
        assert_eq!(view.purchases.len(), 2);
        assert_eq!(view.purchases[0].id, records[0].id);
        assert_eq!(view.purchases[1].id, records[1].id);
    }
}
