//! Command handlers for the Checkout context.
//!
//! The checkout transition snapshots the cart, drives the order processor
//! under a timeout, appends the purchase record to the durable history, and
//! only then clears the cart. Processing or history-write failures leave
//! both documents untouched.

use std::time::Duration;

use ecofinds_core::clock::Clock;
use ecofinds_core::command::Command;
use ecofinds_core::error::DomainError;
use ecofinds_core::processor::OrderProcessor;
use ecofinds_core::storage::DocumentStore;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use ecofinds_cart::application::persistence::{load_cart, save_cart};

use crate::application::persistence::{load_purchases, save_purchases};
use crate::domain::commands::Checkout;
use crate::domain::records::PurchaseRecord;
use crate::domain::state::CheckoutTransition;

/// Upper bound on the order-processing step. A processor that exceeds this
/// fails the checkout with both documents untouched.
pub const PROCESSING_TIMEOUT: Duration = Duration::from_secs(30);

/// Result of a successfully committed checkout.
#[derive(Debug, Serialize)]
pub struct CheckoutReceipt {
    /// Identifier of the recorded purchase.
    pub purchase_id: Uuid,
    /// Subtotal recorded on the purchase.
    pub total_amount: Decimal,
}

/// Handles the `Checkout` command with the default processing timeout.
///
/// # Errors
///
/// Returns `DomainError::EmptyCart` when the cart holds no line items,
/// `DomainError::Processing` when the order processor rejects or times out,
/// and `DomainError::Storage` when the purchase history cannot be written.
pub async fn handle_checkout(
    command: &Checkout,
    clock: &dyn Clock,
    store: &dyn DocumentStore,
    processor: &dyn OrderProcessor,
) -> Result<CheckoutReceipt, DomainError> {
    handle_checkout_with_timeout(command, clock, store, processor, PROCESSING_TIMEOUT).await
}

/// Handles the `Checkout` command, bounding the processing step by `timeout`.
///
/// # Errors
///
/// See [`handle_checkout`].
pub async fn handle_checkout_with_timeout(
    command: &Checkout,
    clock: &dyn Clock,
    store: &dyn DocumentStore,
    processor: &dyn OrderProcessor,
    timeout: Duration,
) -> Result<CheckoutReceipt, DomainError> {
    let mut transition = CheckoutTransition::new();

    // Snapshot the cart at invocation time; later mutations cannot affect
    // the record being built.
    let mut cart = load_cart(store).await;
    transition.start(cart.is_empty())?;

    let record =
        PurchaseRecord::from_line_items(cart.items(), cart.subtotal(), clock.now().date_naive());

    tracing::info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id,
        purchase_id = %record.id,
        total_amount = %record.total_amount,
        "checkout processing"
    );

    match tokio::time::timeout(timeout, processor.process(record.id, record.total_amount)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            transition.fail()?;
            return Err(e);
        }
        Err(_) => {
            transition.fail()?;
            return Err(DomainError::Processing(format!(
                "order processing timed out after {}s",
                timeout.as_secs()
            )));
        }
    }

    // Append to the durable history before touching the cart: the cart is
    // only cleared once the purchase is durably confirmed.
    let mut purchases = load_purchases(store).await;
    purchases.push(record.clone());
    if let Err(e) = save_purchases(store, &purchases).await {
        transition.fail()?;
        return Err(e);
    }
    transition.commit()?;

    cart.clear();
    if let Err(e) = save_cart(store, &cart).await {
        // The purchase is already durable; a stale cart is the lesser harm.
        tracing::warn!(
            correlation_id = %command.correlation_id,
            purchase_id = %record.id,
            error = %e,
            "purchase committed but cart clear failed"
        );
    }

    tracing::info!(
        correlation_id = %command.correlation_id,
        purchase_id = %record.id,
        "checkout committed"
    );

    Ok(CheckoutReceipt {
        purchase_id: record.id,
        total_amount: record.total_amount,
    })
}
