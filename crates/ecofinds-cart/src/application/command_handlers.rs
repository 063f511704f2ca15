//! Command handlers for the Cart context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: load the cart document, execute the mutation,
//! persist the full collection back.
//!
//! Because each handler loads, mutates, and writes per operation, a failed
//! write surfaces as an error and leaves durable state unchanged; there is
//! no retained in-memory state to drift out of sync.

use ecofinds_core::clock::Clock;
use ecofinds_core::command::Command;
use ecofinds_core::error::DomainError;
use ecofinds_core::storage::DocumentStore;

use crate::application::persistence::{load_cart, save_cart};
use crate::application::query_handlers::CartView;
use crate::domain::commands::{AddToCart, ClearCart, RemoveFromCart, SetQuantity};

/// Handles the `AddToCart` command: loads the cart, merges or appends the
/// product, and persists the full collection.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an invalid product and
/// `DomainError::Storage` if the persistence write fails.
pub async fn handle_add_to_cart(
    command: &AddToCart,
    clock: &dyn Clock,
    store: &dyn DocumentStore,
) -> Result<CartView, DomainError> {
    let mut cart = load_cart(store).await;
    cart.add(command.product.clone(), clock)?;
    save_cart(store, &cart).await?;

    tracing::debug!(
        command = command.command_type(),
        correlation_id = %command.correlation_id,
        product_id = %command.product.id,
        item_count = cart.item_count(),
        "product added to cart"
    );
    Ok(CartView::from_cart(&cart))
}

/// Handles the `RemoveFromCart` command. Removing an absent product is a
/// successful no-op.
///
/// # Errors
///
/// Returns `DomainError::Storage` if the persistence write fails.
pub async fn handle_remove_from_cart(
    command: &RemoveFromCart,
    store: &dyn DocumentStore,
) -> Result<CartView, DomainError> {
    let mut cart = load_cart(store).await;
    cart.remove(&command.product_id);
    save_cart(store, &cart).await?;

    tracing::debug!(
        command = command.command_type(),
        correlation_id = %command.correlation_id,
        product_id = %command.product_id,
        "product removed from cart"
    );
    Ok(CartView::from_cart(&cart))
}

/// Handles the `SetQuantity` command. A quantity of zero behaves exactly as
/// removal; an absent product id is a no-op.
///
/// # Errors
///
/// Returns `DomainError::Storage` if the persistence write fails.
pub async fn handle_set_quantity(
    command: &SetQuantity,
    store: &dyn DocumentStore,
) -> Result<CartView, DomainError> {
    let mut cart = load_cart(store).await;
    cart.set_quantity(&command.product_id, command.quantity);
    save_cart(store, &cart).await?;

    tracing::debug!(
        command = command.command_type(),
        correlation_id = %command.correlation_id,
        product_id = %command.product_id,
        quantity = command.quantity,
        "cart quantity updated"
    );
    Ok(CartView::from_cart(&cart))
}

/// Handles the `ClearCart` command: empties the cart unconditionally.
///
/// # Errors
///
/// Returns `DomainError::Storage` if the persistence write fails.
pub async fn handle_clear_cart(
    command: &ClearCart,
    store: &dyn DocumentStore,
) -> Result<CartView, DomainError> {
    let mut cart = load_cart(store).await;
    cart.clear();
    save_cart(store, &cart).await?;

    tracing::debug!(
        command = command.command_type(),
        correlation_id = %command.correlation_id,
        "cart cleared"
    );
    Ok(CartView::from_cart(&cart))
}
