//! EcoFinds — Checkout bounded context.
//!
//! Converts the current cart into an immutable purchase record, appends it
//! to the durable purchase history, and clears the cart — the local
//! simulation of backend order placement.

pub mod application;
pub mod domain;
pub mod processor;
