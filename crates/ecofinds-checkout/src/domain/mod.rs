//! Domain layer for the Checkout context.

pub mod commands;
pub mod pricing;
pub mod records;
pub mod state;
