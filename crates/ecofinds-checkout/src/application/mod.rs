//! Application layer for the Checkout context.

pub mod command_handlers;
pub mod persistence;
pub mod query_handlers;
