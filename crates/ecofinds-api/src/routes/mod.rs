//! HTTP route modules.

pub mod cart;
pub mod checkout;
pub mod health;
