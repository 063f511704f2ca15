//! EcoFinds API — HTTP surface over the cart and checkout contexts.

pub mod error;
pub mod routes;
pub mod state;
