//! EcoFinds Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that the cart and
//! checkout contexts depend on. It contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod money;
pub mod processor;
pub mod product;
pub mod storage;
