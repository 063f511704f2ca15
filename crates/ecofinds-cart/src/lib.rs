//! EcoFinds — Cart bounded context.
//!
//! Maintains the authoritative, durable representation of what the current
//! user intends to buy: an ordered collection of line items with
//! quantity-merging semantics, mirrored whole to the document store on every
//! mutation.

pub mod application;
pub mod domain;
