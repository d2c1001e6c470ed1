//! Cart domain: lines, the shared store, derived totals.
//!
//! The store is the single source of truth for cart contents; every other
//! component mutates cart state through it, never around it.

pub mod store;

pub use store::{CartLine, CartSnapshot, CartStore};
