//! Checkout flow: build the order payload from a cart snapshot and submit
//! it to the order endpoint.

pub mod submit;

pub use submit::{CheckoutError, place_order};
