//! Storefront session layer.
//!
//! One `Storefront` per user session ties catalog loading, filter state,
//! the cart store, and checkout together behind a single owned object.
//! Nothing here is global: callers construct a session and pass it (or its
//! cart handle) wherever it is needed.

pub mod storefront;

pub use storefront::{SessionError, Storefront};
