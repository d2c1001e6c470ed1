//! Catalog domain: wire decoding, record normalization, filtering.
//!
//! This crate contains business rules for the browsable catalog, implemented
//! purely as deterministic logic (no IO, no HTTP). Fetching lives in
//! `clothy-client`.

pub mod filter;
pub mod product;
pub mod wire;

pub use filter::{Filters, visible};
pub use product::{Product, normalize};
pub use wire::{RawProductRecord, WireScalar};
