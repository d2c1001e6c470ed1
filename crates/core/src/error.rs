//! Domain error model.

use thiserror::Error;

/// Result type used across the storefront domain layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures. Transport concerns
/// (network, HTTP status, body decoding) live in the client crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A catalog record could not be resolved to a usable product.
    ///
    /// Carries the name of the field that failed to resolve.
    #[error("malformed record: unusable field `{0}`")]
    MalformedRecord(String),

    /// A cart mutation asked for a non-positive quantity.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),
}

impl StoreError {
    pub fn malformed(field: impl Into<String>) -> Self {
        Self::MalformedRecord(field.into())
    }
}
