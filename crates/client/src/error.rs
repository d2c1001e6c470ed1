//! Transport error taxonomy.

use thiserror::Error;

/// Failure talking to the storefront backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("API error ({0}): {1}")]
    Api(u16, String),

    /// The response body did not decode into the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}
