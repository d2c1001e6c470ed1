//! Wire types for order submission.

use serde::{Deserialize, Serialize};

use clothy_cart::CartLine;

/// Body of the order-creation request: the cart snapshot plus an optional
/// contact email. `email` is omitted entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    pub items: Vec<CartLine>,
    pub total: f64,
}

/// Success body of order creation.
///
/// The backend may send more; only the acknowledgement message is
/// load-bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAck {
    pub message: String,
}
