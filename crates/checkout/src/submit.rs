//! Order submission.

use thiserror::Error;

use clothy_cart::CartStore;
use clothy_client::{ApiClient, ClientError, OrderAck, OrderPayload};

/// Why an order did not go through.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart had no lines; no request was made.
    #[error("cart is empty")]
    EmptyCart,

    /// The order sink rejected the order or was unreachable. The cart is
    /// left untouched so the user can retry.
    #[error("order submission failed: {0}")]
    Submission(#[from] ClientError),
}

/// Submit the current cart as an order.
///
/// The payload is built from one consistent snapshot of the store. On a
/// success response the cart is cleared; on any failure it is preserved
/// as-is. No automatic retry, and no in-flight de-duplication: callers are
/// expected to disable re-invocation while a submission is pending.
pub async fn place_order(
    cart: &CartStore,
    client: &ApiClient,
    email: Option<String>,
) -> Result<OrderAck, CheckoutError> {
    let snapshot = cart.snapshot();
    if snapshot.items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let payload = OrderPayload {
        email,
        items: snapshot.items,
        total: snapshot.total,
    };

    tracing::debug!(total = payload.total, lines = payload.items.len(), "submitting order");
    let ack = client.submit_order(&payload).await?;

    cart.clear();
    Ok(ack)
}
