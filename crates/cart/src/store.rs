//! Cart lines and the cart store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use clothy_catalog::Product;
use clothy_core::{ProductId, StoreError, StoreResult};

/// One product's entry in the cart.
///
/// Serializes flattened (product fields beside `qty`), which is the shape
/// the order endpoint expects for payload items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub qty: i64,
}

impl CartLine {
    /// Line subtotal (`qty × price`).
    pub fn subtotal(&self) -> f64 {
        self.qty as f64 * self.product.price
    }
}

/// Cart contents with a total computed under the same lock, so items and
/// total are mutually consistent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSnapshot {
    pub items: Vec<CartLine>,
    pub total: f64,
}

/// Shared cart store: the single owner of cart state.
///
/// Cheap to clone and safe to share across threads. Every operation holds
/// the lock for its entire read-modify-write cycle, so rapid repeated adds
/// never tear a quantity increment.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Arc<Mutex<Vec<CartLine>>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` of `product`, merging into the existing line when the
    /// product is already in the cart.
    ///
    /// Lines keep first-add insertion order. Non-positive quantities are
    /// rejected with `InvalidQuantity` and leave the cart unchanged.
    pub fn add(&self, product: Product, qty: i64) -> StoreResult<()> {
        if qty <= 0 {
            return Err(StoreError::InvalidQuantity(qty));
        }

        let mut lines = self.lock();
        match lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.qty += qty,
            None => lines.push(CartLine { product, qty }),
        }
        Ok(())
    }

    /// Remove the line for `id`. Removing an absent id is a no-op.
    pub fn remove(&self, id: &ProductId) {
        self.lock().retain(|line| line.product.id != *id);
    }

    /// Empty the cart. Used after a successful order.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Current lines, in first-add order.
    pub fn items(&self) -> Vec<CartLine> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Cart total, recomputed from the current lines on every call.
    pub fn total(&self) -> f64 {
        self.lock().iter().map(CartLine::subtotal).sum()
    }

    /// Items and total taken under one lock acquisition.
    pub fn snapshot(&self) -> CartSnapshot {
        let lines = self.lock();
        CartSnapshot {
            total: lines.iter().map(CartLine::subtotal).sum(),
            items: lines.clone(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CartLine>> {
        // A poisoned lock only means some holder panicked mid-operation;
        // line data itself is never left half-written by these operations.
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
