//! The cart ledger.
//!
//! An owned quantity-per-product map mutated only through [`Cart::add`] and
//! [`Cart::remove`]. Invariant: every stored quantity is positive; an entry
//! that would reach zero is removed instead of kept at zero.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The cart's quantity-per-product ledger.
///
/// Entries referencing ids that no longer resolve in the catalog are kept:
/// they price at zero and are filtered out of order payloads, but the ledger
/// itself is never reconciled against the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    // Ordered map so iteration (and payload item order) is deterministic.
    quantities: BTreeMap<ProductId, u32>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the quantity for a product by one, inserting it at one if
    /// absent. Always succeeds.
    pub fn add(&mut self, product_id: ProductId) {
        self.quantities
            .entry(product_id)
            .and_modify(|q| *q = q.saturating_add(1))
            .or_insert(1);
    }

    /// Decrement the quantity for a product by one, removing the entry when
    /// it reaches zero. A no-op for ids not in the cart.
    pub fn remove(&mut self, product_id: &ProductId) {
        if let Some(quantity) = self.quantities.get_mut(product_id) {
            if *quantity > 1 {
                *quantity -= 1;
            } else {
                self.quantities.remove(product_id);
            }
        }
    }

    /// Quantity recorded for a product; zero for ids not in the cart.
    pub fn quantity(&self, product_id: &ProductId) -> u32 {
        self.quantities.get(product_id).copied().unwrap_or(0)
    }

    /// Sum of all quantities across all entries.
    pub fn total_quantity(&self) -> u64 {
        self.quantities.values().map(|&q| u64::from(q)).sum()
    }

    /// Number of distinct products in the cart.
    pub fn unique_items(&self) -> usize {
        self.quantities.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Iterate entries in product-id order.
    pub fn entries(&self) -> impl Iterator<Item = (&ProductId, u32)> {
        self.quantities.iter().map(|(id, &q)| (id, q))
    }

    /// Remove every entry.
    ///
    /// The core never calls this itself: whether to empty the cart after a
    /// completed order is the caller's decision.
    pub fn clear(&mut self) {
        self.quantities.clear();
    }
}
