//! Client-side shopping cart.
//!
//! The cart only ever lives on the client: a map of product ID to quantity,
//! persisted under [`CART_STORAGE_KEY`] and rewritten after every mutation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{DocumentId, Price, Product};

/// Local storage key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "pineappleCart";

/// Product ID to quantity. Entries with quantity zero are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: BTreeMap<DocumentId, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product, returning the new quantity.
    pub fn add(&mut self, id: DocumentId, quantity: u32) -> u32 {
        if quantity == 0 {
            return self.quantity(&id);
        }
        let entry = self.items.entry(id).or_insert(0);
        *entry = entry.saturating_add(quantity);
        *entry
    }

    /// Set a product's quantity. Zero removes the line.
    pub fn set_quantity(&mut self, id: DocumentId, quantity: u32) {
        if quantity == 0 {
            self.items.remove(&id);
        } else {
            self.items.insert(id, quantity);
        }
    }

    /// Remove a product, returning whether it was present.
    pub fn remove(&mut self, id: &DocumentId) -> bool {
        self.items.remove(id).is_some()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn quantity(&self, id: &DocumentId) -> u32 {
        self.items.get(id).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .values()
            .fold(0_u32, |acc, qty| acc.saturating_add(*qty))
    }

    /// Iterate lines in ID order.
    pub fn lines(&self) -> impl Iterator<Item = (&DocumentId, u32)> {
        self.items.iter().map(|(id, qty)| (id, *qty))
    }

    /// Sum of price times quantity for every line found in `catalog`.
    ///
    /// Lines whose product is not in the catalog contribute nothing.
    #[must_use]
    pub fn subtotal(&self, catalog: &[Product]) -> Price {
        self.lines()
            .filter_map(|(id, qty)| {
                catalog
                    .iter()
                    .find(|p| &p.id == id)
                    .map(|p| p.details.price * qty)
            })
            .sum()
    }
}
