//! Shopping Cart Aggregate
//!
//! The cart is an insertion-ordered collection of [`CartLine`]s, keyed by
//! book id. Every mutation synchronously serializes the whole collection to
//! storage under [`CART_KEY`]; on startup the cart is rehydrated from that
//! key, treating a missing or corrupt snapshot as empty.

use super::models::CartLine;
use crate::catalog::Book;
use crate::storage::{SharedStorage, CART_KEY};

/// The shopping cart aggregate. Owns its lines exclusively.
pub struct Cart {
    lines: Vec<CartLine>,
    storage: SharedStorage,
}

impl Cart {
    /// Rehydrates the cart from storage, or starts empty.
    pub fn load(storage: SharedStorage) -> Self {
        let lines = storage
            .get(CART_KEY)
            .map(|raw| match serde_json::from_str(&raw) {
                Ok(lines) => lines,
                Err(e) => {
                    tracing::warn!(error = %e, "corrupt cart snapshot, starting empty");
                    Vec::new()
                }
            })
            .unwrap_or_default();

        Self { lines, storage }
    }

    /// Adds one copy of `book`: increments the existing line's quantity, or
    /// appends a new line with quantity 1.
    pub fn add(&mut self, book: &Book) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == book.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::snapshot_of(book));
        }
        self.persist();
    }

    /// Removes the line for `book_id`. No-op if absent.
    pub fn remove(&mut self, book_id: u32) {
        self.lines.retain(|l| l.id != book_id);
        self.persist();
    }

    /// Adds `delta` to the quantity of the line for `book_id`. A result of
    /// zero or below removes the line. No-op if no such line exists.
    pub fn change_quantity(&mut self, book_id: u32, delta: i64) {
        let Some(pos) = self.lines.iter().position(|l| l.id == book_id) else {
            return;
        };

        let next = (self.lines[pos].quantity as i64).saturating_add(delta);
        if next <= 0 {
            self.lines.remove(pos);
        } else {
            self.lines[pos].quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
        self.persist();
    }

    /// Cart total: price x quantity summed in full precision, rounded to
    /// 2 places once at the end.
    pub fn total(&self) -> f64 {
        let total: f64 = self
            .lines
            .iter()
            .map(|l| l.price * l.quantity as f64)
            .sum();
        (total * 100.0).round() / 100.0
    }

    /// Sum of quantities, used for the cart badge.
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Empties the cart (checkout) and persists the empty state.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    fn persist(&self) {
        match serde_json::to_string(&self.lines) {
            Ok(raw) => self.storage.set(CART_KEY, &raw),
            Err(e) => tracing::warn!(error = %e, "could not serialize cart snapshot"),
        }
    }
}
