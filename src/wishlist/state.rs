//! Wishlist Aggregate
//!
//! Membership is keyed by book id and enforced as a set; entries are full
//! book snapshots kept in insertion order. Every mutation persists the whole
//! collection under [`WISHLIST_KEY`]; a missing or corrupt snapshot
//! rehydrates as empty.

use crate::catalog::Book;
use crate::storage::{SharedStorage, WISHLIST_KEY};

/// Outcome of a wishlist toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The id was not found in the catalog; nothing changed.
    NotInCatalog,
}

/// The wishlist aggregate. Owns its entries exclusively.
pub struct Wishlist {
    entries: Vec<Book>,
    storage: SharedStorage,
}

impl Wishlist {
    /// Rehydrates the wishlist from storage, or starts empty.
    pub fn load(storage: SharedStorage) -> Self {
        let entries = storage
            .get(WISHLIST_KEY)
            .map(|raw| match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(error = %e, "corrupt wishlist snapshot, starting empty");
                    Vec::new()
                }
            })
            .unwrap_or_default();

        Self { entries, storage }
    }

    /// Appends a snapshot of `book` if not already present. Returns whether
    /// anything was added.
    pub fn add(&mut self, book: &Book) -> bool {
        if self.contains(book.id) {
            return false;
        }
        self.entries.push(book.clone());
        self.persist();
        true
    }

    /// Removes the entry for `book_id`. No-op if absent.
    pub fn remove(&mut self, book_id: u32) {
        if !self.contains(book_id) {
            return;
        }
        self.entries.retain(|b| b.id != book_id);
        self.persist();
    }

    /// Removes `book_id` if present, otherwise looks it up in `catalog` and
    /// adds it. An id unknown to the catalog changes nothing.
    pub fn toggle(&mut self, book_id: u32, catalog: &[Book]) -> ToggleOutcome {
        if self.contains(book_id) {
            self.remove(book_id);
            return ToggleOutcome::Removed;
        }
        match catalog.iter().find(|b| b.id == book_id) {
            Some(book) => {
                self.add(book);
                ToggleOutcome::Added
            }
            None => ToggleOutcome::NotInCatalog,
        }
    }

    /// Membership test, used by rendering to style the toggle affordance.
    pub fn contains(&self, book_id: u32) -> bool {
        self.entries.iter().any(|b| b.id == book_id)
    }

    /// Entry count, used for the badge.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Book] {
        &self.entries
    }

    fn persist(&self) {
        match serde_json::to_string(&self.entries) {
            Ok(raw) => self.storage.set(WISHLIST_KEY, &raw),
            Err(e) => tracing::warn!(error = %e, "could not serialize wishlist snapshot"),
        }
    }
}
