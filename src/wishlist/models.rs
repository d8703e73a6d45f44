//! Wishlist Domain Models

use crate::catalog::Book;
use serde::{Deserialize, Serialize};

/// Input referring to a single book by id
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRefInput {
    pub book_id: u32,
}

/// Snapshot of the wishlist returned after every read or mutation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistView {
    /// Outcome of the operation ("ok", "added", "removed", "ignored")
    pub status: String,

    /// Entries in insertion order
    pub items: Vec<Book>,

    /// Entry count, for the badge
    pub count: usize,

    /// Transient-notification text, when the operation signals one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
