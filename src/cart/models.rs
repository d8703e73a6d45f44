//! Shopping Cart Domain Models

use crate::catalog::Book;
use serde::{Deserialize, Serialize};

/// Returns the default quantity (1) for cart lines
fn default_quantity() -> u32 {
    1
}

/// A quantity-bearing entry in the shopping cart.
///
/// Carries a denormalized snapshot of the book's display fields so the cart
/// renders without consulting the catalog. At most one line exists per book
/// id; repeated adds increment `quantity` instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Id of the book this line refers to
    pub id: u32,

    /// Title snapshot
    pub title: String,

    /// Author snapshot
    pub author: String,

    /// Unit price snapshot
    pub price: f64,

    /// Cover image snapshot
    pub image: String,

    /// Quantity of this line (defaults to 1, always >= 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl CartLine {
    /// Snapshots a book into a fresh line with quantity 1.
    pub fn snapshot_of(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            price: book.price,
            image: book.image.clone(),
            quantity: 1,
        }
    }
}

/// Input referring to a single book by id
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRefInput {
    pub book_id: u32,
}

/// Input for quantity changes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityInput {
    pub book_id: u32,

    /// Signed change; a drop to zero or below removes the line
    pub delta: i64,
}

/// Snapshot of the cart returned after every read or mutation, carrying
/// everything the renderer needs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Outcome of the operation ("ok", "added", "removed", "updated",
    /// "ignored")
    pub status: String,

    /// Lines in insertion order
    pub items: Vec<CartLine>,

    /// Sum of quantities, for the badge
    pub count: u32,

    /// Cart total, rounded to 2 places
    pub total: f64,

    /// Transient-notification text, when the operation signals one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
