//! Catalog Domain Models

use serde::{Deserialize, Serialize};

/// A book in the catalog.
///
/// Catalog entries are created once at load and never mutated; the cart and
/// wishlist keep denormalized snapshots of the fields they display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Stable, unique identifier. Higher ids are newer arrivals.
    pub id: u32,

    /// Title of the book
    pub title: String,

    /// Author of the book
    pub author: String,

    /// Category label (e.g. "Fiction", "Mystery")
    pub category: String,

    /// Price in dollars, non-negative
    pub price: f64,

    /// Average rating, 0.0 to 5.0
    pub rating: f64,

    /// Page count, positive
    pub pages: u32,

    /// Short description shown in the detail view
    pub summary: String,

    /// Cover image reference
    pub image: String,
}
