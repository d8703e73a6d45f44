//! Catalog loading and the built-in seed inventory.
//!
//! The catalog is externally supplied: `assets/catalog.json` is read at
//! startup when present. A missing or malformed file falls back to the seed
//! inventory below, never a startup failure.

use super::models::Book;
use std::path::{Path, PathBuf};

/// Loads the catalog from `assets/catalog.json`, falling back to the seed
/// inventory.
pub fn load_catalog() -> Vec<Book> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load_catalog_from(&locate_catalog_file(&current_dir))
}

/// Reads and parses one catalog file. A missing or malformed file falls back
/// to the seed inventory, never an error.
fn load_catalog_from(path: &Path) -> Vec<Book> {
    match std::fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str::<Vec<Book>>(&raw) {
            Ok(books) => {
                tracing::info!(path = %path.display(), books = books.len(), "loaded catalog");
                books
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed catalog file, using seed inventory");
                seed_catalog()
            }
        },
        Err(_) => seed_catalog(),
    }
}

/// Attempts to locate the catalog file using a multi-step strategy
fn locate_catalog_file(current_dir: &Path) -> PathBuf {
    // Strategy to locate the catalog:
    // 1. ./assets/catalog.json
    // 2. ../assets/catalog.json (if running from a subdir)
    // 3. Fallback to "assets/catalog.json" relative path

    let candidate = current_dir.join("assets").join("catalog.json");
    if candidate.exists() {
        return candidate;
    }

    if let Some(parent) = current_dir.parent() {
        let candidate = parent.join("assets").join("catalog.json");
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from("assets/catalog.json") // Fallback
}

fn book(
    id: u32,
    title: &str,
    author: &str,
    category: &str,
    price: f64,
    rating: f64,
    pages: u32,
    summary: &str,
) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        category: category.to_string(),
        price,
        rating,
        pages,
        summary: summary.to_string(),
        image: format!("images/book-{}.jpg", id),
    }
}

/// The built-in demo inventory.
pub fn seed_catalog() -> Vec<Book> {
    vec![
        book(
            1,
            "The Silent Harbor",
            "Maya Ellsworth",
            "Mystery",
            14.99,
            4.5,
            342,
            "A retired detective returns to her coastal hometown and finds the harbor keeping secrets of its own.",
        ),
        book(
            2,
            "Garden of Glass",
            "Tomas Reiner",
            "Fiction",
            12.50,
            4.2,
            280,
            "Three generations of a family tend a greenhouse that outlasts everything else they built.",
        ),
        book(
            3,
            "The Last Cartographer",
            "Ingrid Halvorsen",
            "Fiction",
            18.00,
            4.8,
            512,
            "An aging mapmaker sets out to chart the one coastline no survey has ever agreed on.",
        ),
        book(
            4,
            "Night Trains",
            "Oliver Patch",
            "Mystery",
            9.99,
            3.9,
            198,
            "A sleeper car, eleven passengers, and a conductor who knows more than he punches.",
        ),
        book(
            5,
            "Starlight Protocol",
            "Renata Vos",
            "Sci-Fi",
            21.75,
            4.5,
            624,
            "First contact arrives as a maintenance request, and the station crew has 72 hours to answer it.",
        ),
        book(
            6,
            "The Orchard Letters",
            "Maya Ellsworth",
            "Romance",
            11.25,
            4.0,
            236,
            "Two rival fruit growers inherit adjoining orchards and a box of unsent letters.",
        ),
        book(
            7,
            "A Field Guide to Falling",
            "June Okafor",
            "Romance",
            12.50,
            4.2,
            312,
            "A glaciologist and a mountain rescue pilot keep meeting at the worst possible altitudes.",
        ),
        book(
            8,
            "The Measure of Mountains",
            "Elias Thorne",
            "Non-Fiction",
            24.00,
            4.7,
            456,
            "How two centuries of surveyors argued, froze, and triangulated their way to the height of the world.",
        ),
        book(
            9,
            "Clockwork Tides",
            "Renata Vos",
            "Sci-Fi",
            16.80,
            4.1,
            388,
            "On a tidally locked world, the engineers who wind the ocean discover it has started winding back.",
        ),
        book(
            10,
            "The Quiet Economist",
            "Priya Raman",
            "Non-Fiction",
            19.95,
            3.8,
            272,
            "A biography of the statistician whose unpublished notebooks rewrote development economics.",
        ),
        book(
            11,
            "Hollow Creek",
            "Oliver Patch",
            "Mystery",
            15.60,
            4.5,
            430,
            "The creek dried up in August. What it left behind reopened a thirty-year-old case.",
        ),
        book(
            12,
            "Letters from the Lighthouse",
            "Ingrid Halvorsen",
            "Biography",
            22.40,
            4.9,
            688,
            "Forty years of keeper's logs, assembled into the life of the last family on Varde Rock.",
        ),
    ]
}
