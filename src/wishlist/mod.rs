//! Wishlist Domain Module
//!
//! An insertion-ordered membership set of book snapshots, with the same
//! persistence discipline as the cart.

pub mod handlers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{ToggleOutcome, Wishlist};
