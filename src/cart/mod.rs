//! Shopping Cart Domain Module
//!
//! The quantity-keyed cart aggregate and its REST surface:
//! - Domain models (CartLine, inputs, responses)
//! - Aggregate state with persistence (`Cart`)
//! - REST API handlers

pub mod handlers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::CartLine;
pub use state::Cart;
