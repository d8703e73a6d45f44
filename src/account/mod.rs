//! Account Domain Module
//!
//! Mock identity and mock order handling:
//! - Session aggregate (mock login/register, persisted identity)
//! - Checkout with its gating outcomes and order-number generation
//! - Mock order tracking

pub mod handlers;
pub mod models;
pub mod orders;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::User;
pub use orders::{checkout, track, CheckoutOutcome, OrderIdGenerator, RandomOrderIds};
pub use state::Session;
