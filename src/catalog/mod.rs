//! Catalog Domain Module
//!
//! The read-only book catalog and the pure engines that run over it:
//! - Domain model (`Book`) and the built-in seed inventory
//! - Filter/sort engine (`FilterCriteria`, `filter_and_sort`)
//! - Capped search (`SearchCriteria`, `search`)
//! - REST API handlers

pub mod data;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod search;

// Re-export commonly used items for convenience
pub use data::load_catalog;
pub use filter::{filter_and_sort, FilterCriteria, PageBucket, SortMode};
pub use handlers::routes;
pub use models::Book;
pub use search::{search, SearchCriteria, SEARCH_RESULT_CAP};
