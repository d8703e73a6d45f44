//! Book Storefront Library
//!
//! Core of a bookstore demo: a read-only catalog with pure filter/sort and
//! search engines, cart and wishlist aggregates persisted through a
//! key-value storage boundary, and a mock session/order facade, exposed
//! over a small REST API.

// Domain modules
pub mod account;
pub mod cart;
pub mod catalog;
pub mod wishlist;

// Infrastructure
pub mod router;
pub mod state;
pub mod storage;
