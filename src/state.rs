//! Application State Management
//!
//! `AppState` owns the read-only catalog and the three persisted aggregates.
//! Each aggregate is a single logical actor driven by discrete requests, so
//! a plain mutex per aggregate is all the coordination needed; storage and
//! the order-number generator are injected so tests can substitute an
//! in-memory store and a deterministic generator.

use crate::account::{OrderIdGenerator, RandomOrderIds, Session};
use crate::cart::Cart;
use crate::catalog::{load_catalog, Book};
use crate::storage::{JsonFileStorage, SharedStorage};
use crate::wishlist::Wishlist;
use std::sync::{Arc, Mutex};

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: the catalog plus the persisted aggregates.
pub struct AppState {
    /// The fixed, read-only catalog, in load order.
    pub catalog: Vec<Book>,

    pub cart: Mutex<Cart>,
    pub wishlist: Mutex<Wishlist>,
    pub session: Mutex<Session>,

    /// The storage backend the aggregates persist through.
    pub storage: SharedStorage,

    /// Order-number source; injectable for deterministic tests.
    pub order_ids: Box<dyn OrderIdGenerator>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Production wiring: catalog from `assets/catalog.json` (or the seed
    /// inventory), file-backed storage, random order numbers.
    pub fn new() -> Self {
        let storage: SharedStorage = Arc::new(JsonFileStorage::locate());
        Self::with_parts(load_catalog(), storage, Box::new(RandomOrderIds))
    }

    /// Explicit wiring, used by tests. All three aggregates rehydrate from
    /// `storage` immediately.
    pub fn with_parts(
        catalog: Vec<Book>,
        storage: SharedStorage,
        order_ids: Box<dyn OrderIdGenerator>,
    ) -> Self {
        Self {
            cart: Mutex::new(Cart::load(Arc::clone(&storage))),
            wishlist: Mutex::new(Wishlist::load(Arc::clone(&storage))),
            session: Mutex::new(Session::load(Arc::clone(&storage))),
            catalog,
            storage,
            order_ids,
        }
    }
}
