//! Storage boundary
//!
//! The aggregates persist themselves through the [`Storage`] trait, a plain
//! string key-value store. Two implementations are provided: an in-memory one
//! for tests and ephemeral runs, and a file-backed one that keeps one JSON
//! file per key under a data directory.

use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Storage key for the cart snapshot.
pub const CART_KEY: &str = "storefront.cart";
/// Storage key for the wishlist snapshot.
pub const WISHLIST_KEY: &str = "storefront.wishlist";
/// Storage key for the session identity.
pub const SESSION_KEY: &str = "storefront.session";

/// Shared handle to a storage backend.
pub type SharedStorage = Arc<dyn Storage>;

/// A synchronous key-value store for aggregate snapshots.
///
/// Writes are best-effort: the in-memory state stays authoritative, so an
/// implementation that cannot persist logs the failure and drops the write
/// rather than surfacing an error to the caller.
pub trait Storage: Send + Sync {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

/// In-memory storage backed by a concurrent map.
#[derive(Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// File-backed storage keeping one `<key>.json` file per key.
pub struct JsonFileStorage {
    data_dir: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage rooted at `data_dir`. The directory is created
    /// lazily on the first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Locates the data directory relative to the working directory.
    ///
    /// Strategy:
    /// 1. ./data
    /// 2. ../data (if running from a subdir)
    /// 3. Fallback to "data" relative path
    pub fn locate() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(Self::locate_data_directory(&current_dir))
    }

    fn locate_data_directory(current_dir: &Path) -> PathBuf {
        if current_dir.join("data").exists() {
            return current_dir.join("data");
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join("data").exists() {
                return parent.join("data");
            }
        }

        PathBuf::from("data") // Fallback
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl Storage for JsonFileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.data_dir) {
            tracing::warn!(key, error = %e, "could not create data directory, dropping write");
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            tracing::warn!(key, error = %e, "could not persist snapshot, dropping write");
        }
    }
}
