//! Key-value storage adapter over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! All persisted state lives under two `localStorage` keys: the id of the
//! currently selected session and the serialized session collection. The
//! adapter is a plain string store with no transactionality; everything
//! above it (serialization, session semantics) belongs to
//! `state::sessions`. An in-memory implementation backs the tests.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use std::collections::HashMap;
use std::sync::Mutex;

/// Storage key holding the id of the currently selected session.
pub const CURRENT_SESSION_KEY: &str = "currentSessionId";

/// Storage key holding the serialized session collection.
pub const HISTORY_KEY: &str = "chatHistories";

/// Minimal string key-value store contract.
///
/// Reads of absent keys are `None`; writes are fire-and-forget (the
/// browser store has no useful failure signal beyond quota errors, which
/// are logged and dropped).
pub trait StoreAdapter: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// `StoreAdapter` backed by the browser's `localStorage`.
///
/// Outside a browser (or with storage disabled) reads behave as missing
/// keys and writes are logged no-ops.
pub struct BrowserStore;

impl StoreAdapter for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable, dropping write for {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }
}

/// In-memory `StoreAdapter` for tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl StoreAdapter for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.entries.lock() {
            map.insert(key.to_owned(), value.to_owned());
        }
    }
}
