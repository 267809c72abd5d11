//! # `localStorage` key-value store for the browser
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It reads and writes the origin's `window.localStorage`, so a
//! session survives page reloads.
//!
//! ## Handle management
//!
//! `LocalStore` is a zero-size struct that looks up `window.localStorage` on
//! every call. The browser hands back the same `Storage` object each time, so
//! there is nothing to cache.
//!
//! ## Error handling
//!
//! `localStorage` can be unavailable (privacy mode, sandboxed iframes) or
//! full. Reads then return `None` and writes are dropped with a warning,
//! which the session layer observes as "not logged in".

use web_sys::Storage;

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!(key, "failed to write localStorage: {:?}", e);
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!(key, "failed to remove localStorage entry: {:?}", e);
        }
    }
}
