use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory key-value store for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get(keys::TOKEN).is_none());

        store.set(keys::TOKEN, "abc");
        assert_eq!(store.get(keys::TOKEN).as_deref(), Some("abc"));

        store.set(keys::TOKEN, "def");
        assert_eq!(store.get(keys::TOKEN).as_deref(), Some("def"));

        store.remove(keys::TOKEN);
        assert!(store.get(keys::TOKEN).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set(keys::USER, "{}");
        assert_eq!(other.get(keys::USER).as_deref(), Some("{}"));
    }

    #[test]
    fn test_remove_all_session_keys() {
        let store = MemoryStore::new();
        store.set(keys::TOKEN, "t");
        store.set(keys::REFRESH_TOKEN, "r");
        store.set(keys::USER, "{}");
        store.set("theme", "dark");

        store.remove_all(&keys::SESSION);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }
}
