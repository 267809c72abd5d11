/// Synchronous string key-value storage.
///
/// Mirrors the browser `Storage` API: reads return `None` for missing keys,
/// writes and removals never fail from the caller's point of view. Backends
/// that can fail log and drop the error so a broken store degrades to
/// "nothing persisted" instead of taking the session down with it.
///
/// Implementations are cheap handles; clones share the same underlying data.
pub trait KeyValueStore: Clone {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Remove every key in `keys`.
    fn remove_all(&self, keys: &[&str]) {
        for key in keys {
            self.remove(key);
        }
    }
}
