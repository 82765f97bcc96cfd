//! Cache Store Module
//!
//! In-memory key-value store with per-entry TTL expiration. Expiry is
//! evaluated lazily on read; the background sweep in `tasks::cleanup`
//! handles entries that are written but never read again.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Process-local key-value store with absolute per-entry expiry.
///
/// A miss (absent or expired key) is a control-flow signal, not an error,
/// so `get` returns an `Option` rather than a `Result`. The store itself is
/// not synchronized; callers wrap it in `Arc<RwLock<..>>` to make individual
/// operations atomic. No cross-operation atomicity is provided: two tasks
/// that both miss the same key may both fetch and both write, last writer
/// wins.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new empty CacheStore.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    // == Set ==
    /// Stores a value under `key`, expiring `ttl_seconds` from now.
    ///
    /// Unconditionally overwrites any existing entry for that key; the new
    /// expiry is computed from `ttl_seconds`, not inherited from the old
    /// entry. A TTL of zero makes the entry stale on the next read.
    pub fn set(&mut self, key: String, value: V, ttl_seconds: u64) {
        let entry = CacheEntry::new(value, ttl_seconds);
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a copy of the value stored under `key`.
    ///
    /// Returns `None` if the key is absent or its entry has expired.
    /// Reading an expired entry evicts it as a side effect so subsequent
    /// reads do not re-check stale state.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Delete ==
    /// Removes the entry for `key` if present; no-op otherwise.
    pub fn delete(&mut self, key: &str) {
        self.entries.remove(key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Removes all entries. Used for test isolation and process reset.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed. Intended to be driven by a
    /// timer independent of read traffic; correctness does not depend on it
    /// since reads evaluate expiry themselves.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.stats.record_expiration();
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_store_new() {
        let store: CacheStore<String> = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 300);
        let value = store.get("key1");

        assert_eq!(value, Some("value1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store: CacheStore<String> = CacheStore::new();

        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_delete() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 300);
        store.delete("key1");

        assert!(store.is_empty());
        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_store_delete_nonexistent_is_noop() {
        let mut store: CacheStore<String> = CacheStore::new();

        store.delete("nonexistent");
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 300);
        store.set("key1".to_string(), "value2".to_string(), 600);

        assert_eq!(store.get("key1"), Some("value2".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_resets_expiry() {
        let mut store = CacheStore::new();

        // First write is already stale; the overwrite must revive the key
        // because its expiry is computed from the second TTL.
        store.set("key1".to_string(), "value1".to_string(), 0);
        store.set("key1".to_string(), "value2".to_string(), 300);

        assert_eq!(store.get("key1"), Some("value2".to_string()));
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 1);

        assert!(store.get("key1").is_some());

        sleep(Duration::from_millis(1100));

        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_store_expired_read_evicts() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 0);

        assert_eq!(store.get("key1"), None);
        // Lazy deletion: the expired entry is gone after the read.
        assert_eq!(store.len(), 0);
        assert_eq!(store.stats().expirations, 1);
    }

    #[test]
    fn test_store_zero_ttl_immediately_stale() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 0);
        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_store_clear() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 300);
        store.set("key2".to_string(), "value2".to_string(), 300);
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.get("key1"), None);
        assert_eq!(store.get("key2"), None);
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 300);
        store.get("key1"); // hit
        store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_store_cleanup_expired() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 1);
        store.set("key2".to_string(), "value2".to_string(), 10);

        sleep(Duration::from_millis(1100));

        let removed = store.cleanup_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("key2").is_some());
    }

    #[test]
    fn test_store_cleanup_nothing_expired() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 300);

        assert_eq!(store.cleanup_expired(), 0);
        assert_eq!(store.len(), 1);
    }
}
