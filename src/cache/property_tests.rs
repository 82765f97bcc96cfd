//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the cache's TTL, overwrite, and statistics
//! properties over generated operation sequences.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::cache::CacheStore;

// == Strategies ==
/// Generates valid cache keys (non-empty, bounded length)
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9:_-]{1,32}"
}

/// Generates cache values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,64}"
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any key and value, a fresh write with a non-zero TTL is
    // immediately readable and returns the written value.
    #[test]
    fn prop_set_then_get_returns_value(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new();
        store.set(key.clone(), value.clone(), 300);

        prop_assert_eq!(store.get(&key), Some(value));
    }

    // For any key, a write with TTL zero is stale on the very next read
    // and the read evicts it.
    #[test]
    fn prop_zero_ttl_never_visible(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new();
        store.set(key.clone(), value, 0);

        prop_assert_eq!(store.get(&key), None);
        prop_assert_eq!(store.len(), 0);
    }

    // For any two writes to the same key, the second value wins regardless
    // of the first write's TTL.
    #[test]
    fn prop_overwrite_last_writer_wins(
        key in key_strategy(),
        v1 in value_strategy(),
        v2 in value_strategy(),
        first_ttl in 0u64..600,
    ) {
        let mut store = CacheStore::new();
        store.set(key.clone(), v1, first_ttl);
        store.set(key.clone(), v2.clone(), 300);

        prop_assert_eq!(store.get(&key), Some(v2));
    }

    // After clear(), every previously-set key reads as absent.
    #[test]
    fn prop_clear_empties_store(ops in prop::collection::vec((key_strategy(), value_strategy()), 1..20)) {
        let mut store = CacheStore::new();
        for (key, value) in &ops {
            store.set(key.clone(), value.clone(), 300);
        }

        store.clear();

        prop_assert!(store.is_empty());
        for (key, _) in &ops {
            prop_assert_eq!(store.get(key), None);
        }
    }

    // For any sequence of operations with non-expiring TTLs, the store
    // behaves like a plain map and the hit/miss counters reflect exactly
    // the reads that found or missed a live key.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new();
        let mut model: HashMap<String, String> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key.clone(), value.clone(), 300);
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    let got = store.get(&key);
                    let expected = model.get(&key).cloned();
                    prop_assert_eq!(&got, &expected);
                    if expected.is_some() {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                }
                CacheOp::Delete { key } => {
                    store.delete(&key);
                    model.remove(&key);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, model.len());
    }

    // delete() is idempotent and never fails, present key or not.
    #[test]
    fn prop_delete_idempotent(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new();
        store.set(key.clone(), value, 300);

        store.delete(&key);
        store.delete(&key);

        prop_assert_eq!(store.get(&key), None);
    }
}
