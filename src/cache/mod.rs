//! Cache Module
//!
//! Provides in-memory caching with per-entry TTL expiration. Entries are
//! expired lazily on read, with an optional periodic sweep for keys that
//! are never read again (see `tasks::cleanup`).

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::CacheStore;
