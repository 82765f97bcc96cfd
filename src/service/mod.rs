//! Service Module
//!
//! Catalog orchestration (cache-aside) and the pure transformation rules
//! that reshape raw upstream records into the public schema.

mod pokemon;
pub mod transform;

// Re-export public types
pub use pokemon::{CachedResponse, PokemonService, SharedCache};
