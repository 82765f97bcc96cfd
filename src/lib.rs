//! Pokeproxy - A caching facade for the PokeAPI creature catalog
//!
//! Authenticates callers with short-lived JWT tokens, forwards paginated
//! and by-id lookups upstream, reshapes responses into a stable public
//! schema, and memoizes results in a process-local TTL cache.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
