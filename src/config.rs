//! Configuration Module
//!
//! Handles loading and managing server configuration from environment
//! variables, plus the fixed constants shared across modules.

use std::env;

use anyhow::{Context, Result};

// == Pagination Constants ==
/// Default page size when the caller does not specify a limit
pub const DEFAULT_LIMIT: u32 = 20;

/// Maximum page size a caller may request
pub const MAX_LIMIT: u32 = 100;

/// How many records to pull upstream in one call when a search filter is
/// active. Search is filtered client-side over this superset rather than
/// delegated upstream, which does not paginate search.
pub const SEARCH_FETCH_LIMIT: u32 = 2000;

// == Auth Constants ==
/// Demo credentials accepted by the login endpoint
pub const AUTH_USERNAME: &str = "admin";
pub const AUTH_PASSWORD: &str = "admin";

/// Issued token lifetime in hours
pub const JWT_EXPIRY_HOURS: i64 = 24;

// == Artwork Constants ==
/// URL template for official artwork, keyed by the numeric id parsed from
/// the upstream resource URL. Derived algorithmically, never validated
/// against upstream, so a failed id parse yields a dead link.
pub const ARTWORK_URL_TEMPLATE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// Server configuration parameters.
///
/// Most values can be configured via environment variables with sensible
/// defaults; the JWT secret is required and has none.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds applied uniformly to every cache write
    pub cache_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Base URL of the upstream PokeAPI
    pub pokeapi_base_url: String,
    /// Upstream call timeout in seconds
    pub upstream_timeout: u64,
    /// Secret used to sign and verify JWTs
    pub jwt_secret: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL_SECONDS` - TTL for cache writes (default: 300)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `POKEAPI_BASE_URL` - Upstream base URL (default: https://pokeapi.co/api/v2)
    /// - `UPSTREAM_TIMEOUT_SECONDS` - Upstream call timeout (default: 10)
    /// - `JWT_SECRET` - Token signing secret (required)
    pub fn from_env() -> Result<Self> {
        let jwt_secret = env::var("JWT_SECRET")
            .context("Missing required environment variable: JWT_SECRET")?;

        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cache_ttl: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            pokeapi_base_url: env::var("POKEAPI_BASE_URL")
                .unwrap_or_else(|_| "https://pokeapi.co/api/v2".to_string()),
            upstream_timeout: env::var("UPSTREAM_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            jwt_secret,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl: 300,
            cleanup_interval: 60,
            pokeapi_base_url: "https://pokeapi.co/api/v2".to_string(),
            upstream_timeout: 10,
            jwt_secret: "test-secret".to_string(),
        }
    }
}
