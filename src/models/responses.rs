//! Response DTOs for the proxy API
//!
//! The public wire contract. Field names and nesting here are exact; the
//! transformation rules in `service::transform` produce these shapes from
//! raw upstream records.

use serde::{Deserialize, Serialize};

// == List Shapes ==
/// One item of the public paginated list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonListItem {
    /// Numeric id parsed from the upstream resource URL (0 if unparseable)
    pub id: u32,
    pub name: String,
    /// Artwork URL synthesized from the id; may be a dead link when the id
    /// parse failed
    pub image: Option<String>,
}

/// Public list envelope with pagination metadata.
///
/// `next`/`previous` pass through from upstream verbatim, except under a
/// search filter where both are forced to null and `count` becomes the
/// filtered length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonList {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<PokemonListItem>,
}

// == Detail Shapes ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonType {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub name: String,
    #[serde(rename = "isHidden")]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonMove {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonForm {
    pub name: String,
}

/// Public detail record. Constructed once per cache miss, immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub image: Option<String>,
    pub types: Vec<PokemonType>,
    pub abilities: Vec<PokemonAbility>,
    pub moves: Vec<PokemonMove>,
    pub forms: Vec<PokemonForm>,
}

// == Auth Shapes ==
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Response body for POST /auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthenticatedUser,
}

// == Operational Shapes ==
/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries removed because their TTL elapsed
    pub expirations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}
