//! API Handlers
//!
//! HTTP request handlers for each endpoint, plus the shared application
//! state. Boundary validation (offset/limit clamping, id parsing) happens
//! here before the catalog service is invoked.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tokio::sync::RwLock;

use crate::auth::AuthService;
use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    HealthResponse, ListQuery, LoginRequest, LoginResponse, PokemonDetail, PokemonList,
    StatsResponse,
};
use crate::service::{PokemonService, SharedCache};
use crate::upstream::{PokeApiClient, PokemonSource};

// == App State ==
/// Application state shared across all handlers.
///
/// The cache is constructed here and injected into the catalog service; the
/// same handle is shared with the background cleanup task. No module-level
/// singletons.
#[derive(Clone)]
pub struct AppState {
    /// Shared response cache
    pub cache: SharedCache,
    /// Catalog orchestrator
    pub service: Arc<PokemonService>,
    /// Token issuance and verification
    pub auth: Arc<AuthService>,
}

impl AppState {
    /// Creates state over an injected upstream source. Tests substitute a
    /// mock source here.
    pub fn new(source: Arc<dyn PokemonSource>, config: &Config) -> Self {
        let cache: SharedCache = Arc::new(RwLock::new(CacheStore::new()));
        let service = Arc::new(PokemonService::new(
            source,
            cache.clone(),
            config.cache_ttl,
        ));
        let auth = Arc::new(AuthService::new(&config.jwt_secret));

        Self {
            cache,
            service,
            auth,
        }
    }

    /// Creates state with the production PokeAPI client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = PokeApiClient::new(&config.pokeapi_base_url, config.upstream_timeout)?;
        Ok(Self::new(Arc::new(client), config))
    }
}

// == Id Parsing ==
/// Parses a path id, rejecting non-numeric and non-positive values with a
/// 400-class error before the service is invoked.
fn parse_pokemon_id(raw: &str) -> Result<u32> {
    match raw.parse::<u32>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(ApiError::InvalidRequest("Invalid Pokemon ID".to_string())),
    }
}

// == Handlers ==
/// Handler for POST /auth/login
///
/// Validates the demo credentials and issues a 24h bearer token.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(credentials): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    state.auth.login(&credentials).map(Json)
}

/// Handler for GET /pokemon
///
/// Paginated list, optionally filtered by a free-text search term. Offset
/// and limit are clamped here per the boundary contract.
pub async fn list_pokemon_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<PokemonList>> {
    let list = state
        .service
        .get_list(query.offset(), query.limit(), query.search())
        .await?;

    Ok(Json(list))
}

/// Handler for GET /pokemon/:id
pub async fn get_pokemon_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<PokemonDetail>> {
    let id = parse_pokemon_id(&raw_id)?;
    let detail = state.service.get_by_id(id).await?;

    Ok(Json(detail))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.read().await.stats();

    Json(StatsResponse {
        hits: stats.hits,
        misses: stats.misses,
        expirations: stats.expirations,
        total_entries: stats.total_entries,
        hit_rate: stats.hit_rate(),
    })
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
