//! Upstream PokeAPI Client
//!
//! HTTP client for the external catalog source. The `PokemonSource` trait
//! is the seam the catalog service depends on, so tests can substitute a
//! mock source and count upstream calls.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::upstream::{RawPokemonDetail, RawPokemonList};

// == Pokemon Source Trait ==
/// Contract the catalog service consumes: paginated listing plus by-id
/// lookup. Failures keep their class (not-found vs unavailable vs other
/// status) so the boundary layer can map them to status codes.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// Fetches one page of the upstream list.
    async fn list(&self, offset: u32, limit: u32) -> Result<RawPokemonList>;

    /// Fetches the raw detail record for a single id.
    async fn get_by_id(&self, id: u32) -> Result<RawPokemonDetail>;
}

// == PokeAPI Client ==
/// Production `PokemonSource` backed by reqwest with a fixed call timeout.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    // == Constructor ==
    /// Creates a client for the given base URL with the given per-call
    /// timeout in seconds.
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| ApiError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issues a GET and decodes the JSON body, classifying failures.
    ///
    /// 404 becomes `NotFound`, any other non-success status becomes
    /// `UpstreamStatus`, and transport errors (including timeouts) become
    /// `UpstreamUnavailable` via the `From<reqwest::Error>` conversion.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("Upstream request: GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound("Pokemon not found".to_string()));
        }

        if !status.is_success() {
            return Err(ApiError::UpstreamStatus {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("External API error")
                    .to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl PokemonSource for PokeApiClient {
    async fn list(&self, offset: u32, limit: u32) -> Result<RawPokemonList> {
        let url = format!(
            "{}/pokemon?offset={}&limit={}",
            self.base_url, offset, limit
        );
        self.fetch_json(&url).await
    }

    async fn get_by_id(&self, id: u32) -> Result<RawPokemonDetail> {
        let url = format!("{}/pokemon/{}", self.base_url, id);
        self.fetch_json(&url).await
    }
}
