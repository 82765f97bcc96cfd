//! Pokemon Catalog Service
//!
//! Cache-aside orchestration: build a deterministic cache key, try the
//! cache, on miss call the upstream source, transform, write back under the
//! fixed TTL, return. The cache and the upstream source are injected at
//! construction time; the service holds no other state.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::CacheStore;
use crate::config::SEARCH_FETCH_LIMIT;
use crate::error::Result;
use crate::models::{PokemonDetail, PokemonList, PokemonListItem};
use crate::service::transform::{transform_detail, transform_list, transform_list_item};
use crate::upstream::PokemonSource;

// == Cached Response ==
/// Payload stored in the shared cache. Key prefixes (`list:`,
/// `list-search:`, `detail:`) keep the variants in disjoint key spaces, so
/// a lookup never sees the wrong variant under a well-formed key.
#[derive(Debug, Clone)]
pub enum CachedResponse {
    List(PokemonList),
    Detail(PokemonDetail),
}

/// Shared handle to the response cache. One instance per process, owned by
/// the application state and shared with the background cleanup task.
pub type SharedCache = Arc<RwLock<CacheStore<CachedResponse>>>;

// == Pokemon Service ==
/// Orchestrator for the public catalog operations.
pub struct PokemonService {
    source: Arc<dyn PokemonSource>,
    cache: SharedCache,
    /// TTL in seconds applied to every cache write
    cache_ttl: u64,
}

impl PokemonService {
    // == Constructor ==
    /// Creates a service over an injected upstream source and cache.
    pub fn new(source: Arc<dyn PokemonSource>, cache: SharedCache, cache_ttl: u64) -> Self {
        Self {
            source,
            cache,
            cache_ttl,
        }
    }

    // == Cache Keys ==
    /// Key for a plain paginated page. Distinct offset/limit tuples never
    /// collide.
    fn list_key(offset: u32, limit: u32) -> String {
        format!("list:{offset}:{limit}")
    }

    /// Key for a search result set. The query is lowercased so logically
    /// identical searches share an entry.
    fn search_key(normalized_query: &str) -> String {
        format!("list-search:{normalized_query}")
    }

    /// Key for a detail record.
    fn detail_key(id: u32) -> String {
        format!("detail:{id}")
    }

    // == Get List ==
    /// Returns one page of the public list, or the filtered result set when
    /// a search term is given.
    ///
    /// `offset` and `limit` arrive already clamped by the HTTP boundary.
    /// Upstream failures propagate unmodified and nothing is cached for
    /// them.
    pub async fn get_list(
        &self,
        offset: u32,
        limit: u32,
        search: Option<&str>,
    ) -> Result<PokemonList> {
        match search {
            Some(query) => self.get_list_filtered(query).await,
            None => self.get_list_page(offset, limit).await,
        }
    }

    /// Plain pagination: delegate offset/limit upstream on a miss and pass
    /// the pagination metadata through verbatim.
    async fn get_list_page(&self, offset: u32, limit: u32) -> Result<PokemonList> {
        let key = Self::list_key(offset, limit);

        if let Some(CachedResponse::List(list)) = self.cache.write().await.get(&key) {
            debug!("Cache hit for {}", key);
            return Ok(list);
        }

        debug!("Cache miss for {}, fetching upstream", key);
        let raw = self.source.list(offset, limit).await?;
        let list = transform_list(raw);

        self.cache
            .write()
            .await
            .set(key, CachedResponse::List(list.clone()), self.cache_ttl);

        Ok(list)
    }

    /// Search: fetch a large superset in one upstream call and filter it
    /// client-side, since upstream does not paginate search. Matches where
    /// the lowercased name contains the lowercased query, or the
    /// stringified id contains the query. Pagination is intentionally
    /// disabled: `count` is the filtered length and `next`/`previous` are
    /// null.
    async fn get_list_filtered(&self, query: &str) -> Result<PokemonList> {
        let normalized = query.to_lowercase();
        let key = Self::search_key(&normalized);

        if let Some(CachedResponse::List(list)) = self.cache.write().await.get(&key) {
            debug!("Cache hit for {}", key);
            return Ok(list);
        }

        debug!("Cache miss for {}, fetching superset upstream", key);
        let raw = self.source.list(0, SEARCH_FETCH_LIMIT).await?;

        let results: Vec<PokemonListItem> = raw
            .results
            .iter()
            .map(transform_list_item)
            .filter(|item| {
                item.name.to_lowercase().contains(&normalized)
                    || item.id.to_string().contains(&normalized)
            })
            .collect();

        let list = PokemonList {
            count: results.len() as u32,
            next: None,
            previous: None,
            results,
        };

        self.cache
            .write()
            .await
            .set(key, CachedResponse::List(list.clone()), self.cache_ttl);

        Ok(list)
    }

    // == Get By Id ==
    /// Returns the public detail record for a single id.
    ///
    /// Id validity (positive integer) is the HTTP boundary's concern. An
    /// upstream not-found propagates unmodified and is never cached.
    pub async fn get_by_id(&self, id: u32) -> Result<PokemonDetail> {
        let key = Self::detail_key(id);

        if let Some(CachedResponse::Detail(detail)) = self.cache.write().await.get(&key) {
            debug!("Cache hit for {}", key);
            return Ok(detail);
        }

        debug!("Cache miss for {}, fetching upstream", key);
        let raw = self.source.get_by_id(id).await?;
        let detail = transform_detail(raw);

        self.cache
            .write()
            .await
            .set(key, CachedResponse::Detail(detail.clone()), self.cache_ttl);

        Ok(detail)
    }
}
