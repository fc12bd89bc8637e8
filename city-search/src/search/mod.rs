//! City search: ranking, deduplication, and cached lookups.
//!
//! This module answers "which places did the user most likely mean by this
//! text?". Raw candidates come from a [`CityProvider`], get ranked (capitals,
//! exact matches, prefix matches, then population), deduplicated by
//! (name, country), truncated, and memoized for a while.

mod capitals;
mod config;
mod normalize;
mod rank;

#[cfg(test)]
mod search_tests;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::TtlCache;
use crate::domain::CityRecord;
use crate::geonames::CityProvider;

pub use capitals::{is_capital, is_capital_name};
pub use config::SearchConfig;
pub use normalize::normalize;
pub use rank::{dedupe_cities, dedupe_key, rank_cities};

/// A ranked, deduplicated, truncated result set.
pub type RankedCities = Arc<Vec<CityRecord>>;

/// Rank, deduplicate, and truncate raw candidates for `query`.
///
/// This is the pure core of [`CitySearch::search`].
pub fn rank_and_dedupe(candidates: Vec<CityRecord>, query: &str, limit: usize) -> Vec<CityRecord> {
    let mut cities = dedupe_cities(rank_cities(candidates, query));
    cities.truncate(limit);
    cities
}

/// City search front end.
///
/// Owns its cache, so independent instances never share results. Construct
/// one at startup and share it behind an `Arc`.
pub struct CitySearch<P> {
    provider: P,
    cache: TtlCache<String, RankedCities>,
    config: SearchConfig,
}

impl<P: CityProvider> CitySearch<P> {
    /// Create a new search front end over `provider`.
    pub fn new(provider: P, config: SearchConfig) -> Self {
        Self {
            provider,
            cache: TtlCache::new(),
            config,
        }
    }

    /// Search for cities matching `query`, returning at most `limit` results.
    ///
    /// A `limit` of 0 means "use the configured default". A blank query
    /// yields no results without touching the provider. Provider failures
    /// are logged and yield no results; they are not cached.
    pub async fn search(&self, query: &str, limit: usize) -> RankedCities {
        let query = query.trim();
        if query.is_empty() {
            return Arc::new(Vec::new());
        }

        let limit = if limit == 0 {
            self.config.max_results
        } else {
            limit
        };
        let key = cache_key(query, limit);

        if let Some(cached) = self.cache.get(&key).await {
            debug!(query, limit, "city search cache hit");
            return cached;
        }
        debug!(query, limit, "city search cache miss");

        let candidates = match self.provider.fetch_candidates(query, limit).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(query, error = %e, "city search failed");
                return Arc::new(Vec::new());
            }
        };

        let entry = Arc::new(rank_and_dedupe(candidates, query, limit));
        self.cache
            .put(key, entry.clone(), self.config.cache_ttl())
            .await;

        entry
    }

    /// Access the underlying provider for operations that bypass the cache.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of cached queries, including expired ones.
    pub async fn cache_entry_count(&self) -> usize {
        self.cache.len().await
    }

    /// Invalidate all cached entries.
    pub async fn invalidate_cache(&self) {
        self.cache.clear().await;
    }
}

fn cache_key(query: &str, limit: usize) -> String {
    format!("{}:{}", query.trim().to_lowercase(), limit)
}
