//! Search configuration for city lookups.

use std::time::Duration;

/// Configuration parameters for city search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of results returned when the caller doesn't ask for a limit.
    pub max_results: usize,

    /// How long a resolved query stays in the cache (seconds).
    pub cache_ttl_secs: u64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_results: usize, cache_ttl_secs: u64) -> Self {
        Self {
            max_results,
            cache_ttl_secs,
        }
    }

    /// Returns the cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            cache_ttl_secs: 300, // 5 minutes
        }
    }
}
