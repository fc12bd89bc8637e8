//! Country flag images.
//!
//! Flag URLs are derived from the country code and handed to the display
//! layer as plain strings. [`FlagPrefetcher`] warms an HTTP cache for them
//! and remembers which URLs it has already fetched so repeated result sets
//! don't trigger repeated downloads.

use std::time::Duration;

use futures::future::join_all;
use moka::future::Cache as MokaCache;
use tracing::{debug, warn};

use crate::domain::CountryCode;

/// Default flag CDN, serving 80px-wide PNGs.
pub const DEFAULT_FLAG_CDN: &str = "https://flagcdn.com";

/// Flag image URL for `code` on the default CDN.
///
/// ```
/// use city_search::domain::CountryCode;
/// use city_search::flags::flag_url;
///
/// let fr = CountryCode::parse("FR").unwrap();
/// assert_eq!(flag_url(&fr), "https://flagcdn.com/w80/fr.png");
/// ```
pub fn flag_url(code: &CountryCode) -> String {
    flag_url_with_base(DEFAULT_FLAG_CDN, code)
}

/// Flag image URL for `code` under an arbitrary CDN base.
pub fn flag_url_with_base(base: &str, code: &CountryCode) -> String {
    format!(
        "{}/w80/{}.png",
        base.trim_end_matches('/'),
        code.to_lowercase()
    )
}

/// Configuration for the flag prefetcher.
#[derive(Debug, Clone)]
pub struct PrefetchConfig {
    /// Maximum number of remembered URLs.
    pub max_capacity: u64,

    /// How long a URL counts as prefetched.
    pub ttl: Duration,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            max_capacity: 500,
            ttl: Duration::from_secs(24 * 60 * 60),
            timeout_secs: 10,
        }
    }
}

/// Fetches flag images ahead of display and remembers what it fetched.
#[derive(Clone)]
pub struct FlagPrefetcher {
    http: reqwest::Client,
    fetched: MokaCache<String, ()>,
}

impl FlagPrefetcher {
    /// Create a new prefetcher.
    pub fn new(config: &PrefetchConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let fetched = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(config.ttl)
            .build();

        Ok(Self { http, fetched })
    }

    /// Whether `url` has been fetched successfully and not yet forgotten.
    pub async fn is_prefetched(&self, url: &str) -> bool {
        self.fetched.get(url).await.is_some()
    }

    /// Fetch every URL not already prefetched, concurrently.
    ///
    /// Returns how many URLs were newly fetched. Failures are logged and
    /// left unrecorded so a later call retries them.
    pub async fn prefetch<I, S>(&self, urls: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pending = Vec::new();
        for url in urls {
            let url = url.into();
            if !pending.contains(&url) && !self.is_prefetched(&url).await {
                pending.push(url);
            }
        }

        let results = join_all(pending.into_iter().map(|url| self.fetch_one(url))).await;
        let fetched = results.into_iter().filter(|ok| *ok).count();
        debug!(fetched, "flag prefetch complete");
        fetched
    }

    async fn fetch_one(&self, url: String) -> bool {
        let outcome = match self.http.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => resp.bytes().await.map(|_| ()),
            Ok(resp) => {
                warn!(url = %url, status = resp.status().as_u16(), "flag prefetch rejected");
                return false;
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {
                self.fetched.insert(url, ()).await;
                true
            }
            Err(e) => {
                warn!(url = %url, error = %e, "flag prefetch failed");
                false
            }
        }
    }

    /// Forget every prefetched URL.
    pub fn invalidate_all(&self) {
        self.fetched.invalidate_all();
    }
}
