//! GeoNames HTTP client.
//!
//! Issues single-shot `searchJSON` queries. There is no retry and no rate
//! limiting here; quota handling is the caller's concern.

use std::future::Future;

use tracing::{debug, warn};

use crate::domain::CityRecord;

use super::convert::convert_response;
use super::error::GeoNamesError;
use super::types::SearchResponse;

/// Default base URL for the GeoNames web services.
const DEFAULT_BASE_URL: &str = "http://api.geonames.org";

/// Records with a known population below this are discarded.
const DEFAULT_MIN_POPULATION: u64 = 500;

/// Largest `maxRows` GeoNames will honour for a single search.
const DEFAULT_MAX_ROWS_CEILING: usize = 1000;

/// Source of raw city candidates for a query.
///
/// This abstraction allows [`CitySearch`](crate::search::CitySearch) to be
/// tested with mock data.
pub trait CityProvider {
    /// Fetch up to roughly `max_results` candidates for `query`, best-populated
    /// first. Implementations may over-fetch to leave room for deduplication.
    fn fetch_candidates(
        &self,
        query: &str,
        max_results: usize,
    ) -> impl Future<Output = Result<Vec<CityRecord>, GeoNamesError>> + Send;
}

/// Configuration for the GeoNames client.
#[derive(Debug, Clone)]
pub struct GeoNamesConfig {
    /// GeoNames account name, sent as the `username` parameter
    pub username: String,
    /// Base URL for the API
    pub base_url: String,
    /// Minimum known population for a record to be kept
    pub min_population: u64,
    /// Upper bound on `maxRows` per request
    pub max_rows_ceiling: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeoNamesConfig {
    /// Create a new config with the given account name.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            min_population: DEFAULT_MIN_POPULATION,
            max_rows_ceiling: DEFAULT_MAX_ROWS_CEILING,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the population floor.
    pub fn with_min_population(mut self, min_population: u64) -> Self {
        self.min_population = min_population;
        self
    }

    /// Set the `maxRows` ceiling.
    pub fn with_max_rows_ceiling(mut self, ceiling: usize) -> Self {
        self.max_rows_ceiling = ceiling;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// GeoNames search API client.
#[derive(Debug, Clone)]
pub struct GeoNamesClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    min_population: u64,
    max_rows_ceiling: usize,
}

impl GeoNamesClient {
    /// Create a new GeoNames client with the given configuration.
    pub fn new(config: GeoNamesConfig) -> Result<Self, GeoNamesError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username,
            min_population: config.min_population,
            max_rows_ceiling: config.max_rows_ceiling.max(1),
        })
    }

    /// Number of raw rows to request for `max_results` final results.
    ///
    /// Twice the target, so ranking and deduplication have material to work
    /// with, capped at the service ceiling.
    pub fn requested_rows(&self, max_results: usize) -> usize {
        max_results
            .saturating_mul(2)
            .clamp(1, self.max_rows_ceiling)
    }

    /// Search for populated places matching `query`.
    ///
    /// Surfaces every failure: transport errors, non-success statuses,
    /// unparseable bodies, and `status` objects in the response.
    pub async fn try_search_cities(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<CityRecord>, GeoNamesError> {
        let url = format!("{}/searchJSON", self.base_url);
        let rows = self.requested_rows(max_results);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query.to_string()),
                ("maxRows", rows.to_string()),
                ("featureClass", "P".to_string()),
                ("orderby", "population".to_string()),
                ("username", self.username.clone()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeoNamesError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| GeoNamesError::Json {
                message: e.to_string(),
            })?;

        let cities = convert_response(parsed, self.min_population)?;
        debug!(query, rows, kept = cities.len(), "geonames search complete");
        Ok(cities)
    }

    /// Search for populated places, treating any failure as "no results".
    ///
    /// Failures are logged and never returned to the caller.
    pub async fn search_cities(&self, query: &str, max_results: usize) -> Vec<CityRecord> {
        match self.try_search_cities(query, max_results).await {
            Ok(cities) => cities,
            Err(e) => {
                warn!(query, error = %e, "geonames search failed");
                Vec::new()
            }
        }
    }
}

impl CityProvider for GeoNamesClient {
    async fn fetch_candidates(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<CityRecord>, GeoNamesError> {
        self.try_search_cities(query, max_results).await
    }
}
