//! Unit tests for the cached city search front end.

use super::*;
use crate::geonames::{GeoNamesClient, GeoNamesConfig, GeoNamesError};
use crate::test_support::{city, serve};
use std::sync::Mutex;
use std::time::Duration;

/// Mock city provider for testing.
struct MockProvider {
    cities: Vec<CityRecord>,
    fail: Mutex<bool>,
    calls: Mutex<Vec<(String, usize)>>,
}

impl MockProvider {
    fn new(cities: Vec<CityRecord>) -> Self {
        Self {
            cities,
            fail: Mutex::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl CityProvider for MockProvider {
    async fn fetch_candidates(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<CityRecord>, GeoNamesError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), max_results));
        if *self.fail.lock().unwrap() {
            return Err(GeoNamesError::Api {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        Ok(self.cities.clone())
    }
}

fn paris_fixture() -> Vec<CityRecord> {
    vec![
        city(3, "Paris", "United States", "US", 900).with_admin_region("Texas"),
        city(2, "Paris", "United States", "US", 25_171).with_admin_region("Tennessee"),
        city(4, "Parisot", "France", "FR", 1_200),
        city(1, "Paris", "France", "FR", 2_140_526),
        city(5, "Lyon", "France", "FR", 500_000),
    ]
}

fn ids(cities: &[CityRecord]) -> Vec<u64> {
    cities.iter().map(|c| c.id).collect()
}

#[tokio::test]
async fn paris_end_to_end() {
    let search = CitySearch::new(MockProvider::new(paris_fixture()), SearchConfig::default());

    let results = search.search("paris", 10).await;

    // Capital-named, exact matches by population; the smaller US Paris
    // collapses into the larger; then prefix match; then the rest.
    assert_eq!(ids(&results), vec![1, 2, 4, 5]);

    let mut keys: Vec<_> = results.iter().map(dedupe_key).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), results.len());
}

#[tokio::test]
async fn truncates_to_limit() {
    let search = CitySearch::new(MockProvider::new(paris_fixture()), SearchConfig::default());

    let results = search.search("paris", 2).await;
    assert_eq!(ids(&results), vec![1, 2]);
}

#[tokio::test]
async fn zero_limit_uses_configured_default() {
    let search = CitySearch::new(MockProvider::new(paris_fixture()), SearchConfig::new(1, 60));

    let results = search.search("paris", 0).await;
    assert_eq!(ids(&results), vec![1]);
    assert_eq!(search.provider().calls.lock().unwrap()[0].1, 1);
}

#[tokio::test]
async fn blank_query_skips_provider() {
    let search = CitySearch::new(MockProvider::new(paris_fixture()), SearchConfig::default());

    assert!(search.search("", 10).await.is_empty());
    assert!(search.search("   ", 10).await.is_empty());
    assert_eq!(search.provider().call_count(), 0);
}

#[tokio::test]
async fn query_is_trimmed_before_provider() {
    let search = CitySearch::new(MockProvider::new(paris_fixture()), SearchConfig::default());

    search.search("  Paris ", 5).await;
    assert_eq!(
        search.provider().calls.lock().unwrap()[0],
        ("Paris".to_string(), 5)
    );
}

#[tokio::test]
async fn repeated_query_hits_cache() {
    let search = CitySearch::new(MockProvider::new(paris_fixture()), SearchConfig::default());

    let first = search.search("paris", 10).await;
    let second = search.search("PARIS ", 10).await;

    assert_eq!(search.provider().call_count(), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(search.cache_entry_count().await, 1);
}

#[tokio::test]
async fn different_limits_are_cached_separately() {
    let search = CitySearch::new(MockProvider::new(paris_fixture()), SearchConfig::default());

    search.search("paris", 2).await;
    search.search("paris", 3).await;

    assert_eq!(search.provider().call_count(), 2);
    assert_eq!(search.cache_entry_count().await, 2);
}

#[tokio::test]
async fn non_latin_queries_do_not_share_entries() {
    let search = CitySearch::new(MockProvider::new(vec![]), SearchConfig::default());

    search.search("東京", 5).await;
    search.search("Москва", 5).await;

    assert_eq!(search.provider().call_count(), 2);
}

#[tokio::test]
async fn failures_are_empty_and_not_cached() {
    let search = CitySearch::new(MockProvider::new(paris_fixture()), SearchConfig::default());
    search.provider().set_failing(true);

    assert!(search.search("paris", 10).await.is_empty());
    assert_eq!(search.cache_entry_count().await, 0);

    search.provider().set_failing(false);
    let results = search.search("paris", 10).await;

    assert_eq!(results.len(), 4);
    assert_eq!(search.provider().call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn expired_entries_are_refetched() {
    let search = CitySearch::new(MockProvider::new(paris_fixture()), SearchConfig::new(10, 60));

    search.search("paris", 10).await;
    tokio::time::advance(Duration::from_secs(59)).await;
    search.search("paris", 10).await;
    assert_eq!(search.provider().call_count(), 1);

    tokio::time::advance(Duration::from_secs(2)).await;
    search.search("paris", 10).await;
    assert_eq!(search.provider().call_count(), 2);
    assert_eq!(search.cache_entry_count().await, 1);
}

#[tokio::test]
async fn invalidate_cache_forces_refetch() {
    let search = CitySearch::new(MockProvider::new(paris_fixture()), SearchConfig::default());

    search.search("paris", 10).await;
    search.invalidate_cache().await;
    search.search("paris", 10).await;

    assert_eq!(search.provider().call_count(), 2);
}

#[test]
fn rank_and_dedupe_is_pure() {
    let input = paris_fixture();
    let out = rank_and_dedupe(input.clone(), "paris", 10);

    assert_eq!(ids(&out), vec![1, 2, 4, 5]);
    assert_eq!(input, paris_fixture());
}

#[tokio::test]
async fn remote_500_yields_empty_results() {
    use axum::{Router, http::StatusCode, routing::get};

    let router = Router::new().route(
        "/searchJSON",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream down") }),
    );
    let base = serve(router).await;
    let client = GeoNamesClient::new(GeoNamesConfig::new("demo").with_base_url(base)).unwrap();
    let search = CitySearch::new(client, SearchConfig::default());

    assert!(search.search("paris", 10).await.is_empty());
    assert_eq!(search.cache_entry_count().await, 0);
}
