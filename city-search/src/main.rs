use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use city_search::geonames::{GeoNamesClient, GeoNamesConfig};
use city_search::search::{CitySearch, SearchConfig};
use city_search::web::{AppState, create_router};

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Get credentials from environment
    let username = std::env::var("GEONAMES_USERNAME").unwrap_or_else(|_| {
        warn!("GEONAMES_USERNAME not set. Searches will return no results.");
        String::new()
    });

    let mut geonames_config = GeoNamesConfig::new(username);
    if let Ok(base_url) = std::env::var("GEONAMES_BASE_URL") {
        geonames_config = geonames_config.with_base_url(base_url);
    }

    let client = GeoNamesClient::new(geonames_config).expect("Failed to create GeoNames client");
    let search = CitySearch::new(client, SearchConfig::default());

    // Build app state
    let state = AppState::new(search);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr: SocketAddr = std::env::var("CITY_SEARCH_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .expect("CITY_SEARCH_ADDR must be a socket address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    info!("City search listening on http://{addr}");
    info!("  GET  /health");
    info!("  GET  /api/cities/search?q=<text>&limit=<n>");

    axum::serve(listener, app).await.expect("Server error");
}
