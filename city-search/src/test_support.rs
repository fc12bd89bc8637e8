//! Shared helpers for unit tests.

use axum::Router;

use crate::domain::{CityRecord, CountryCode};

/// Serve `router` on an ephemeral loopback port, returning its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Build a city with the fields ranking cares about.
pub fn city(id: u64, name: &str, country: &str, cc: &str, population: u64) -> CityRecord {
    CityRecord::new(id, name, country, CountryCode::parse(cc).unwrap(), 0.0, 0.0)
        .with_population(population)
}
