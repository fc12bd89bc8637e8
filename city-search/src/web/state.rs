//! Application state for the web layer.

use std::sync::Arc;

use crate::geonames::GeoNamesClient;
use crate::search::CitySearch;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached city search over GeoNames
    pub search: Arc<CitySearch<GeoNamesClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(search: CitySearch<GeoNamesClient>) -> Self {
        Self {
            search: Arc::new(search),
        }
    }
}
