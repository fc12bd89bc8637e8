//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::CityRecord;
use crate::flags::flag_url;
use crate::search::is_capital;

/// Request to search for cities.
#[derive(Debug, Deserialize)]
pub struct CitySearchRequest {
    /// Free-text query
    #[serde(default)]
    pub q: String,

    /// Maximum number of results (defaults to 10, capped at 50)
    pub limit: Option<usize>,
}

/// Response for city search.
#[derive(Debug, Serialize)]
pub struct CitySearchResponse {
    /// Matching cities, best first
    pub cities: Vec<CityResult>,
}

/// A city in search results.
#[derive(Debug, Serialize)]
pub struct CityResult {
    /// GeoNames identifier
    pub id: u64,

    /// City name
    pub name: String,

    /// Country name (may be empty)
    pub country_name: String,

    /// ISO 3166-1 alpha-2 code
    pub country_code: String,

    /// State / region / prefecture
    pub admin_region: Option<String>,

    pub latitude: f64,
    pub longitude: f64,

    /// Population, if known
    pub population: Option<u64>,

    /// Whether the name matches a well-known capital
    pub capital: bool,

    /// Flag image URL for display
    pub flag_url: String,
}

impl CityResult {
    /// Build a result from a domain record.
    pub fn from_city(city: &CityRecord) -> Self {
        Self {
            id: city.id,
            name: city.name.clone(),
            country_name: city.country_name.clone(),
            country_code: city.country_code.to_string(),
            admin_region: city.admin_region.clone(),
            latitude: city.latitude,
            longitude: city.longitude,
            population: city.population,
            capital: is_capital(city),
            flag_url: flag_url(&city.country_code),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
