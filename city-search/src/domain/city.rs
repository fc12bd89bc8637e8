//! City records as returned by a geocoding source.

use super::CountryCode;

/// A single populated place.
///
/// Built once from a backend response and never mutated afterwards; the
/// ranking and deduplication passes move or clone whole records.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    /// Identifier assigned by the geocoding source.
    pub id: u64,
    pub name: String,
    /// Human-readable country name. May be empty if the source omitted it.
    pub country_name: String,
    pub country_code: CountryCode,
    /// First-level administrative division (state, region, prefecture).
    pub admin_region: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Population, if the source knows it.
    pub population: Option<u64>,
}

impl CityRecord {
    /// Create a record with the required fields; population and admin
    /// region start out unknown.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        country_name: impl Into<String>,
        country_code: CountryCode,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            country_name: country_name.into(),
            country_code,
            admin_region: None,
            latitude,
            longitude,
            population: None,
        }
    }

    /// Set the population.
    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    /// Set the first-level administrative region.
    pub fn with_admin_region(mut self, region: impl Into<String>) -> Self {
        self.admin_region = Some(region.into());
        self
    }

    /// Population for ordering purposes; unknown counts as 0.
    pub fn population_or_zero(&self) -> u64 {
        self.population.unwrap_or(0)
    }
}
