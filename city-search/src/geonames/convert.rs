//! Conversion from GeoNames response types to domain types.

use tracing::trace;

use crate::domain::{CityRecord, CountryCode};

use super::error::GeoNamesError;
use super::types::{GeoNameDto, SearchResponse};

/// Convert a full search response into city records.
///
/// - A `status` object turns into [`GeoNamesError::Service`].
/// - A missing `geonames` array means zero results.
/// - Records that fail to decode or lack a required field are dropped.
/// - Records with a known population below `min_population` are dropped.
pub fn convert_response(
    response: SearchResponse,
    min_population: u64,
) -> Result<Vec<CityRecord>, GeoNamesError> {
    if let Some(status) = response.status {
        return Err(GeoNamesError::Service {
            message: status.message,
        });
    }

    let records = response.geonames.unwrap_or_default();

    Ok(records
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<GeoNameDto>(value) {
            Ok(dto) => convert_record(dto),
            Err(e) => {
                trace!(error = %e, "dropping undecodable geonames record");
                None
            }
        })
        .filter(|city| meets_population_floor(city, min_population))
        .collect())
}

/// Convert one record, returning `None` if a required field is missing.
///
/// Required: id, name, a valid country code, and both coordinates within
/// ±90° latitude and ±180° longitude.
pub fn convert_record(dto: GeoNameDto) -> Option<CityRecord> {
    let id = dto.geoname_id?;
    let name = dto.name.filter(|n| !n.trim().is_empty())?;
    let country_code = dto
        .country_code
        .as_deref()
        .and_then(|cc| CountryCode::parse_normalized(cc).ok())?;
    let latitude = dto
        .lat
        .as_ref()
        .and_then(|c| c.value())
        .filter(|lat| (-90.0..=90.0).contains(lat))?;
    let longitude = dto
        .lng
        .as_ref()
        .and_then(|c| c.value())
        .filter(|lng| (-180.0..=180.0).contains(lng))?;

    Some(CityRecord {
        id,
        name,
        country_name: dto.country_name.unwrap_or_default(),
        country_code,
        admin_region: dto.admin_name1.filter(|a| !a.is_empty()),
        latitude,
        longitude,
        population: dto.population,
    })
}

/// Unknown population passes; the floor only applies to known values.
fn meets_population_floor(city: &CityRecord, min_population: u64) -> bool {
    city.population.is_none_or(|p| p >= min_population)
}
