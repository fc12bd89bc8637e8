//! GeoNames API response types.
//!
//! These match the JSON returned by `searchJSON`. Every field is optional so
//! that one sloppy record can be dropped without failing the whole batch.

use serde::Deserialize;

/// Top-level response from `searchJSON`.
///
/// Records are kept as raw JSON values and decoded one at a time, because a
/// single record with a wrongly-typed field must not poison its neighbours.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub geonames: Option<Vec<serde_json::Value>>,

    /// Present only when the service reports an error.
    #[serde(default)]
    pub status: Option<ServiceStatus>,

    #[serde(rename = "totalResultsCount", default)]
    pub total_results_count: Option<u64>,
}

/// Error object GeoNames embeds in otherwise-successful responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceStatus {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub value: Option<i64>,
}

/// A single place as returned by GeoNames.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoNameDto {
    pub geoname_id: Option<u64>,
    pub name: Option<String>,
    pub country_name: Option<String>,
    pub country_code: Option<String>,
    pub admin_name1: Option<String>,
    pub lat: Option<Coordinate>,
    pub lng: Option<Coordinate>,
    pub population: Option<u64>,
}

/// A coordinate that may be encoded as a JSON string or number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    /// Numeric value, if the text form parses to a finite number.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Coordinate::Number(n) => Some(*n),
            Coordinate::Text(s) => s.trim().parse().ok(),
        };
        value.filter(|v| v.is_finite())
    }
}
