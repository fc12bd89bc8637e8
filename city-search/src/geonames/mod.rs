//! GeoNames city search client.
//!
//! Fetches populated-place candidates from the GeoNames `searchJSON`
//! endpoint and converts them into [`CityRecord`](crate::domain::CityRecord)s.
//!
//! Key characteristics of the upstream API:
//! - Results are requested ordered by population, largest first
//! - `lat`/`lng` are usually JSON strings, `population` a number
//! - Account and quota problems come back as HTTP 200 with a `status` object

mod client;
mod convert;
mod error;
mod types;

pub use client::{CityProvider, GeoNamesClient, GeoNamesConfig};
pub use convert::convert_response;
pub use error::GeoNamesError;
pub use types::{Coordinate, GeoNameDto, SearchResponse, ServiceStatus};
