//! Core domain types.
//!
//! These types represent places as the search layer sees them, independent
//! of the wire format of any particular geocoding source.

mod city;
mod country;

pub use city::CityRecord;
pub use country::{CountryCode, InvalidCountryCode};
