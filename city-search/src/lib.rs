//! City search library.
//!
//! Turns free-text place names into a short, ranked list of cities:
//! candidates from the GeoNames search API are ranked (capitals, exact
//! matches, prefix matches, population), deduplicated by (name, country),
//! truncated, and memoized for a while.

pub mod cache;
pub mod debounce;
pub mod domain;
pub mod flags;
pub mod geonames;
pub mod search;
pub mod web;

#[cfg(test)]
mod test_support;
