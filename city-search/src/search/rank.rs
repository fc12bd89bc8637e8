//! City ranking and deduplication for search results.
//!
//! Ranks geocoding candidates so the place a user most likely meant comes
//! first, then collapses entries that name the same place twice.

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::domain::CityRecord;

use super::capitals::is_capital_name;
use super::normalize::normalize;

/// Sort key for a single candidate. Smaller sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct RankKey {
    capital: Reverse<bool>,
    exact: Reverse<bool>,
    prefix: Reverse<bool>,
    population: Reverse<u64>,
}

impl RankKey {
    fn new(city: &CityRecord, normalized_query: &str) -> Self {
        let name = normalize(&city.name);
        Self {
            capital: Reverse(is_capital_name(&name)),
            exact: Reverse(name == normalized_query),
            prefix: Reverse(name.starts_with(normalized_query)),
            population: Reverse(city.population_or_zero()),
        }
    }
}

/// Rank cities by how well they answer `query`.
///
/// Cities are ranked by:
/// 1. Capital status (capitals first)
/// 2. Exact normalized name match
/// 3. Normalized name starting with the query
/// 4. Population (larger first, unknown counts as 0)
///
/// The sort is stable, so cities equal on every key keep their input order.
pub fn rank_cities(mut cities: Vec<CityRecord>, query: &str) -> Vec<CityRecord> {
    let normalized_query = normalize(query);
    cities.sort_by_cached_key(|city| RankKey::new(city, &normalized_query));
    cities
}

/// Key identifying "the same place" across geocoding results.
///
/// Combines the normalized name with the lower-cased country code. Names
/// with no Latin letters or digits normalize to nothing, so those fall back
/// to the trimmed, lower-cased raw name.
pub fn dedupe_key(city: &CityRecord) -> String {
    let name = normalize(&city.name);
    let name = if name.is_empty() {
        city.name.trim().to_lowercase()
    } else {
        name
    };
    format!("{}|{}", name, city.country_code.to_lowercase())
}

/// Remove cities that share a [`dedupe_key`] with an earlier city.
///
/// The first occurrence wins and relative order is preserved, so calling
/// this after [`rank_cities`] keeps the best-ranked entry of each group.
pub fn dedupe_cities(cities: Vec<CityRecord>) -> Vec<CityRecord> {
    if cities.len() <= 1 {
        return cities;
    }

    let mut seen = HashSet::with_capacity(cities.len());
    cities
        .into_iter()
        .filter(|city| seen.insert(dedupe_key(city)))
        .collect()
}
