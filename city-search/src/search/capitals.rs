//! Capital-city heuristic.
//!
//! Membership is decided purely by normalized name. There is no
//! country → capital crosswalk, so a non-capital city sharing a capital's
//! name (Paris, Texas) is classified as a capital too.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::domain::CityRecord;

use super::normalize::normalize;

/// Well-known national capitals, already in normalized form.
const CAPITAL_NAMES: &[&str] = &[
    "abu dhabi",
    "accra",
    "addis ababa",
    "algiers",
    "amsterdam",
    "ankara",
    "athens",
    "baghdad",
    "bangkok",
    "beijing",
    "beirut",
    "belgrade",
    "berlin",
    "bern",
    "bogota",
    "brasilia",
    "bratislava",
    "brussels",
    "bucharest",
    "budapest",
    "buenos aires",
    "cairo",
    "canberra",
    "caracas",
    "copenhagen",
    "dakar",
    "damascus",
    "dhaka",
    "doha",
    "dublin",
    "hanoi",
    "havana",
    "helsinki",
    "islamabad",
    "jakarta",
    "kabul",
    "kathmandu",
    "kyiv",
    "kiev",
    "kuala lumpur",
    "lima",
    "lisbon",
    "ljubljana",
    "london",
    "luxembourg",
    "madrid",
    "manila",
    "mexico city",
    "montevideo",
    "moscow",
    "nairobi",
    "new delhi",
    "oslo",
    "ottawa",
    "paris",
    "prague",
    "quito",
    "rabat",
    "reykjavik",
    "riga",
    "riyadh",
    "rome",
    "santiago",
    "seoul",
    "singapore",
    "sofia",
    "stockholm",
    "taipei",
    "tallinn",
    "tehran",
    "tokyo",
    "tunis",
    "vienna",
    "vilnius",
    "warsaw",
    "washington",
    "wellington",
    "zagreb",
];

static CAPITALS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CAPITAL_NAMES.iter().copied().collect());

/// Whether an already-normalized name is on the capital list.
pub fn is_capital_name(normalized_name: &str) -> bool {
    CAPITALS.contains(normalized_name)
}

/// Whether a city's name matches a well-known capital.
pub fn is_capital(city: &CityRecord) -> bool {
    is_capital_name(&normalize(&city.name))
}
