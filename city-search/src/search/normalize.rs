//! String folding for name comparison.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a string into a form suitable for equality and prefix comparison.
///
/// Steps:
/// 1. Unicode canonical decomposition (NFD), dropping combining marks
/// 2. Lower-casing
/// 3. Dropping everything outside `[a-z0-9 ]`
/// 4. Trimming surrounding spaces
///
/// ```
/// use city_search::search::normalize;
///
/// assert_eq!(normalize("São Paulo"), "sao paulo");
/// assert_eq!(normalize("  Zürich! "), "zurich");
/// assert_eq!(normalize("Saint-Étienne"), "saintetienne");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(s: &str) -> String {
    let folded: String = s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();

    folded.trim().to_string()
}
