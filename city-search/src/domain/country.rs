//! Country code types.

use std::fmt;

/// Error returned when parsing an invalid country code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid country code: {reason}")]
pub struct InvalidCountryCode {
    reason: &'static str,
}

/// A valid ISO 3166-1 alpha-2 country code.
///
/// Country codes are always 2 uppercase ASCII letters. This type guarantees
/// that any `CountryCode` value is well-formed by construction; it does not
/// check that the code is actually assigned.
///
/// # Examples
///
/// ```
/// use city_search::domain::CountryCode;
///
/// let fr = CountryCode::parse("FR").unwrap();
/// assert_eq!(fr.as_str(), "FR");
/// assert_eq!(fr.to_lowercase(), "fr");
///
/// // Lowercase is rejected by the strict parser
/// assert!(CountryCode::parse("fr").is_err());
/// assert!(CountryCode::parse_normalized(" fr ").is_ok());
///
/// // Wrong length is rejected
/// assert!(CountryCode::parse("F").is_err());
/// assert!(CountryCode::parse("FRA").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Parse a country code from a string.
    ///
    /// The input must be exactly 2 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidCountryCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidCountryCode {
                reason: "must be exactly 2 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidCountryCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(CountryCode([bytes[0], bytes[1]]))
    }

    /// Parse a country code, trimming whitespace and upper-casing first.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCountryCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the country code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }

    /// Returns the lower-cased code, as used in flag CDN paths.
    pub fn to_lowercase(&self) -> String {
        self.as_str().to_ascii_lowercase()
    }
}

impl fmt::Debug for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryCode({})", self.as_str())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(CountryCode::parse("FR").is_ok());
        assert!(CountryCode::parse("US").is_ok());
        assert!(CountryCode::parse("JP").is_ok());
        assert!(CountryCode::parse("AA").is_ok());
        assert!(CountryCode::parse("ZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(CountryCode::parse("fr").is_err());
        assert!(CountryCode::parse("Fr").is_err());
        assert!(CountryCode::parse("fR").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(CountryCode::parse("").is_err());
        assert!(CountryCode::parse("F").is_err());
        assert!(CountryCode::parse("FRA").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(CountryCode::parse("F1").is_err());
        assert!(CountryCode::parse("F-").is_err());
        assert!(CountryCode::parse("F ").is_err());
        assert!(CountryCode::parse("FÖ").is_err());
    }

    #[test]
    fn parse_normalized_accepts_lowercase_and_padding() {
        let code = CountryCode::parse_normalized("  us ").unwrap();
        assert_eq!(code.as_str(), "US");
        assert!(CountryCode::parse_normalized("usa").is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = CountryCode::parse("DE").unwrap();
        assert_eq!(format!("{}", code), "DE");
        assert_eq!(format!("{:?}", code), "CountryCode(DE)");
    }

    #[test]
    fn lowercase_for_paths() {
        let code = CountryCode::parse("GB").unwrap();
        assert_eq!(code.to_lowercase(), "gb");
    }
}
