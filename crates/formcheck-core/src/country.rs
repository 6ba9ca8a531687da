//! # Country Codes
//!
//! ISO 3166-1 alpha-2 country code newtype. Validated at construction to
//! be exactly two ASCII letters and stored upper-cased.
//!
//! A well-formed code is not necessarily a *known* one: whether a country
//! has an IBAN length, a VAT scheme or a numbering plan is a question for
//! the rule tables, and an unknown code simply finds no rule there.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// ISO 3166-1 alpha-2 country code, e.g. `DE`.
///
/// # Validation
///
/// - Surrounding whitespace is trimmed
/// - Must be exactly 2 ASCII letters
/// - Stored in upper case (`de` becomes `DE`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCountryCode`] if the value is not
    /// two ASCII letters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = value.as_ref();
        let trimmed = raw.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCountryCode(raw.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Read the country prefix of an identifier (its first two characters)
    /// if they form a well-formed code.
    pub fn from_prefix(value: &str) -> Option<Self> {
        value.get(..2).and_then(|prefix| Self::new(prefix).ok())
    }

    /// Access the upper-case code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl PartialEq<str> for CountryCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CountryCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_uppercases() {
        let cc = CountryCode::new("de").unwrap();
        assert_eq!(cc.as_str(), "DE");
        assert_eq!(cc, "DE");
    }

    #[test]
    fn country_code_trims() {
        assert_eq!(CountryCode::new(" at ").unwrap().as_str(), "AT");
    }

    #[test]
    fn country_code_rejects_invalid() {
        assert!(CountryCode::new("").is_err());
        assert!(CountryCode::new("D").is_err());
        assert!(CountryCode::new("DEU").is_err());
        assert!(CountryCode::new("D1").is_err());
        assert!(CountryCode::new("Ü1").is_err());
    }

    #[test]
    fn country_code_from_prefix() {
        assert_eq!(
            CountryCode::from_prefix("DE89370400440532013000").unwrap(),
            "DE"
        );
        assert!(CountryCode::from_prefix("1234").is_none());
        assert!(CountryCode::from_prefix("D").is_none());
    }

    #[test]
    fn country_code_serde_roundtrip() {
        let cc: CountryCode = serde_json::from_str("\"pl\"").unwrap();
        assert_eq!(cc.as_str(), "PL");
        assert_eq!(serde_json::to_string(&cc).unwrap(), "\"PL\"");
        assert!(serde_json::from_str::<CountryCode>("\"POL\"").is_err());
    }
}
