//! # Table Load Errors
//!
//! Raised when a built-in table fails its load-time consistency checks.
//! These are programmer errors in the tables, never caused by user input.

use formcheck_core::FormcheckError;
use thiserror::Error;

/// A country rule table failed a consistency check.
#[derive(Error, Debug)]
pub enum TableError {
    /// The same key appears twice in one table.
    #[error("duplicate entry \"{key}\" in {table} table")]
    DuplicateEntry {
        /// Table name.
        table: &'static str,
        /// Repeated key.
        key: String,
    },

    /// A country key is not two upper-case ASCII letters.
    #[error("malformed country code \"{key}\" in {table} table")]
    MalformedCountry {
        /// Table name.
        table: &'static str,
        /// Offending key.
        key: String,
    },

    /// A length or length range is out of bounds.
    #[error("invalid length for \"{key}\" in {table} table: {reason}")]
    InvalidLength {
        /// Table name.
        table: &'static str,
        /// Offending key.
        key: String,
        /// What is wrong.
        reason: String,
    },

    /// A regular expression failed to compile.
    #[error("invalid pattern for \"{key}\" in {table} table: {source}")]
    InvalidPattern {
        /// Table name.
        table: &'static str,
        /// Offending key.
        key: String,
        /// Compiler error.
        #[source]
        source: regex::Error,
    },

    /// A weighted VAT scheme does not fit its body layout.
    #[error("invalid weights for VAT prefix \"{key}\": {reason}")]
    InvalidWeights {
        /// VAT prefix.
        key: String,
        /// What is wrong.
        reason: String,
    },

    /// A calling code is not 1–3 digits.
    #[error("invalid calling code \"{code}\" for {country}")]
    InvalidCallingCode {
        /// Plan country.
        country: String,
        /// Offending calling code.
        code: String,
    },
}

impl From<TableError> for FormcheckError {
    fn from(err: TableError) -> Self {
        FormcheckError::Table(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_entry_display() {
        let err = TableError::DuplicateEntry {
            table: "IBAN",
            key: "DE".to_string(),
        };
        assert_eq!(format!("{err}"), "duplicate entry \"DE\" in IBAN table");
    }

    #[test]
    fn converts_into_formcheck_error() {
        let err: FormcheckError = TableError::InvalidWeights {
            key: "PL".to_string(),
            reason: "empty".to_string(),
        }
        .into();
        assert!(matches!(err, FormcheckError::Table(ref m) if m.contains("PL")));
    }
}
