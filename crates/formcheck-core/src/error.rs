//! # Error Hierarchy
//!
//! Structured error types for formcheck, built with `thiserror`.
//!
//! These errors describe *construction and configuration* failures: a
//! country code with the wrong shape, an unknown identifier kind name, a
//! rule table that fails its load-time checks. Malformed user input is
//! never an error; it is a [`Verdict::Invalid`](crate::Verdict::Invalid).

use thiserror::Error;

/// Top-level error type for formcheck.
#[derive(Error, Debug)]
pub enum FormcheckError {
    /// Domain primitive construction failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A country rule table failed its load-time consistency checks.
    #[error("rule table error: {0}")]
    Table(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised when constructing formcheck value objects from text.
///
/// Each variant carries the rejected input so configuration mistakes can
/// be diagnosed without guesswork.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Country code is not two ASCII letters.
    #[error("invalid country code: \"{0}\" (expected ISO 3166-1 alpha-2, e.g. DE)")]
    InvalidCountryCode(String),

    /// Identifier kind name is not in the catalogue.
    #[error("unknown identifier kind: \"{0}\"")]
    UnknownIdentifierKind(String),

    /// Reason code name is not in the closed set.
    #[error("unknown reason code: \"{0}\"")]
    UnknownReasonCode(String),

    /// Phone format style name is not recognised.
    #[error("unknown phone format style: \"{0}\"")]
    UnknownPhoneFormatStyle(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formcheck_error_validation_display() {
        let inner = ValidationError::InvalidCountryCode("D1".to_string());
        let err = FormcheckError::Validation(inner);
        let msg = format!("{err}");
        assert!(msg.contains("validation error"));
        assert!(msg.contains("D1"));
    }

    #[test]
    fn formcheck_error_table_display() {
        let err = FormcheckError::Table("duplicate IBAN entry DE".to_string());
        assert!(format!("{err}").contains("duplicate IBAN entry DE"));
    }

    #[test]
    fn formcheck_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "rules.yaml");
        let err: FormcheckError = io.into();
        assert!(matches!(err, FormcheckError::Io(_)));
    }

    #[test]
    fn validation_error_unknown_kind() {
        let err = ValidationError::UnknownIdentifierKind("isbn11".to_string());
        assert!(format!("{err}").contains("isbn11"));
    }

    #[test]
    fn validation_error_unknown_style() {
        let err = ValidationError::UnknownPhoneFormatStyle("fancy".to_string());
        assert!(format!("{err}").contains("fancy"));
    }
}
