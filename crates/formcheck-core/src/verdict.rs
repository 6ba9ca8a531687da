//! # Verdicts and Reason Codes
//!
//! Every validation in formcheck resolves to a [`Verdict`]: either the input
//! is valid (and carries its normalized form) or it is invalid for exactly
//! one [`ReasonCode`].
//!
//! ## Stability Invariant
//!
//! Reason codes are matched on by hosts that map them to localized
//! messages. New codes may be appended; existing codes are never renamed
//! or repurposed. The serialized names (`bad_length`, …) are part of that
//! contract.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Why an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// The input has the wrong number of significant characters.
    BadLength,
    /// The input contains characters outside the kind's alphabet, or its
    /// structure does not match the expected layout.
    BadFormat,
    /// Alphabet, length and structure are fine but the check digits disagree.
    BadChecksum,
    /// The country is unknown, missing, or has no rule for this kind.
    BadCountry,
    /// Two country indications on the same record disagree.
    CountryMismatch,
}

impl ReasonCode {
    /// All reason codes in declaration order.
    pub fn all() -> &'static [ReasonCode] {
        &[
            Self::BadLength,
            Self::BadFormat,
            Self::BadChecksum,
            Self::BadCountry,
            Self::CountryMismatch,
        ]
    }

    /// The canonical snake_case name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadLength => "bad_length",
            Self::BadFormat => "bad_format",
            Self::BadChecksum => "bad_checksum",
            Self::BadCountry => "bad_country",
            Self::CountryMismatch => "country_mismatch",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReasonCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownReasonCode(s.to_string()))
    }
}

/// Outcome of validating one value.
///
/// `Valid` carries the normalized value (the compact canonical form for
/// identifiers, E.164 for phone numbers, the field's text for cross-field
/// rules). Blank input validates to `Valid("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "verdict", content = "value", rename_all = "snake_case")]
pub enum Verdict {
    /// The input is acceptable; the payload is its normalized form.
    Valid(String),
    /// The input is rejected for the given reason.
    Invalid(ReasonCode),
}

impl Verdict {
    /// A valid verdict carrying `normalized`.
    pub fn valid(normalized: impl Into<String>) -> Self {
        Self::Valid(normalized.into())
    }

    /// The verdict for absent or blank input.
    pub fn blank() -> Self {
        Self::Valid(String::new())
    }

    /// Whether the verdict accepts the input.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The rejection reason, if invalid.
    pub fn reason(&self) -> Option<ReasonCode> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(reason) => Some(*reason),
        }
    }

    /// The normalized value, if valid.
    pub fn normalized(&self) -> Option<&str> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Convert into a `Result` so verdicts compose with `?`.
    pub fn into_result(self) -> Result<String, ReasonCode> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(reason) => Err(reason),
        }
    }
}

impl From<Result<String, ReasonCode>> for Verdict {
    fn from(result: Result<String, ReasonCode>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(reason) => Self::Invalid(reason),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid(value) if value.is_empty() => write!(f, "VALID"),
            Self::Valid(value) => write!(f, "VALID ({value})"),
            Self::Invalid(reason) => write!(f, "INVALID ({reason})"),
        }
    }
}
