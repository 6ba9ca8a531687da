//! # Parsed Telephone Number
//!
//! The digit groups of a number after parsing. Every group holds ASCII
//! digits only; formatting is reapplied by [`format_phone_number`].
//!
//! [`format_phone_number`]: crate::format_phone_number

use serde::{Deserialize, Serialize};

/// A telephone number split into its digit groups.
///
/// Concatenating the groups in order reconstructs the canonical digit
/// string returned by [`PhoneNumber::e164`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber {
    /// International calling code, without `+` (`"49"`).
    pub country_calling_code: String,
    /// Area code without the national trunk prefix; absent in closed
    /// numbering plans.
    pub area_code: Option<String>,
    /// Subscriber number.
    pub subscriber_number: String,
    /// Extension (direct-dial suffix), if any.
    pub extension: Option<String>,
}

impl PhoneNumber {
    /// Assemble a number from its groups.
    pub fn new(
        country_calling_code: impl Into<String>,
        area_code: Option<&str>,
        subscriber_number: impl Into<String>,
        extension: Option<&str>,
    ) -> Self {
        Self {
            country_calling_code: country_calling_code.into(),
            area_code: area_code.map(str::to_string),
            subscriber_number: subscriber_number.into(),
            extension: extension.map(str::to_string),
        }
    }

    /// Area code and subscriber number, as dialled after the trunk prefix.
    pub fn national_number(&self) -> String {
        let mut out = self.area_code.clone().unwrap_or_default();
        out.push_str(&self.subscriber_number);
        out
    }

    /// `+<cc><area><subscriber><extension>`, the normalized form.
    pub fn e164(&self) -> String {
        let mut out = String::with_capacity(16);
        out.push('+');
        out.push_str(&self.country_calling_code);
        out.push_str(&self.national_number());
        if let Some(ext) = &self.extension {
            out.push_str(ext);
        }
        out
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::format_phone_number(
            self,
            crate::PhoneFormatStyle::E123International,
        ))
    }
}
