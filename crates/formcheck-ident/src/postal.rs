//! Postal codes, matched against the country's anchored pattern.
//!
//! Unlike other identifiers the separators are part of the layout
//! (`1012 AB`, `94105-1804`), so the value is only trimmed and upper-cased.

use formcheck_core::{CountryCode, ReasonCode};
use formcheck_tables::CountryTables;

/// Validate a postal code for `country`.
pub fn check_postal_code(
    tables: &CountryTables,
    raw: &str,
    country: Option<&CountryCode>,
) -> Result<String, ReasonCode> {
    let country = country.ok_or(ReasonCode::BadCountry)?;
    let pattern = tables
        .postal_pattern(country.as_str())
        .ok_or(ReasonCode::BadCountry)?;
    let value = raw.trim().to_ascii_uppercase();
    if !pattern.is_match(&value) {
        return Err(ReasonCode::BadFormat);
    }
    Ok(value)
}
