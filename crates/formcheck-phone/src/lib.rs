#![deny(missing_docs)]

//! # formcheck-phone — Telephone Number Engine
//!
//! Parses free-form telephone numbers into their digit groups against the
//! numbering plans in `formcheck-tables`, and renders parsed numbers in
//! nine standard layouts.
//!
//! ## Parsing
//!
//! [`parse_phone_number`] runs a small state machine:
//!
//! 1. **Scan**: strip formatting, note `+`/`00`, dashes, a `(0)` group
//!    and any extension marker. Stray characters are `BadFormat`.
//! 2. **SplitCountryCode**: longest known calling code for international
//!    input, the default country's plan otherwise (trunk prefix removed).
//! 3. **SplitAreaCode**: by the plan's area-code rule.
//! 4. **AssignSubscriber**: the remaining digits, less a DIN 5008 dash
//!    extension; length checked against the plan.
//!
//! ## Rendering
//!
//! [`format_phone_number`] is a pure function of the number and a
//! [`PhoneFormatStyle`]. See the [`format`] module for the layouts.

pub mod format;
pub mod number;
mod parse;
mod scan;

use formcheck_core::{CountryCode, ReasonCode};

pub use format::PhoneFormatStyle;
pub use number::PhoneNumber;
pub use parse::E164_MAX_DIGITS;

/// Parse a raw telephone number.
///
/// International input (`+` or `00`) needs no default country. National
/// input is read against `default_country`'s numbering plan; without one
/// the result is `Err(BadCountry)`.
pub fn parse_phone_number(
    raw: &str,
    default_country: Option<&CountryCode>,
) -> Result<PhoneNumber, ReasonCode> {
    parse::parse(formcheck_tables::tables(), raw, default_country)
}

/// Render a number in one layout.
pub fn format_phone_number(number: &PhoneNumber, style: PhoneFormatStyle) -> String {
    format::render(number, style)
}

/// Render a number in every layout, in [`PhoneFormatStyle::all`] order.
pub fn format_all(number: &PhoneNumber) -> Vec<(PhoneFormatStyle, String)> {
    PhoneFormatStyle::all()
        .iter()
        .map(|style| (*style, format::render(number, *style)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_all_covers_every_style() {
        let n = PhoneNumber::new("49", Some("89"), "1234", None);
        let rendered = format_all(&n);
        assert_eq!(rendered.len(), PhoneFormatStyle::all().len());
        assert_eq!(rendered[1], (PhoneFormatStyle::E123International, "+49 89 1234".to_string()));
    }
}
