#![deny(missing_docs)]

//! # formcheck-ident — Identifier Validators
//!
//! One entry point, [`validate`], decides whether a raw string is a valid
//! identifier of a given [`IdentifierKind`] and returns its normalized
//! form. Every family has its own module with a `check_*` function
//! returning `Result<String, ReasonCode>`; the dispatcher turns that into
//! a [`Verdict`].
//!
//! ## Check Order
//!
//! Each family checks alphabet, then length, then structure, then check
//! digits. The first failure decides the [`ReasonCode`], so a value with
//! the wrong length never reaches its checksum.
//!
//! ## Blank Input
//!
//! Empty and whitespace-only input is `Valid("")` for every kind and
//! country. Whether a value must be present is decided elsewhere.
//!
//! ## Logging
//!
//! Rejections are logged at `debug` with the kind and reason code only.
//! Raw values are never logged.

pub mod bank_country;
pub mod card;
pub mod checksum;
pub mod gtin;
pub mod iban;
pub mod isbn;
pub mod isin;
pub mod national;
pub mod postal;
pub mod vat;

use formcheck_core::{is_blank, CountryCode, IdentifierKind, ReasonCode, Verdict};
use formcheck_tables::CountryTables;

pub use bank_country::{check_bank_country, validate_bank_country};

/// Validate `raw` as an identifier of `kind` against the process-wide
/// country tables.
///
/// `country` is required for [`IdentifierKind::PostalCode`], serves as the
/// default country for [`IdentifierKind::PhoneNumber`], and is
/// cross-checked against the embedded country of IBANs, BICs and VAT IDs.
/// Other kinds ignore it.
pub fn validate(kind: IdentifierKind, raw: &str, country: Option<&CountryCode>) -> Verdict {
    validate_with(formcheck_tables::tables(), kind, raw, country)
}

/// [`validate`] against explicit tables.
pub fn validate_with(
    tables: &CountryTables,
    kind: IdentifierKind,
    raw: &str,
    country: Option<&CountryCode>,
) -> Verdict {
    if is_blank(raw) {
        return Verdict::blank();
    }
    let result = check(tables, kind, raw, country);
    if let Err(reason) = &result {
        tracing::debug!(
            kind = %kind,
            country = country.map(CountryCode::as_str),
            reason = %reason,
            "identifier rejected"
        );
    }
    result.into()
}

fn check(
    tables: &CountryTables,
    kind: IdentifierKind,
    raw: &str,
    country: Option<&CountryCode>,
) -> Result<String, ReasonCode> {
    match kind {
        IdentifierKind::Iban => iban::check_iban(tables, raw, country),
        IdentifierKind::Bic => iban::check_bic(tables, raw, country),
        IdentifierKind::Isbn10 => isbn::check_isbn10(raw),
        IdentifierKind::Isbn13 => isbn::check_isbn13(raw),
        IdentifierKind::Isbn => isbn::check_isbn(raw),
        IdentifierKind::Issn => isbn::check_issn(raw),
        IdentifierKind::Gtin8 => gtin::check_gtin(raw, &[8]),
        IdentifierKind::Gtin13 => gtin::check_gtin(raw, &[13]),
        IdentifierKind::Gtin => gtin::check_gtin(raw, &[8, 13]),
        IdentifierKind::Isin => isin::check_isin(raw),
        IdentifierKind::CreditCard => card::check_card(raw),
        IdentifierKind::VatId => vat::check_vat(tables, raw, country),
        IdentifierKind::PostalCode => postal::check_postal_code(tables, raw, country),
        IdentifierKind::PhoneNumber => {
            formcheck_phone::parse_phone_number(raw, country).map(|number| number.e164())
        }
        IdentifierKind::NationalId(variant) => national::check_national_id(variant, raw),
    }
}
