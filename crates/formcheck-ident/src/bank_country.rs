//! # BankCountry Cross-Check
//!
//! Record-level check that a declared country agrees with the countries
//! embedded in the record's IBAN and BIC. Territory BIC codes (`GP`, `JE`,
//! …) compare equal to the country whose IBAN they use.
//!
//! Whether the IBAN or BIC is itself well-formed is not this check's
//! concern: an embedded country is compared only when it is readable, and
//! every other case is `Valid`.

use formcheck_core::{compact, is_blank, CountryCode, ReasonCode, Verdict, COMMON_SEPARATORS};
use formcheck_tables::CountryTables;

fn iban_country(iban: &str) -> Option<CountryCode> {
    CountryCode::from_prefix(&compact(iban, COMMON_SEPARATORS))
}

/// Letters 5–6 of a BIC.
fn bic_country(bic: &str) -> Option<CountryCode> {
    compact(bic, &[])
        .get(4..6)
        .and_then(|cc| CountryCode::new(cc).ok())
}

/// Compare `country` against the IBAN and BIC countries using `tables`.
pub fn check_bank_country(
    tables: &CountryTables,
    country: &str,
    iban: Option<&str>,
    bic: Option<&str>,
) -> Verdict {
    if is_blank(country) {
        return Verdict::blank();
    }
    let declared = country.trim().to_ascii_uppercase();
    let expected = tables.bank_country(&declared);

    let embedded = [
        ("iban", iban.and_then(iban_country)),
        ("bic", bic.and_then(bic_country)),
    ];
    for (source, found) in embedded {
        let Some(found) = found else { continue };
        if tables.bank_country(found.as_str()) != expected {
            tracing::debug!(
                country = %declared,
                source,
                embedded = %found,
                "bank country mismatch"
            );
            return Verdict::Invalid(ReasonCode::CountryMismatch);
        }
    }
    Verdict::Valid(declared)
}

/// [`check_bank_country`] against the process-wide tables.
pub fn validate_bank_country(country: &str, iban: Option<&str>, bic: Option<&str>) -> Verdict {
    check_bank_country(formcheck_tables::tables(), country, iban, bic)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DE_IBAN: &str = "DE16701600000000555444";

    #[test]
    fn declared_country_must_match_iban() {
        assert_eq!(
            validate_bank_country("AT", Some(DE_IBAN), None),
            Verdict::Invalid(ReasonCode::CountryMismatch)
        );
        assert_eq!(validate_bank_country("de", Some(DE_IBAN), None), Verdict::valid("DE"));
    }

    #[test]
    fn declared_country_must_match_bic() {
        assert_eq!(
            validate_bank_country("AT", None, Some("DEUTDEFF")),
            Verdict::Invalid(ReasonCode::CountryMismatch)
        );
        assert!(validate_bank_country("DE", Some(DE_IBAN), Some("DEUTDEFF500")).is_valid());
    }

    #[test]
    fn territories_match_their_parent() {
        assert!(validate_bank_country("GP", Some("FR1420041010050500013M02606"), None).is_valid());
        assert!(validate_bank_country("FR", None, Some("BNPAGPGP")).is_valid());
        assert!(validate_bank_country("JE", Some("GB82WEST12345698765432"), Some("HBUKJESH")).is_valid());
    }

    #[test]
    fn blank_country_is_valid() {
        assert_eq!(validate_bank_country("  ", Some(DE_IBAN), None), Verdict::blank());
    }

    #[test]
    fn unreadable_embedded_countries_are_ignored() {
        assert!(validate_bank_country("AT", Some("12"), Some("DEU")).is_valid());
        assert!(validate_bank_country("AT", Some(""), None).is_valid());
        assert!(validate_bank_country("AT", None, None).is_valid());
    }
}
