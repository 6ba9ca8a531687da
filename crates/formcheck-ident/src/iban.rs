//! # IBAN and BIC
//!
//! ## IBAN
//!
//! Checked in order: alphanumeric alphabet (`BadFormat`), country prefix in
//! the IBAN registry (`BadCountry`), registry length (`BadLength`), numeric
//! check digits at positions 3–4 (`BadFormat`), mod-97 remainder 1 after
//! moving the first four characters to the end (`BadChecksum`).
//!
//! ## BIC
//!
//! `BBBB CC LL [BBB]`: 8 or 11 characters (`BadLength`), four-letter bank
//! code, two-letter country, alphanumeric location and branch
//! (`BadFormat`), and a country known to the tables (`BadCountry`). BICs
//! carry no check digit. Only spaces are tolerated as separators.

use formcheck_core::{compact, CountryCode, ReasonCode, COMMON_SEPARATORS};
use formcheck_tables::CountryTables;

use crate::checksum::{alnum_value, mod97};

/// Validate an IBAN and return its compact form.
pub fn check_iban(
    tables: &CountryTables,
    raw: &str,
    country: Option<&CountryCode>,
) -> Result<String, ReasonCode> {
    let iban = compact(raw, COMMON_SEPARATORS);
    if !iban.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(ReasonCode::BadFormat);
    }
    let prefix = iban.get(..2).ok_or(ReasonCode::BadLength)?;
    let expected = tables.iban_length(prefix).ok_or(ReasonCode::BadCountry)?;
    if iban.len() != expected {
        return Err(ReasonCode::BadLength);
    }
    if !iban[2..4].bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReasonCode::BadFormat);
    }

    let rearranged = iban[4..].chars().chain(iban[..4].chars());
    let remainder = mod97(rearranged.filter_map(alnum_value));
    if remainder != 1 {
        return Err(ReasonCode::BadChecksum);
    }

    if let Some(country) = country {
        if tables.bank_country(country.as_str()) != prefix {
            return Err(ReasonCode::CountryMismatch);
        }
    }
    Ok(iban)
}

fn bic_layout_ok(bic: &[u8]) -> bool {
    bic[..6].iter().all(u8::is_ascii_uppercase)
        && bic[6..].iter().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Validate a BIC and return its compact form.
pub fn check_bic(
    tables: &CountryTables,
    raw: &str,
    country: Option<&CountryCode>,
) -> Result<String, ReasonCode> {
    let bic = compact(raw, &[]);
    if bic.len() != 8 && bic.len() != 11 {
        return Err(ReasonCode::BadLength);
    }
    if !bic_layout_ok(bic.as_bytes()) {
        return Err(ReasonCode::BadFormat);
    }
    let bic_country = &bic[4..6];
    if !tables.is_bic_country(bic_country) {
        return Err(ReasonCode::BadCountry);
    }
    if let Some(country) = country {
        if tables.bank_country(country.as_str()) != tables.bank_country(bic_country) {
            return Err(ReasonCode::CountryMismatch);
        }
    }
    Ok(bic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcheck_tables::tables;

    fn iban(raw: &str) -> Result<String, ReasonCode> {
        check_iban(tables(), raw, None)
    }

    fn bic(raw: &str) -> Result<String, ReasonCode> {
        check_bic(tables(), raw, None)
    }

    fn cc(code: &str) -> CountryCode {
        CountryCode::new(code).unwrap()
    }

    // -- IBAN --

    #[test]
    fn iban_valid_registry_samples() {
        for raw in [
            "DE89370400440532013000",
            "GB82WEST12345698765432",
            "AT611904300234573201",
            "NL91ABNA0417164300",
            "FR1420041010050500013M02606",
            "CH9300762011623852957",
            "BE68539007547034",
            "PL61109010140000071219812874",
        ] {
            assert_eq!(iban(raw).as_deref(), Ok(raw), "{raw}");
        }
    }

    #[test]
    fn iban_normalizes_print_format() {
        assert_eq!(
            iban("de16 7016 0000 0000 5554 44"),
            Ok("DE16701600000000555444".to_string())
        );
    }

    #[test]
    fn iban_reason_codes_in_order() {
        assert_eq!(iban("DE89_370400440532013000"), Err(ReasonCode::BadFormat));
        assert_eq!(iban("US89370400440532013000"), Err(ReasonCode::BadCountry));
        assert_eq!(iban("DE8937040044053201300"), Err(ReasonCode::BadLength));
        assert_eq!(iban("DEX9370400440532013000"), Err(ReasonCode::BadFormat));
        assert_eq!(iban("DE88370400440532013000"), Err(ReasonCode::BadChecksum));
        assert_eq!(iban("D"), Err(ReasonCode::BadLength));
    }

    #[test]
    fn iban_country_argument() {
        let de = "DE89370400440532013000";
        assert!(check_iban(tables(), de, Some(&cc("DE"))).is_ok());
        assert_eq!(
            check_iban(tables(), de, Some(&cc("AT"))),
            Err(ReasonCode::CountryMismatch)
        );
        let fr = "FR1420041010050500013M02606";
        assert!(check_iban(tables(), fr, Some(&cc("GP"))).is_ok());
    }

    // -- BIC --

    #[test]
    fn bic_valid_forms() {
        assert_eq!(bic("DEUTDEFF"), Ok("DEUTDEFF".to_string()));
        assert_eq!(bic("DEUTDEFF500"), Ok("DEUTDEFF500".to_string()));
        assert_eq!(bic(" bofa us 3n "), Ok("BOFAUS3N".to_string()));
    }

    #[test]
    fn bic_reason_codes() {
        assert_eq!(bic("DEUTDEF"), Err(ReasonCode::BadLength));
        assert_eq!(bic("DEUTDEFF5"), Err(ReasonCode::BadLength));
        assert_eq!(bic("DEU1DEFF"), Err(ReasonCode::BadFormat));
        assert_eq!(bic("DEUT-EFF"), Err(ReasonCode::BadFormat));
        assert_eq!(bic("DEUTQQFF"), Err(ReasonCode::BadCountry));
    }

    #[test]
    fn bic_country_argument_honours_territories() {
        assert!(check_bic(tables(), "BNPAGPGP", Some(&cc("FR"))).is_ok());
        assert!(check_bic(tables(), "BNPAFRPP", Some(&cc("GP"))).is_ok());
        assert_eq!(
            check_bic(tables(), "DEUTDEFF", Some(&cc("AT"))),
            Err(ReasonCode::CountryMismatch)
        );
    }
}
