//! # `formcheck bank-country` — Record-Level Country Cross-Check
//!
//! ```bash
//! formcheck bank-country --country AT --iban DE16701600000000555444
//! ```

use anyhow::Result;
use clap::Args;

use formcheck_ident::validate_bank_country;

use crate::check::CheckReport;
use crate::print_json;

/// Arguments of `formcheck bank-country`.
#[derive(Args, Debug)]
pub struct BankCountryArgs {
    /// Declared country of the account holder's bank.
    #[arg(long)]
    pub country: String,

    /// IBAN on the same record.
    #[arg(long)]
    pub iban: Option<String>,

    /// BIC on the same record.
    #[arg(long)]
    pub bic: Option<String>,
}

/// Compute the report without printing.
pub fn bank_country_report(args: &BankCountryArgs) -> CheckReport {
    let verdict = validate_bank_country(&args.country, args.iban.as_deref(), args.bic.as_deref());
    CheckReport::new("bank_country", verdict)
}

/// Execute `formcheck bank-country`.
pub fn run_bank_country(args: &BankCountryArgs) -> Result<u8> {
    let report = bank_country_report(args);
    print_json(&report)?;
    Ok(report.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcheck_core::ReasonCode;

    fn args(country: &str, iban: Option<&str>, bic: Option<&str>) -> BankCountryArgs {
        BankCountryArgs {
            country: country.to_string(),
            iban: iban.map(str::to_string),
            bic: bic.map(str::to_string),
        }
    }

    #[test]
    fn mismatch_is_reported() {
        let report = bank_country_report(&args("AT", Some("DE16701600000000555444"), None));
        assert!(!report.valid);
        assert_eq!(report.reason, Some(ReasonCode::CountryMismatch));
    }

    #[test]
    fn agreeing_record_is_valid() {
        let report = bank_country_report(&args(
            "de",
            Some("DE16701600000000555444"),
            Some("DEUTDEFF"),
        ));
        assert!(report.valid);
        assert_eq!(report.normalized.as_deref(), Some("DE"));
    }
}
