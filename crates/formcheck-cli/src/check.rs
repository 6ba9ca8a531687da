//! # `formcheck check` — Validate One Identifier
//!
//! ```bash
//! formcheck check iban "DE89 3704 0044 0532 0130 00"
//! formcheck check vat_id DE136695976 --country DE
//! formcheck check national_id:pl_pesel 44051401359
//! ```
//!
//! Prints the verdict as JSON and exits 0 when valid, 2 when invalid.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use formcheck_core::{CountryCode, IdentifierKind, ReasonCode, Verdict};

use crate::config::CliConfig;
use crate::{print_json, EXIT_INVALID, EXIT_OK};

/// Arguments of `formcheck check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Identifier kind, e.g. iban, bic, isbn, vat_id, national_id:br_cpf.
    pub kind: IdentifierKind,

    /// The value to validate.
    pub value: String,

    /// Country for postal codes and phone numbers, cross-checked for
    /// IBAN, BIC and VAT IDs.
    #[arg(long)]
    pub country: Option<CountryCode>,
}

/// JSON shape of a verdict on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Kind name.
    pub kind: String,
    /// Whether the value is valid.
    pub valid: bool,
    /// Normalized value, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    /// Reason code, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ReasonCode>,
}

impl CheckReport {
    /// Report for `verdict` under the label `kind`.
    pub fn new(kind: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            kind: kind.into(),
            valid: verdict.is_valid(),
            reason: verdict.reason(),
            normalized: verdict.into_result().ok(),
        }
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> u8 {
        if self.valid {
            EXIT_OK
        } else {
            EXIT_INVALID
        }
    }
}

/// Compute the report without printing.
pub fn check_report(args: &CheckArgs, config: &CliConfig) -> CheckReport {
    let country = config.country(args.country.as_ref());
    if country.is_none() && args.kind.requires_country() {
        tracing::warn!(kind = %args.kind, "no --country given and no default_country configured");
    }
    let verdict = formcheck_ident::validate(args.kind, &args.value, country.as_ref());
    CheckReport::new(args.kind.to_string(), verdict)
}

/// Execute `formcheck check`.
pub fn run_check(args: &CheckArgs, config: &CliConfig) -> Result<u8> {
    let report = check_report(args, config);
    print_json(&report)?;
    Ok(report.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: IdentifierKind, value: &str, country: Option<&str>) -> CheckArgs {
        CheckArgs {
            kind,
            value: value.to_string(),
            country: country.map(|c| CountryCode::new(c).unwrap()),
        }
    }

    #[test]
    fn valid_report() {
        let report = check_report(
            &args(IdentifierKind::Iban, "de89 3704 0044 0532 0130 00", None),
            &CliConfig::default(),
        );
        assert!(report.valid);
        assert_eq!(report.normalized.as_deref(), Some("DE89370400440532013000"));
        assert_eq!(report.exit_code(), EXIT_OK);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "kind": "iban",
                "valid": true,
                "normalized": "DE89370400440532013000"
            })
        );
    }

    #[test]
    fn invalid_report() {
        let report = check_report(
            &args(IdentifierKind::CreditCard, "4417123456789112", None),
            &CliConfig::default(),
        );
        assert_eq!(report.reason, Some(ReasonCode::BadChecksum));
        assert_eq!(report.exit_code(), EXIT_INVALID);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({"kind": "credit_card", "valid": false, "reason": "bad_checksum"})
        );
    }

    #[test]
    fn config_country_applies_to_postal_codes() {
        let config = CliConfig {
            default_country: Some(CountryCode::new("NL").unwrap()),
            ..CliConfig::default()
        };
        let report = check_report(&args(IdentifierKind::PostalCode, "1012 ab", None), &config);
        assert_eq!(report.normalized.as_deref(), Some("1012 AB"));

        let report = check_report(&args(IdentifierKind::PostalCode, "1012 ab", Some("DE")), &config);
        assert_eq!(report.reason, Some(ReasonCode::BadFormat));
    }
}
