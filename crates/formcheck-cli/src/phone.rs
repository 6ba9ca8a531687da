//! # `formcheck phone` — Parse and Render a Phone Number
//!
//! ```bash
//! formcheck phone "+49 89 1234-5678" --style din5008_national
//! formcheck phone "(089) 1234-5678" --country DE --all-styles
//! ```

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use formcheck_core::{CountryCode, ReasonCode};
use formcheck_phone::{format_all, format_phone_number, parse_phone_number, PhoneFormatStyle, PhoneNumber};

use crate::check::CheckReport;
use crate::config::CliConfig;
use crate::{print_json, EXIT_OK};

/// Arguments of `formcheck phone`.
#[derive(Args, Debug)]
pub struct PhoneArgs {
    /// The number as entered.
    pub raw: String,

    /// Default country for numbers without `+` or `00`.
    #[arg(long)]
    pub country: Option<CountryCode>,

    /// Layout to render, e.g. e123_international, din5008_national, rfc3966.
    #[arg(long, conflicts_with = "all_styles")]
    pub style: Option<PhoneFormatStyle>,

    /// Render every layout.
    #[arg(long)]
    pub all_styles: bool,
}

/// Parsed number plus its renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneReport {
    /// E.164 form.
    pub e164: String,
    /// The parsed groups.
    pub number: PhoneNumber,
    /// Rendered layouts by style name.
    pub rendered: BTreeMap<&'static str, String>,
}

/// Parse and render without printing.
pub fn phone_report(args: &PhoneArgs, config: &CliConfig) -> Result<PhoneReport, ReasonCode> {
    let country = config.country(args.country.as_ref());
    let number = parse_phone_number(&args.raw, country.as_ref())?;
    let rendered = if args.all_styles {
        format_all(&number)
            .into_iter()
            .map(|(style, text)| (style.as_str(), text))
            .collect()
    } else {
        let style = args
            .style
            .or(config.phone_style)
            .unwrap_or(PhoneFormatStyle::E123International);
        BTreeMap::from([(style.as_str(), format_phone_number(&number, style))])
    };
    Ok(PhoneReport {
        e164: number.e164(),
        number,
        rendered,
    })
}

/// Execute `formcheck phone`.
pub fn run_phone(args: &PhoneArgs, config: &CliConfig) -> Result<u8> {
    match phone_report(args, config) {
        Ok(report) => {
            print_json(&report)?;
            Ok(EXIT_OK)
        }
        Err(reason) => {
            let report = CheckReport::new("phone_number", formcheck_core::Verdict::Invalid(reason));
            print_json(&report)?;
            Ok(report.exit_code())
        }
    }
}
