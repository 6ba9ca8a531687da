//! # formcheck-cli — Command-Line Front End
//!
//! Provides the `formcheck` binary over the three library entry points.
//!
//! ## Subcommands
//!
//! - `formcheck check` — validate one identifier.
//! - `formcheck phone` — parse a phone number and render it.
//! - `formcheck rules` — evaluate cross-field rules over a JSON record.
//! - `formcheck bank-country` — cross-check a declared bank country.
//! - `formcheck tables` — inspect the country rule tables.
//!
//! ## Exit Codes
//!
//! `0` when everything is valid, `2` when a verdict is invalid, `1` on
//! usage, configuration or I/O errors. Results go to stdout as JSON; logs
//! go to stderr.
//!
//! ```bash
//! formcheck check isbn 978-3-16-148410-0
//! formcheck phone "+49 89 1234-5678" --all-styles
//! formcheck -v rules record.json --rules rules.yaml
//! ```

pub mod bank;
pub mod check;
pub mod config;
pub mod phone;
pub mod rules;
pub mod tables;

use anyhow::{Context, Result};
use serde::Serialize;

/// Exit code when every verdict is valid.
pub const EXIT_OK: u8 = 0;

/// Exit code when a verdict is invalid.
pub const EXIT_INVALID: u8 = 2;

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(EXIT_OK, EXIT_INVALID);
        assert_ne!(EXIT_INVALID, 1);
    }

    #[test]
    fn public_modules_are_accessible() {
        let _ = std::any::type_name::<bank::BankCountryArgs>();
        let _ = std::any::type_name::<check::CheckArgs>();
        let _ = std::any::type_name::<config::CliConfig>();
        let _ = std::any::type_name::<phone::PhoneArgs>();
        let _ = std::any::type_name::<rules::RulesArgs>();
        let _ = std::any::type_name::<tables::TablesArgs>();
    }
}
