//! # formcheck CLI entry point
//!
//! Parses command-line arguments, installs the log subscriber, loads the
//! rule tables and configuration, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use formcheck_cli::bank::{run_bank_country, BankCountryArgs};
use formcheck_cli::check::{run_check, CheckArgs};
use formcheck_cli::config::CliConfig;
use formcheck_cli::phone::{run_phone, PhoneArgs};
use formcheck_cli::rules::{run_rules, RulesArgs};
use formcheck_cli::tables::{run_tables, TablesArgs};
use formcheck_core::FormcheckError;

/// formcheck — identifier, phone number and cross-field validation.
///
/// Validates IBAN, BIC, ISBN, ISSN, GTIN, ISIN, payment cards, VAT IDs,
/// national IDs and postal codes; parses and renders phone numbers; and
/// evaluates conditional field rules over JSON records.
#[derive(Parser, Debug)]
#[command(name = "formcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to configuration file (default: ./formcheck.yaml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one identifier and print its verdict.
    Check(CheckArgs),

    /// Parse a phone number and render it in one or all layouts.
    Phone(PhoneArgs),

    /// Evaluate cross-field rules over a JSON record.
    Rules(RulesArgs),

    /// Cross-check a declared country against an IBAN and BIC.
    BankCountry(BankCountryArgs),

    /// Print country rule table statistics.
    Tables(TablesArgs),
}

fn init_tracing(verbose: u8, json: bool) {
    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(cli: Cli) -> Result<u8> {
    let tables = formcheck_tables::init()
        .map_err(FormcheckError::from)
        .context("built-in country rule tables are inconsistent")?;

    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let config = CliConfig::load(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Check(args) => run_check(&args, &config),
        Commands::Phone(args) => run_phone(&args, &config),
        Commands::Rules(args) => run_rules(&args, &config),
        Commands::BankCountry(args) => run_bank_country(&args),
        Commands::Tables(args) => run_tables(&args, tables),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "formcheck starting");

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
