//! # `formcheck rules` — Evaluate Cross-Field Rules
//!
//! ```bash
//! formcheck rules customer.json --rule-set customer
//! formcheck rules customer.json --rules rules.yaml
//! ```
//!
//! The record is a JSON object. Rules come from a named rule set in the
//! configuration or from a YAML/JSON file holding a list of rules. Every
//! rule is evaluated; the exit code is 2 if any of them is violated.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::{Map, Value};

use formcheck_core::FormcheckError;
use formcheck_rules::{evaluate_all, FieldRule, RuleOutcome};

use crate::config::CliConfig;
use crate::{print_json, EXIT_INVALID, EXIT_OK};

/// Arguments of `formcheck rules`.
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// JSON file holding one record (an object).
    pub record: PathBuf,

    /// Name of a rule set from the configuration file.
    #[arg(long, conflicts_with = "rules")]
    pub rule_set: Option<String>,

    /// YAML or JSON file holding a list of rules.
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

/// Read a JSON object from `path`.
pub fn read_record(path: &Path) -> Result<Map<String, Value>, FormcheckError> {
    let text = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    let Value::Object(map) = value else {
        return Err(FormcheckError::Json(serde::de::Error::custom(
            "record must be a JSON object",
        )));
    };
    Ok(map)
}

/// Resolve the rule list from the arguments and configuration.
pub fn load_rules(args: &RulesArgs, config: &CliConfig) -> Result<Vec<FieldRule>> {
    if let Some(path) = &args.rules {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read rules: {}", path.display()))?;
        return serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse rules: {}", path.display()));
    }
    let Some(name) = &args.rule_set else {
        bail!("no rules given: pass --rules <file> or --rule-set <name>");
    };
    match config.rule_sets.get(name) {
        Some(rules) => Ok(rules.clone()),
        None => {
            let known: Vec<&str> = config.rule_sets.keys().map(String::as_str).collect();
            bail!(
                "unknown rule set '{name}' (configured: {})",
                if known.is_empty() { "none".to_string() } else { known.join(", ") }
            )
        }
    }
}

/// Evaluate the rules against the record without printing.
pub fn rules_report(args: &RulesArgs, config: &CliConfig) -> Result<Vec<RuleOutcome>> {
    let rules = load_rules(args, config)?;
    let record = read_record(&args.record)
        .with_context(|| format!("failed to load record: {}", args.record.display()))?;
    Ok(evaluate_all(&rules, &record))
}

/// Execute `formcheck rules`.
pub fn run_rules(args: &RulesArgs, config: &CliConfig) -> Result<u8> {
    let outcomes = rules_report(args, config)?;
    print_json(&outcomes)?;
    let violations = outcomes.iter().filter(|o| o.is_violation()).count();
    tracing::info!(rules = outcomes.len(), violations, "rules evaluated");
    Ok(if violations == 0 { EXIT_OK } else { EXIT_INVALID })
}
