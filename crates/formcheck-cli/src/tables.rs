//! # `formcheck tables` — Inspect the Country Rule Tables
//!
//! Prints the entry count of every table, and with `--plans` the phone
//! numbering plans themselves.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use formcheck_tables::{CountryTables, NumberingPlan, TableStats};

use crate::{print_json, EXIT_OK};

/// Arguments of `formcheck tables`.
#[derive(Args, Debug)]
pub struct TablesArgs {
    /// Include every phone numbering plan.
    #[arg(long)]
    pub plans: bool,
}

/// Table summary.
#[derive(Debug, Serialize)]
pub struct TablesReport {
    /// Entry counts.
    pub stats: TableStats,
    /// Numbering plans, when requested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plans: Vec<&'static NumberingPlan>,
}

/// Build the report from loaded tables.
pub fn tables_report(args: &TablesArgs, tables: &CountryTables) -> TablesReport {
    let plans = if args.plans {
        formcheck_tables::phone::NUMBERING_PLANS.iter().collect()
    } else {
        Vec::new()
    };
    TablesReport {
        stats: tables.stats(),
        plans,
    }
}

/// Execute `formcheck tables`.
pub fn run_tables(args: &TablesArgs, tables: &CountryTables) -> Result<u8> {
    print_json(&tables_report(args, tables))?;
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_only_by_default() {
        let report = tables_report(&TablesArgs { plans: false }, formcheck_tables::tables());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["stats"]["iban_countries"].as_u64().unwrap() > 70);
        assert!(json.get("plans").is_none());
    }

    #[test]
    fn plans_on_request() {
        let report = tables_report(&TablesArgs { plans: true }, formcheck_tables::tables());
        assert_eq!(report.plans.len(), report.stats.numbering_plans);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["plans"]
            .as_array()
            .unwrap()
            .iter()
            .any(|p| p["country"] == "DE" && p["calling_code"] == "49"));
    }
}
