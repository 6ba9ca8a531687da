//! Configuration file plus handlers, the way the binary wires them.

use std::path::PathBuf;

use formcheck_cli::check::{check_report, CheckArgs};
use formcheck_cli::config::{CliConfig, DEFAULT_CONFIG_FILE};
use formcheck_cli::phone::{phone_report, PhoneArgs};
use formcheck_cli::rules::{run_rules, RulesArgs};
use formcheck_cli::{EXIT_INVALID, EXIT_OK};
use formcheck_core::IdentifierKind;

const CONFIG: &str = "\
default_country: DE
phone_style: din5008_national
rule_sets:
  customer:
    - field: vatId
      comparisonField: customerType
      comparisonValues: [business]
      operator: not_empty_if_equals
    - field: email
      operator:
        not_empty_alternate:
          altField: phone
";

fn workspace() -> (tempfile::TempDir, CliConfig) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), CONFIG).unwrap();
    let config = CliConfig::load(None, dir.path()).unwrap();
    (dir, config)
}

#[test]
fn configured_defaults_drive_check_and_phone() {
    let (_dir, config) = workspace();

    let report = check_report(
        &CheckArgs {
            kind: IdentifierKind::PostalCode,
            value: "80331".to_string(),
            country: None,
        },
        &config,
    );
    assert!(report.valid);

    let report = phone_report(
        &PhoneArgs {
            raw: "089 1234-5678".to_string(),
            country: None,
            style: None,
            all_styles: false,
        },
        &config,
    )
    .unwrap();
    assert_eq!(report.rendered["din5008_national"], "089 1234-5678");
}

#[test]
fn configured_rule_set_over_records() {
    let (dir, config) = workspace();
    let write = |name: &str, json: &str| -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, json).unwrap();
        path
    };

    let good = write(
        "good.json",
        r#"{"customerType": "business", "vatId": "DE136695976", "email": "", "phone": "+49 89 1"}"#,
    );
    let bad = write(
        "bad.json",
        r#"{"customerType": "business", "vatId": "", "email": null, "phone": null}"#,
    );

    let args = |record: PathBuf| RulesArgs {
        record,
        rule_set: Some("customer".to_string()),
        rules: None,
    };
    assert_eq!(run_rules(&args(good), &config).unwrap(), EXIT_OK);
    assert_eq!(run_rules(&args(bad), &config).unwrap(), EXIT_INVALID);
}
