//! # CLI Configuration
//!
//! Optional YAML file with defaults for the subcommands:
//!
//! ```yaml
//! default_country: DE
//! phone_style: din5008_international
//! rule_sets:
//!   customer:
//!     - field: vatId
//!       comparisonField: customerType
//!       comparisonValues: [business]
//!       operator: not_empty_if_equals
//! ```
//!
//! Read from `--config` when given, otherwise from `formcheck.yaml` in the
//! working directory if it exists. Command-line flags override it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use formcheck_core::CountryCode;
use formcheck_phone::PhoneFormatStyle;
use formcheck_rules::FieldRule;

/// File name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "formcheck.yaml";

/// Parsed configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Country used when `--country` is not given.
    #[serde(default)]
    pub default_country: Option<CountryCode>,
    /// Layout used by `formcheck phone` when `--style` is not given.
    #[serde(default)]
    pub phone_style: Option<PhoneFormatStyle>,
    /// Named rule lists for `formcheck rules --rule-set`.
    #[serde(default)]
    pub rule_sets: BTreeMap<String, Vec<FieldRule>>,
}

impl CliConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, `formcheck.yaml` in `cwd`
    /// is used if present and an empty configuration otherwise.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = cwd.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    tracing::debug!("no configuration file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            rule_sets = config.rule_sets.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// The flag value if given, else the configured default country.
    pub fn country(&self, flag: Option<&CountryCode>) -> Option<CountryCode> {
        flag.or(self.default_country.as_ref()).cloned()
    }
}
