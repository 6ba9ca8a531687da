#![deny(missing_docs)]

//! # formcheck-tables — Country Rule Tables
//!
//! Static per-country data consumed by the validators and the phone
//! engine: IBAN lengths, BIC countries and territory aliases, VAT-ID
//! schemes, postal-code patterns and telephone numbering plans.
//!
//! The raw tables are `const` slices in the submodules. [`CountryTables`]
//! indexes them, compiles every regular expression and runs the
//! consistency checks once. A corrupt entry is a startup failure
//! ([`TableError`]), never a per-call fault. After loading, the tables are
//! immutable and shared by every caller without locking.
//!
//! ## Lookups
//!
//! Lookups take `&str` and never fail: an unknown country yields `None`
//! (or `false`), which callers turn into `Invalid(BadCountry)`.

pub mod bic;
pub mod error;
pub mod iban;
pub mod phone;
pub mod postal;
pub mod vat;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

pub use error::TableError;
pub use phone::{AreaCodeRule, NumberingPlan};
pub use vat::{CheckRule, VatRule, VatScheme};

/// A VAT rule with its body pattern compiled.
#[derive(Debug)]
pub struct CompiledVatRule {
    /// The table entry.
    pub rule: &'static VatRule,
    body: Regex,
}

impl CompiledVatRule {
    /// Whether the compact body (prefix removed) matches the layout.
    pub fn matches_body(&self, body: &str) -> bool {
        self.body.is_match(body)
    }
}

/// Entry counts per table, as reported by `formcheck tables`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableStats {
    /// Countries with an IBAN length.
    pub iban_countries: usize,
    /// Countries accepted in a BIC.
    pub bic_countries: usize,
    /// BIC territory aliases.
    pub bic_aliases: usize,
    /// VAT prefixes with a scheme.
    pub vat_prefixes: usize,
    /// Countries with a postal pattern.
    pub postal_countries: usize,
    /// Numbering plans.
    pub numbering_plans: usize,
    /// Distinct calling codes.
    pub calling_codes: usize,
}

/// The indexed, validated country rule tables.
#[derive(Debug)]
pub struct CountryTables {
    iban_lengths: BTreeMap<&'static str, usize>,
    bic_aliases: BTreeMap<&'static str, &'static str>,
    bic_countries: BTreeSet<&'static str>,
    vat_rules: BTreeMap<&'static str, CompiledVatRule>,
    vat_prefix_aliases: BTreeMap<&'static str, &'static str>,
    postal_patterns: BTreeMap<&'static str, Regex>,
    plans_by_code: BTreeMap<&'static str, &'static NumberingPlan>,
    plans_by_country: BTreeMap<&'static str, &'static NumberingPlan>,
}

static TABLES: OnceLock<CountryTables> = OnceLock::new();

/// Load the built-in tables into the process-wide instance, reporting any
/// consistency failure. Calling it again returns the loaded instance.
pub fn init() -> Result<&'static CountryTables, TableError> {
    if let Some(tables) = TABLES.get() {
        return Ok(tables);
    }
    let loaded = CountryTables::load()?;
    Ok(TABLES.get_or_init(|| loaded))
}

/// The process-wide tables, loading them on first use.
///
/// # Panics
///
/// Panics if the built-in tables fail their consistency checks. Hosts that
/// want a typed error at startup call [`init`] first.
pub fn tables() -> &'static CountryTables {
    TABLES.get_or_init(|| {
        CountryTables::load().expect("built-in country rule tables are consistent")
    })
}

fn check_country(table: &'static str, key: &str) -> Result<(), TableError> {
    if key.len() == 2 && key.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(TableError::MalformedCountry {
            table,
            key: key.to_string(),
        })
    }
}

fn insert_unique<V>(
    map: &mut BTreeMap<&'static str, V>,
    table: &'static str,
    key: &'static str,
    value: V,
) -> Result<(), TableError> {
    if map.insert(key, value).is_some() {
        return Err(TableError::DuplicateEntry {
            table,
            key: key.to_string(),
        });
    }
    Ok(())
}

fn compile_anchored(table: &'static str, key: &str, pattern: &str) -> Result<Regex, TableError> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| TableError::InvalidPattern {
        table,
        key: key.to_string(),
        source,
    })
}

fn check_vat_scheme(rule: &VatRule) -> Result<(), TableError> {
    let invalid = |reason: &str| TableError::InvalidWeights {
        key: rule.prefix.to_string(),
        reason: reason.to_string(),
    };
    let shortest = rule.body_lengths.iter().copied().min().unwrap_or(0);
    match rule.scheme {
        VatScheme::Weighted {
            weights,
            modulus,
            rule: check,
            check_len,
        } => {
            if weights.is_empty() {
                return Err(invalid("empty weight list"));
            }
            if modulus < 2 {
                return Err(invalid("modulus must be at least 2"));
            }
            if matches!(check, CheckRule::ZeroSum) != (check_len == 0) {
                return Err(invalid("zero-sum schemes carry no separate check digits"));
            }
            if weights.len() + check_len > shortest {
                return Err(invalid("weights and check digits exceed the body length"));
            }
        }
        VatScheme::Luhn { digits } if digits == 0 || digits > shortest => {
            return Err(invalid("luhn span outside the body"));
        }
        _ => {}
    }
    Ok(())
}

/// Non-empty digit prefixes, each listed once and no longer than its
/// area-code length.
fn area_rule_is_valid(rule: AreaCodeRule) -> bool {
    match rule {
        AreaCodeRule::None => true,
        AreaCodeRule::Fixed(len) => len > 0,
        AreaCodeRule::Prefixes(entries) => {
            let mut seen = BTreeSet::new();
            !entries.is_empty()
                && entries.iter().all(|(prefix, len)| {
                    !prefix.is_empty()
                        && *len >= prefix.len()
                        && prefix.bytes().all(|b| b.is_ascii_digit())
                        && seen.insert(*prefix)
                })
        }
    }
}

impl CountryTables {
    /// Index and validate the built-in tables.
    pub fn load() -> Result<Self, TableError> {
        let (min_iban, max_iban) = iban::IBAN_LENGTH_BOUNDS;
        let mut iban_lengths = BTreeMap::new();
        for &(country, len) in iban::IBAN_LENGTHS {
            check_country("IBAN", country)?;
            if !(min_iban..=max_iban).contains(&len) {
                return Err(TableError::InvalidLength {
                    table: "IBAN",
                    key: country.to_string(),
                    reason: format!("{len} outside {min_iban}..={max_iban}"),
                });
            }
            insert_unique(&mut iban_lengths, "IBAN", country, len)?;
        }

        let mut bic_aliases = BTreeMap::new();
        for &(territory, parent) in bic::BIC_TERRITORY_ALIASES {
            check_country("BIC alias", territory)?;
            check_country("BIC alias", parent)?;
            if !iban_lengths.contains_key(parent) {
                return Err(TableError::MalformedCountry {
                    table: "BIC alias",
                    key: parent.to_string(),
                });
            }
            insert_unique(&mut bic_aliases, "BIC alias", territory, parent)?;
        }

        let mut bic_countries: BTreeSet<&'static str> = iban_lengths.keys().copied().collect();
        bic_countries.extend(bic_aliases.keys().copied());
        for &country in bic::NON_IBAN_BANKING_COUNTRIES {
            check_country("BIC country", country)?;
            if !bic_countries.insert(country) {
                return Err(TableError::DuplicateEntry {
                    table: "BIC country",
                    key: country.to_string(),
                });
            }
        }

        let mut vat_rules = BTreeMap::new();
        for rule in vat::VAT_RULES {
            check_country("VAT", rule.prefix)?;
            if rule.body_lengths.is_empty() || rule.body_lengths.contains(&0) {
                return Err(TableError::InvalidLength {
                    table: "VAT",
                    key: rule.prefix.to_string(),
                    reason: "body lengths must be non-empty and positive".to_string(),
                });
            }
            check_vat_scheme(rule)?;
            let body = compile_anchored("VAT", rule.prefix, rule.body_pattern)?;
            insert_unique(&mut vat_rules, "VAT", rule.prefix, CompiledVatRule { rule, body })?;
        }

        let mut vat_prefix_aliases = BTreeMap::new();
        for &(country, prefix) in vat::VAT_PREFIX_ALIASES {
            check_country("VAT alias", country)?;
            if !vat_rules.contains_key(prefix) {
                return Err(TableError::MalformedCountry {
                    table: "VAT alias",
                    key: prefix.to_string(),
                });
            }
            insert_unique(&mut vat_prefix_aliases, "VAT alias", country, prefix)?;
        }

        let mut postal_patterns = BTreeMap::new();
        for &(country, pattern) in postal::POSTAL_PATTERNS {
            check_country("postal", country)?;
            let compiled = compile_anchored("postal", country, pattern)?;
            insert_unique(&mut postal_patterns, "postal", country, compiled)?;
        }

        let mut plans_by_code = BTreeMap::new();
        let mut plans_by_country = BTreeMap::new();
        for plan in phone::NUMBERING_PLANS {
            check_country("numbering plan", plan.country)?;
            let code = plan.calling_code;
            if code.is_empty() || code.len() > 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TableError::InvalidCallingCode {
                    country: plan.country.to_string(),
                    code: code.to_string(),
                });
            }
            if plan.subscriber_min == 0 || plan.subscriber_min > plan.subscriber_max {
                return Err(TableError::InvalidLength {
                    table: "numbering plan",
                    key: plan.country.to_string(),
                    reason: format!(
                        "subscriber range {}..={}",
                        plan.subscriber_min, plan.subscriber_max
                    ),
                });
            }
            let bad_area = !area_rule_is_valid(plan.area_codes);
            if bad_area {
                return Err(TableError::InvalidLength {
                    table: "numbering plan",
                    key: plan.country.to_string(),
                    reason: "area code rule".to_string(),
                });
            }
            insert_unique(&mut plans_by_country, "numbering plan", plan.country, plan)?;
            // Shared calling codes resolve to the first plan listed.
            plans_by_code.entry(code).or_insert(plan);
        }

        let tables = Self {
            iban_lengths,
            bic_aliases,
            bic_countries,
            vat_rules,
            vat_prefix_aliases,
            postal_patterns,
            plans_by_code,
            plans_by_country,
        };
        let stats = tables.stats();
        tracing::info!(
            iban = stats.iban_countries,
            bic = stats.bic_countries,
            vat = stats.vat_prefixes,
            postal = stats.postal_countries,
            plans = stats.numbering_plans,
            "country rule tables loaded"
        );
        Ok(tables)
    }

    // ─── IBAN / BIC ──────────────────────────────────────────────────

    /// Fixed IBAN length for `country`.
    pub fn iban_length(&self, country: &str) -> Option<usize> {
        self.iban_lengths.get(country).copied()
    }

    /// All `(country, IBAN length)` pairs in country order.
    pub fn iban_lengths(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.iban_lengths.iter().map(|(c, l)| (*c, *l))
    }

    /// Whether `country` may appear in a BIC.
    pub fn is_bic_country(&self, country: &str) -> bool {
        self.bic_countries.contains(country)
    }

    /// The IBAN country a BIC country banks under: the parent for a
    /// territory alias, the country itself otherwise.
    pub fn bank_country<'a>(&self, country: &'a str) -> &'a str {
        match self.bic_aliases.get(country) {
            Some(&parent) => parent,
            None => country,
        }
    }

    // ─── VAT ─────────────────────────────────────────────────────────

    /// The VAT rule for a prefix. ISO codes that differ from their VAT
    /// prefix (`GR`) resolve to the VAT prefix (`EL`).
    pub fn vat_rule(&self, prefix: &str) -> Option<&CompiledVatRule> {
        self.vat_rules.get(self.vat_prefix(prefix))
    }

    /// VAT prefix used by an ISO country.
    pub fn vat_prefix<'a>(&self, country: &'a str) -> &'a str {
        match self.vat_prefix_aliases.get(country) {
            Some(&prefix) => prefix,
            None => country,
        }
    }

    // ─── Postal codes ────────────────────────────────────────────────

    /// Anchored postal pattern for `country`.
    pub fn postal_pattern(&self, country: &str) -> Option<&Regex> {
        self.postal_patterns.get(country)
    }

    // ─── Numbering plans ─────────────────────────────────────────────

    /// Numbering plan for an ISO country.
    pub fn plan_for_country(&self, country: &str) -> Option<&'static NumberingPlan> {
        self.plans_by_country.get(country).copied()
    }

    /// The plan whose calling code is the longest (1–3 digit) prefix of
    /// `digits`.
    pub fn plan_for_international(&self, digits: &str) -> Option<&'static NumberingPlan> {
        (1..=3.min(digits.len()))
            .rev()
            .find_map(|len| digits.get(..len).and_then(|p| self.plans_by_code.get(p)))
            .copied()
    }

    /// Entry counts per table.
    pub fn stats(&self) -> TableStats {
        TableStats {
            iban_countries: self.iban_lengths.len(),
            bic_countries: self.bic_countries.len(),
            bic_aliases: self.bic_aliases.len(),
            vat_prefixes: self.vat_rules.len(),
            postal_countries: self.postal_patterns.len(),
            numbering_plans: self.plans_by_country.len(),
            calling_codes: self.plans_by_code.len(),
        }
    }
}
