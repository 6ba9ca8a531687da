//! # BIC Countries
//!
//! A BIC's country subfield must name a country formcheck knows. Known
//! countries are every IBAN country plus the banking countries below that
//! do not use IBAN.
//!
//! Some territories have their own ISO code in BICs while their accounts
//! carry the parent country's IBAN prefix (a bank in Guadeloupe has BIC
//! country `GP` and IBAN prefix `FR`). The alias table maps the territory
//! to the IBAN country for cross-checks.

/// Banking countries without an IBAN scheme.
pub const NON_IBAN_BANKING_COUNTRIES: &[&str] = &[
    "AR", "AU", "BD", "CA", "CL", "CN", "CO", "ET", "GH", "HK", "ID", "IN", "JP", "KE", "KR",
    "LK", "MA", "MX", "MY", "NG", "NZ", "PE", "PH", "SG", "TH", "TW", "TZ", "UG", "US", "UY",
    "VN", "ZA",
];

/// `(territory, IBAN country)` pairs.
pub const BIC_TERRITORY_ALIASES: &[(&str, &str)] = &[
    ("AX", "FI"),
    ("BL", "FR"),
    ("GF", "FR"),
    ("GG", "GB"),
    ("GP", "FR"),
    ("IM", "GB"),
    ("JE", "GB"),
    ("MF", "FR"),
    ("MQ", "FR"),
    ("NC", "FR"),
    ("PF", "FR"),
    ("PM", "FR"),
    ("RE", "FR"),
    ("TF", "FR"),
    ("WF", "FR"),
    ("YT", "FR"),
];
