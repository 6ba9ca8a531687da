//! # Postal Code Patterns
//!
//! One regular expression per country, written without anchors; the
//! loader anchors and compiles each once. Patterns see the trimmed,
//! upper-cased input with its separators intact, since separators are
//! part of several national layouts (`00-950`, `1234 AB`).

/// `(country, unanchored pattern)` pairs.
pub const POSTAL_PATTERNS: &[(&str, &str)] = &[
    ("AT", r"\d{4}"),
    ("AU", r"\d{4}"),
    ("BE", r"\d{4}"),
    ("BG", r"\d{4}"),
    ("BR", r"\d{5}-?\d{3}"),
    ("CA", r"[ABCEGHJ-NPRSTVXY]\d[ABCEGHJ-NPRSTV-Z] ?\d[ABCEGHJ-NPRSTV-Z]\d"),
    ("CH", r"\d{4}"),
    ("CN", r"\d{6}"),
    ("CY", r"\d{4}"),
    ("CZ", r"\d{3} ?\d{2}"),
    ("DE", r"\d{5}"),
    ("DK", r"\d{4}"),
    ("EE", r"\d{5}"),
    ("ES", r"(?:0[1-9]|[1-4]\d|5[0-2])\d{3}"),
    ("FI", r"\d{5}"),
    ("FR", r"\d{2} ?\d{3}"),
    ("GB", r"GIR ?0AA|[A-Z]{1,2}\d[A-Z\d]? ?\d[A-Z]{2}"),
    ("GR", r"\d{3} ?\d{2}"),
    ("HR", r"\d{5}"),
    ("HU", r"\d{4}"),
    ("IE", r"(?:[AC-FHKNPRTV-Y]\d{2}|D6W) ?[0-9AC-FHKNPRTV-Y]{4}"),
    ("IN", r"\d{6}"),
    ("IS", r"\d{3}"),
    ("IT", r"\d{5}"),
    ("JP", r"\d{3}-?\d{4}"),
    ("LI", r"94(?:8[5-9]|9[0-8])"),
    ("LT", r"(?:LT-)?\d{5}"),
    ("LU", r"(?:L-)?\d{4}"),
    ("LV", r"LV-\d{4}"),
    ("MT", r"[A-Z]{3} ?\d{2,4}"),
    ("MX", r"\d{5}"),
    ("NL", r"[1-9]\d{3} ?[A-Z]{2}"),
    ("NO", r"\d{4}"),
    ("NZ", r"\d{4}"),
    ("PL", r"\d{2}-\d{3}"),
    ("PT", r"\d{4}-\d{3}"),
    ("RO", r"\d{6}"),
    ("RU", r"\d{6}"),
    ("SE", r"\d{3} ?\d{2}"),
    ("SI", r"(?:SI-)?\d{4}"),
    ("SK", r"\d{3} ?\d{2}"),
    ("TR", r"\d{5}"),
    ("US", r"\d{5}(?:-\d{4})?"),
    ("ZA", r"\d{4}"),
];
