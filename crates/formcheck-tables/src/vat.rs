//! # VAT-ID Schemes
//!
//! Every supported VAT prefix maps to a body layout and a [`VatScheme`]
//! tag. Regular weighted-sum schemes are pure data ([`VatScheme::Weighted`]
//! with its weights, modulus and [`CheckRule`]); the national schemes that
//! do not fit the weighted mould get their own tag. Adding a country that
//! reuses an existing scheme is a table change only.
//!
//! Bodies are matched after the prefix is removed and the input compacted
//! (separators stripped, upper-cased). A body whose length is not listed
//! is `BadLength`; a body of the right length that does not match the
//! pattern is `BadFormat`.

use serde::Serialize;

/// How the check digit(s) follow from a weighted sum `s` under modulus `m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckRule {
    /// The weights cover the check digit too; the sum must be `≡ 0 (mod m)`.
    ZeroSum,
    /// Check digit is `s mod m`; a remainder of 10 means the number is invalid.
    Remainder,
    /// Check digit is `(s mod m) mod 10`.
    RemainderMod10,
    /// Check digit is `(10 − s mod 10) mod 10`.
    TensComplement,
    /// Check value is `m − s mod m`; the results 10 and 11 are remapped as
    /// given, `None` marking them invalid.
    Complement {
        /// Replacement when the complement is 10.
        on_ten: Option<u32>,
        /// Replacement when the complement is 11.
        on_eleven: Option<u32>,
    },
}

/// The closed set of VAT check algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VatScheme {
    /// Weighted sum over the leading body digits, followed by
    /// `check_len` check digits.
    Weighted {
        /// Weights applied to the leading digits, left to right.
        weights: &'static [u32],
        /// Modulus of the sum.
        modulus: u32,
        /// Derivation of the check value.
        rule: CheckRule,
        /// Number of trailing check digits (0 for [`CheckRule::ZeroSum`]).
        check_len: usize,
    },
    /// ISO 7064 MOD 11,10 over all digits.
    Iso7064Mod11_10,
    /// Luhn over the first `digits` digits of the body.
    Luhn {
        /// Number of leading digits covered.
        digits: usize,
    },
    /// `97 − (first 8 digits mod 97)` equals the last two digits.
    Mod97Complement,
    /// First six digits mod 89 equal the last two.
    Mod89,
    /// The whole body read as a number is divisible by 11.
    WholeNumberMod11,
    /// Austrian `U`-prefixed cross-sum scheme.
    Austria,
    /// Bulgarian 9-digit (legal) and 10-digit (personal) schemes.
    Bulgaria,
    /// Cypriot remapped-digit sum to a check letter.
    Cyprus,
    /// Czech 8-digit weighted scheme, 10-digit divisibility.
    Czech,
    /// Spanish DNI/NIE letter table and juridical Luhn variant.
    Spain,
    /// French numeric key over the SIREN.
    France,
    /// British mod-97 scheme (old and 9755 ranges), plus GD/HA forms.
    UnitedKingdom,
    /// Irish mod-23 letter scheme with the legacy and two-letter forms.
    Ireland,
    /// Latvian legal-person scheme.
    Latvia,
    /// Lithuanian cycling-weights scheme with fallback weights.
    Lithuania,
    /// Dutch weighted mod 11, or the mod-97 scheme for sole proprietors.
    Netherlands,
    /// Romanian right-aligned weighted scheme.
    Romania,
}

/// One VAT table entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VatRule {
    /// Two-letter prefix as written on the VAT ID (`EL` for Greece).
    pub prefix: &'static str,
    /// Accepted body lengths (after compaction, without the prefix).
    pub body_lengths: &'static [usize],
    /// Unanchored body pattern.
    pub body_pattern: &'static str,
    /// Check algorithm.
    pub scheme: VatScheme,
}

/// `(ISO country, VAT prefix)` pairs where the two differ.
pub const VAT_PREFIX_ALIASES: &[(&str, &str)] = &[("GR", "EL")];

/// The VAT table.
pub const VAT_RULES: &[VatRule] = &[
    VatRule {
        prefix: "AT",
        body_lengths: &[9],
        body_pattern: r"U\d{8}",
        scheme: VatScheme::Austria,
    },
    VatRule {
        prefix: "BE",
        body_lengths: &[9, 10],
        body_pattern: r"[01]?\d{9}",
        scheme: VatScheme::Mod97Complement,
    },
    VatRule {
        prefix: "BG",
        body_lengths: &[9, 10],
        body_pattern: r"\d{9,10}",
        scheme: VatScheme::Bulgaria,
    },
    VatRule {
        prefix: "CH",
        body_lengths: &[10],
        body_pattern: r"E\d{9}",
        scheme: VatScheme::Weighted {
            weights: &[5, 4, 3, 2, 7, 6, 5, 4],
            modulus: 11,
            rule: CheckRule::Complement {
                on_ten: None,
                on_eleven: Some(0),
            },
            check_len: 1,
        },
    },
    VatRule {
        prefix: "CY",
        body_lengths: &[9],
        body_pattern: r"[0-59]\d{7}[A-Z]",
        scheme: VatScheme::Cyprus,
    },
    VatRule {
        prefix: "CZ",
        body_lengths: &[8, 9, 10],
        body_pattern: r"\d{8,10}",
        scheme: VatScheme::Czech,
    },
    VatRule {
        prefix: "DE",
        body_lengths: &[9],
        body_pattern: r"[1-9]\d{8}",
        scheme: VatScheme::Iso7064Mod11_10,
    },
    VatRule {
        prefix: "DK",
        body_lengths: &[8],
        body_pattern: r"[1-9]\d{7}",
        scheme: VatScheme::Weighted {
            weights: &[2, 7, 6, 5, 4, 3, 2, 1],
            modulus: 11,
            rule: CheckRule::ZeroSum,
            check_len: 0,
        },
    },
    VatRule {
        prefix: "EE",
        body_lengths: &[9],
        body_pattern: r"10\d{7}",
        scheme: VatScheme::Weighted {
            weights: &[3, 7, 1, 3, 7, 1, 3, 7],
            modulus: 10,
            rule: CheckRule::TensComplement,
            check_len: 1,
        },
    },
    VatRule {
        prefix: "EL",
        body_lengths: &[9],
        body_pattern: r"\d{9}",
        scheme: VatScheme::Weighted {
            weights: &[256, 128, 64, 32, 16, 8, 4, 2],
            modulus: 11,
            rule: CheckRule::RemainderMod10,
            check_len: 1,
        },
    },
    VatRule {
        prefix: "ES",
        body_lengths: &[9],
        body_pattern: r"[0-9A-Z]\d{7}[0-9A-Z]",
        scheme: VatScheme::Spain,
    },
    VatRule {
        prefix: "FI",
        body_lengths: &[8],
        body_pattern: r"\d{8}",
        scheme: VatScheme::Weighted {
            weights: &[7, 9, 10, 5, 8, 4, 2],
            modulus: 11,
            rule: CheckRule::Complement {
                on_ten: None,
                on_eleven: Some(0),
            },
            check_len: 1,
        },
    },
    VatRule {
        prefix: "FR",
        body_lengths: &[11],
        body_pattern: r"[0-9A-HJ-NP-Z]{2}\d{9}",
        scheme: VatScheme::France,
    },
    VatRule {
        prefix: "GB",
        body_lengths: &[5, 9, 12],
        body_pattern: r"\d{9}|\d{12}|GD\d{3}|HA\d{3}",
        scheme: VatScheme::UnitedKingdom,
    },
    VatRule {
        prefix: "HR",
        body_lengths: &[11],
        body_pattern: r"\d{11}",
        scheme: VatScheme::Iso7064Mod11_10,
    },
    VatRule {
        prefix: "HU",
        body_lengths: &[8],
        body_pattern: r"\d{8}",
        scheme: VatScheme::Weighted {
            weights: &[9, 7, 3, 1, 9, 7, 3],
            modulus: 10,
            rule: CheckRule::TensComplement,
            check_len: 1,
        },
    },
    VatRule {
        prefix: "IE",
        body_lengths: &[8, 9],
        body_pattern: r"\d{7}[A-W][A-IW]?|\d[A-Z+*]\d{5}[A-W]",
        scheme: VatScheme::Ireland,
    },
    VatRule {
        prefix: "IT",
        body_lengths: &[11],
        body_pattern: r"\d{11}",
        scheme: VatScheme::Luhn { digits: 11 },
    },
    VatRule {
        prefix: "LT",
        body_lengths: &[9, 12],
        body_pattern: r"\d{7}1\d|\d{10}1\d",
        scheme: VatScheme::Lithuania,
    },
    VatRule {
        prefix: "LU",
        body_lengths: &[8],
        body_pattern: r"\d{8}",
        scheme: VatScheme::Mod89,
    },
    VatRule {
        prefix: "LV",
        body_lengths: &[11],
        body_pattern: r"\d{11}",
        scheme: VatScheme::Latvia,
    },
    VatRule {
        prefix: "MT",
        body_lengths: &[8],
        body_pattern: r"[1-9]\d{7}",
        scheme: VatScheme::Weighted {
            weights: &[3, 4, 6, 7, 8, 9],
            modulus: 37,
            rule: CheckRule::Complement {
                on_ten: Some(10),
                on_eleven: Some(11),
            },
            check_len: 2,
        },
    },
    VatRule {
        prefix: "NL",
        body_lengths: &[12],
        body_pattern: r"[0-9A-Z+*]{9}B\d{2}",
        scheme: VatScheme::Netherlands,
    },
    VatRule {
        prefix: "PL",
        body_lengths: &[10],
        body_pattern: r"\d{10}",
        scheme: VatScheme::Weighted {
            weights: &[6, 5, 7, 2, 3, 4, 5, 6, 7],
            modulus: 11,
            rule: CheckRule::Remainder,
            check_len: 1,
        },
    },
    VatRule {
        prefix: "PT",
        body_lengths: &[9],
        body_pattern: r"\d{9}",
        scheme: VatScheme::Weighted {
            weights: &[9, 8, 7, 6, 5, 4, 3, 2],
            modulus: 11,
            rule: CheckRule::Complement {
                on_ten: Some(0),
                on_eleven: Some(0),
            },
            check_len: 1,
        },
    },
    VatRule {
        prefix: "RO",
        body_lengths: &[2, 3, 4, 5, 6, 7, 8, 9, 10],
        body_pattern: r"[1-9]\d{1,9}",
        scheme: VatScheme::Romania,
    },
    VatRule {
        prefix: "SE",
        body_lengths: &[12],
        body_pattern: r"\d{10}01",
        scheme: VatScheme::Luhn { digits: 10 },
    },
    VatRule {
        prefix: "SI",
        body_lengths: &[8],
        body_pattern: r"[1-9]\d{7}",
        scheme: VatScheme::Weighted {
            weights: &[8, 7, 6, 5, 4, 3, 2],
            modulus: 11,
            rule: CheckRule::Complement {
                on_ten: Some(0),
                on_eleven: None,
            },
            check_len: 1,
        },
    },
    VatRule {
        prefix: "SK",
        body_lengths: &[10],
        body_pattern: r"[1-9]\d[2-47-9]\d{7}",
        scheme: VatScheme::WholeNumberMod11,
    },
];
