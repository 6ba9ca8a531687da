//! # Input Normalization
//!
//! Helpers shared by every validator for turning human-entered text into
//! the compact form checksums run over. Raw values are never assumed to be
//! trimmed or cased.

/// Separators humans put inside identifiers: space, dash, slash, dot and
/// parentheses.
pub const COMMON_SEPARATORS: &[char] = &[' ', '-', '/', '.', '(', ')'];

/// Whether the input is absent for validation purposes (empty or only
/// whitespace).
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Strip whitespace and the given separators, and upper-case ASCII letters.
///
/// Characters outside the separator set are kept so that alphabet checks
/// downstream still see them.
pub fn compact(raw: &str, separators: &[char]) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !separators.contains(c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Numeric values of an all-digit string, or `None` if any character is
/// not an ASCII digit.
pub fn digit_values(s: &str) -> Option<Vec<u32>> {
    s.chars().map(|c| c.to_digit(10)).collect()
}
