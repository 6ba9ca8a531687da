//! # ISBN and ISSN
//!
//! ISBN-10 and ISSN share one scheme: a weighted sum with descending
//! weights ending in 1, where the last position may be `X` (10), divisible
//! by 11. ISBN-13 is a GTIN-13 in the `978`/`979` "Bookland" ranges.

use formcheck_core::{compact, digit_values, ReasonCode, COMMON_SEPARATORS};

use crate::checksum;

/// Digits plus an optional trailing `X`, checked with weights `len..=1`
/// mod 11.
fn check_mod11_x(raw: &str, len: usize) -> Result<String, ReasonCode> {
    let value = compact(raw, COMMON_SEPARATORS);
    if !value.bytes().all(|b| b.is_ascii_digit() || b == b'X') {
        return Err(ReasonCode::BadFormat);
    }
    if value.len() != len {
        return Err(ReasonCode::BadLength);
    }
    if value[..len - 1].contains('X') {
        return Err(ReasonCode::BadFormat);
    }
    let sum: u32 = value
        .chars()
        .zip((1..=len as u32).rev())
        .map(|(c, w)| c.to_digit(10).unwrap_or(10) * w)
        .sum();
    if sum % 11 != 0 {
        return Err(ReasonCode::BadChecksum);
    }
    Ok(value)
}

/// ISBN-10.
pub fn check_isbn10(raw: &str) -> Result<String, ReasonCode> {
    check_mod11_x(raw, 10)
}

/// ISBN-13: a GTIN-13 starting with 978 or 979.
pub fn check_isbn13(raw: &str) -> Result<String, ReasonCode> {
    let value = compact(raw, COMMON_SEPARATORS);
    let digits = digit_values(&value).ok_or(ReasonCode::BadFormat)?;
    if digits.len() != 13 {
        return Err(ReasonCode::BadLength);
    }
    if !value.starts_with("978") && !value.starts_with("979") {
        return Err(ReasonCode::BadFormat);
    }
    if !checksum::gtin(&digits) {
        return Err(ReasonCode::BadChecksum);
    }
    Ok(value)
}

/// Either ISBN form, selected by compact length.
pub fn check_isbn(raw: &str) -> Result<String, ReasonCode> {
    match compact(raw, COMMON_SEPARATORS).len() {
        10 => check_isbn10(raw),
        13 => check_isbn13(raw),
        // Alphabet first, then length.
        _ => match check_isbn10(raw) {
            Err(ReasonCode::BadFormat) => Err(ReasonCode::BadFormat),
            _ => Err(ReasonCode::BadLength),
        },
    }
}

/// ISSN: 8 positions, weights 8..1, `X` allowed last.
pub fn check_issn(raw: &str) -> Result<String, ReasonCode> {
    check_mod11_x(raw, 8)
}
