//! # ISIN
//!
//! Twelve characters: a two-letter prefix, nine alphanumerics, one check
//! digit. Letters expand to two digits (`A` = 10 … `Z` = 35) left to
//! right, and the expanded digit string must pass Luhn.

use formcheck_core::{compact, ReasonCode, COMMON_SEPARATORS};

use crate::checksum::{alnum_value, luhn};

/// Validate an ISIN.
pub fn check_isin(raw: &str) -> Result<String, ReasonCode> {
    let value = compact(raw, COMMON_SEPARATORS);
    if !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(ReasonCode::BadFormat);
    }
    if value.len() != 12 {
        return Err(ReasonCode::BadLength);
    }
    let bytes = value.as_bytes();
    if !bytes[..2].iter().all(u8::is_ascii_uppercase) || !bytes[11].is_ascii_digit() {
        return Err(ReasonCode::BadFormat);
    }

    let mut expanded = Vec::with_capacity(24);
    for v in value.chars().filter_map(alnum_value) {
        if v >= 10 {
            expanded.extend([v / 10, v % 10]);
        } else {
            expanded.push(v);
        }
    }
    if !luhn(&expanded) {
        return Err(ReasonCode::BadChecksum);
    }
    Ok(value)
}
