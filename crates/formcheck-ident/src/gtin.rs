//! GTIN-8 / GTIN-13 (EAN): one mod-10 scheme, parameterized by length.

use formcheck_core::{compact, digit_values, ReasonCode, COMMON_SEPARATORS};

use crate::checksum;

/// Validate a GTIN whose length is one of `lengths`.
pub fn check_gtin(raw: &str, lengths: &[usize]) -> Result<String, ReasonCode> {
    let value = compact(raw, COMMON_SEPARATORS);
    let digits = digit_values(&value).ok_or(ReasonCode::BadFormat)?;
    if !lengths.contains(&digits.len()) {
        return Err(ReasonCode::BadLength);
    }
    if !checksum::gtin(&digits) {
        return Err(ReasonCode::BadChecksum);
    }
    Ok(value)
}
