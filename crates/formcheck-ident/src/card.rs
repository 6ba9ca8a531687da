//! Payment card numbers: 12 to 19 digits, Luhn.

use formcheck_core::{compact, digit_values, ReasonCode};

use crate::checksum::luhn;

/// Shortest and longest card number accepted.
pub const CARD_LENGTHS: (usize, usize) = (12, 19);

/// Validate a card number; spaces and dashes are tolerated.
pub fn check_card(raw: &str) -> Result<String, ReasonCode> {
    let value = compact(raw, &['-']);
    let digits = digit_values(&value).ok_or(ReasonCode::BadFormat)?;
    if !(CARD_LENGTHS.0..=CARD_LENGTHS.1).contains(&digits.len()) {
        return Err(ReasonCode::BadLength);
    }
    if !luhn(&digits) {
        return Err(ReasonCode::BadChecksum);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_vectors() {
        assert_eq!(check_card("4417123456789113"), Ok("4417123456789113".to_string()));
        assert_eq!(check_card("4417123456789112"), Err(ReasonCode::BadChecksum));
    }

    #[test]
    fn grouped_input() {
        assert_eq!(check_card("4417 1234-5678 9113"), Ok("4417123456789113".to_string()));
    }

    #[test]
    fn non_digits_before_luhn() {
        assert_eq!(check_card("4417.1234.5678.9113"), Err(ReasonCode::BadFormat));
        assert_eq!(check_card("4417I23456789113"), Err(ReasonCode::BadFormat));
    }

    #[test]
    fn length_bounds() {
        assert_eq!(check_card("79927398713"), Err(ReasonCode::BadLength));
        assert_eq!(check_card("44171234567891134417"), Err(ReasonCode::BadLength));
    }
}
