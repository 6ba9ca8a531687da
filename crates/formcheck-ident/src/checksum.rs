//! # Checksum Primitives
//!
//! The arithmetic shared by several identifier families. Every function
//! works on digit values (`0..=9`) or alphanumeric values (`A` = 10 …
//! `Z` = 35) that callers have already extracted; none of them allocate.

/// Value of an alphanumeric character: `0`–`9` as themselves, `A`–`Z`
/// as 10–35.
pub fn alnum_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => c.to_digit(10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Luhn: double every second digit from the right, fold values above 9,
/// sum mod 10 must be 0.
pub fn luhn(digits: &[u32]) -> bool {
    if digits.len() < 2 {
        return false;
    }
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Remainder mod 97 of the decimal string formed by writing each value
/// (0–99) in sequence, as in IBAN and ISO 7064 MOD 97-10.
pub fn mod97<I: IntoIterator<Item = u32>>(values: I) -> u32 {
    values.into_iter().fold(0, |acc, v| {
        if v >= 10 {
            (acc * 100 + v) % 97
        } else {
            (acc * 10 + v) % 97
        }
    })
}

/// Sum of `digits[i] * weights[i]` over the shorter of the two.
pub fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// GTIN/EAN mod 10: weights 1 and 3 alternating from the right (the check
/// digit has weight 1), total divisible by 10.
pub fn gtin(digits: &[u32]) -> bool {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 1 { d * 3 } else { d })
        .sum();
    !digits.is_empty() && sum % 10 == 0
}

/// ISO 7064 MOD 11,10 with the check digit last.
pub fn iso7064_mod11_10(digits: &[u32]) -> bool {
    let Some((&check, body)) = digits.split_last() else {
        return false;
    };
    let product = body.iter().fold(10, |p, &d| {
        let s = (d + p) % 10;
        let s = if s == 0 { 10 } else { s };
        (2 * s) % 11
    });
    (11 - product) % 10 == check
}

/// Digits read as a base-10 number. Callers bound the length.
pub fn as_number(digits: &[u32]) -> u64 {
    digits.iter().fold(0u64, |acc, &d| acc * 10 + u64::from(d))
}
