//! # VAT Identification Numbers
//!
//! The prefix selects a [`VatRule`] from the tables; the rule's
//! [`VatScheme`] tag selects the check below. Weighted schemes are fully
//! described by their table parameters; national schemes get a function
//! each.
//!
//! Checked in order: alphabet (`BadFormat`), known prefix (`BadCountry`),
//! body length (`BadLength`), body layout (`BadFormat`), check digits
//! (`BadChecksum`), then the optional country argument
//! (`CountryMismatch`).

use formcheck_core::{compact, CountryCode, ReasonCode, COMMON_SEPARATORS};
use formcheck_tables::{CheckRule, CountryTables, VatRule, VatScheme};

use crate::checksum::{alnum_value, as_number, iso7064_mod11_10, luhn, mod97, weighted_sum};

/// Validate a prefixed VAT ID and return `<prefix><body>` compact.
pub fn check_vat(
    tables: &CountryTables,
    raw: &str,
    country: Option<&CountryCode>,
) -> Result<String, ReasonCode> {
    let value = compact(raw, COMMON_SEPARATORS);
    if !value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'*')
    {
        return Err(ReasonCode::BadFormat);
    }
    let prefix = value.get(..2).ok_or(ReasonCode::BadLength)?;
    let compiled = tables.vat_rule(prefix).ok_or(ReasonCode::BadCountry)?;
    let rule = compiled.rule;
    let body = &value[2..];
    if !rule.body_lengths.contains(&body.len()) {
        return Err(ReasonCode::BadLength);
    }
    if !compiled.matches_body(body) {
        return Err(ReasonCode::BadFormat);
    }
    let body = canonical_body(rule, body);
    if !scheme_holds(rule.scheme, &body) {
        return Err(ReasonCode::BadChecksum);
    }
    if let Some(country) = country {
        if tables.vat_prefix(country.as_str()) != rule.prefix {
            return Err(ReasonCode::CountryMismatch);
        }
    }
    Ok(format!("{}{}", rule.prefix, body))
}

/// Bodies with an accepted short form are widened to the full form.
fn canonical_body(rule: &VatRule, body: &str) -> String {
    match rule.scheme {
        // Belgian numbers gained a leading 0 in 2007.
        VatScheme::Mod97Complement if body.len() == 9 => format!("0{body}"),
        _ => body.to_string(),
    }
}

fn digits_of(body: &str) -> Vec<u32> {
    body.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Whether `body` passes `scheme`. The body already matches its layout.
pub(crate) fn scheme_holds(scheme: VatScheme, body: &str) -> bool {
    let d = digits_of(body);
    match scheme {
        VatScheme::Weighted {
            weights,
            modulus,
            rule,
            check_len,
        } => weighted(&d, weights, modulus, rule, check_len),
        VatScheme::Iso7064Mod11_10 => iso7064_mod11_10(&d),
        VatScheme::Luhn { digits } => d.len() >= digits && luhn(&d[..digits]),
        VatScheme::Mod97Complement => {
            d.len() == 10 && 97 - as_number(&d[..8]) % 97 == as_number(&d[8..])
        }
        VatScheme::Mod89 => d.len() == 8 && as_number(&d[..6]) % 89 == as_number(&d[6..]),
        VatScheme::WholeNumberMod11 => as_number(&d) % 11 == 0,
        VatScheme::Austria => austria(&d),
        VatScheme::Bulgaria => bulgaria(&d),
        VatScheme::Cyprus => cyprus(body, &d),
        VatScheme::Czech => czech(&d),
        VatScheme::Spain => spain(body),
        VatScheme::France => france(body, &d),
        VatScheme::UnitedKingdom => united_kingdom(body, &d),
        VatScheme::Ireland => ireland(body),
        VatScheme::Latvia => latvia(&d),
        VatScheme::Lithuania => lithuania(&d),
        VatScheme::Netherlands => netherlands(body, &d),
        VatScheme::Romania => romania(&d),
    }
}

fn weighted(d: &[u32], weights: &[u32], modulus: u32, rule: CheckRule, check_len: usize) -> bool {
    let n = weights.len();
    if d.len() < n + check_len {
        return false;
    }
    let sum = weighted_sum(d, weights);
    let check = as_number(&d[n..n + check_len]);
    let expected = match rule {
        CheckRule::ZeroSum => return sum % modulus == 0,
        CheckRule::Remainder => match sum % modulus {
            10 => return false,
            r => r,
        },
        CheckRule::RemainderMod10 => sum % modulus % 10,
        CheckRule::TensComplement => (10 - sum % 10) % 10,
        CheckRule::Complement { on_ten, on_eleven } => match modulus - sum % modulus {
            10 => match on_ten {
                Some(v) => v,
                None => return false,
            },
            11 => match on_eleven {
                Some(v) => v,
                None => return false,
            },
            c => c,
        },
    };
    u64::from(expected) == check
}

// ─── National schemes ────────────────────────────────────────────────

fn austria(d: &[u32]) -> bool {
    if d.len() != 8 {
        return false;
    }
    let sum: u32 = d[..7]
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let p = if i % 2 == 1 { x * 2 } else { x };
            p / 10 + p % 10
        })
        .sum();
    (10 - (sum + 4) % 10) % 10 == d[7]
}

fn bulgaria(d: &[u32]) -> bool {
    match d.len() {
        9 => {
            let first: Vec<u32> = (1..=8).collect();
            let mut r = weighted_sum(d, &first) % 11;
            if r == 10 {
                let second: Vec<u32> = (3..=10).collect();
                r = weighted_sum(d, &second) % 11 % 10;
            }
            r == d[8]
        }
        10 => weighted_sum(d, &[2, 4, 8, 5, 10, 9, 7, 3, 6]) % 11 % 10 == d[9],
        _ => false,
    }
}

fn cyprus(body: &str, d: &[u32]) -> bool {
    const ODD: [u32; 10] = [1, 0, 5, 7, 9, 13, 15, 17, 19, 21];
    let Some(letter) = body.chars().last() else {
        return false;
    };
    if d.len() != 8 || body.starts_with("12") {
        return false;
    }
    let sum: u32 = d
        .iter()
        .enumerate()
        .map(|(i, &x)| if i % 2 == 0 { ODD[x as usize] } else { x })
        .sum();
    char::from(b'A' + (sum % 26) as u8) == letter
}

fn czech(d: &[u32]) -> bool {
    match d.len() {
        8 => {
            if d[0] == 9 {
                return false;
            }
            let sum = weighted_sum(d, &[8, 7, 6, 5, 4, 3, 2]);
            (11 - sum % 11) % 10 == d[7]
        }
        // Individuals with a special scheme; layout only.
        9 => true,
        10 => as_number(d) % 11 == 0,
        _ => false,
    }
}

fn spain(body: &str) -> bool {
    const DNI_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";
    const ENTITY_LETTERS: &[u8; 10] = b"JABCDEFGHI";
    let bytes = body.as_bytes();
    let (first, middle, last) = (bytes[0], &bytes[1..8], bytes[8]);
    let middle: Vec<u32> = middle.iter().map(|b| u32::from(b - b'0')).collect();

    let dni_letter = |number: u64| DNI_LETTERS[(number % 23) as usize];
    match first {
        b'0'..=b'9' => {
            let number = u64::from(first - b'0') * 10_000_000 + as_number(&middle);
            dni_letter(number) == last
        }
        b'X' | b'Y' | b'Z' => {
            let number = u64::from(first - b'X') * 10_000_000 + as_number(&middle);
            dni_letter(number) == last
        }
        b'K' | b'L' | b'M' => dni_letter(as_number(&middle)) == last,
        _ => {
            let sum: u32 = middle
                .iter()
                .enumerate()
                .map(|(i, &x)| {
                    if i % 2 == 0 {
                        let p = x * 2;
                        p / 10 + p % 10
                    } else {
                        x
                    }
                })
                .sum();
            let c = (10 - sum % 10) % 10;
            last == b'0' + c as u8 || last == ENTITY_LETTERS[c as usize]
        }
    }
}

fn france(body: &str, d: &[u32]) -> bool {
    let key = &body[..2];
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        // Alphanumeric keys of newer registrations; layout only.
        return true;
    }
    let siren = as_number(&d[2..]);
    let expected = (12 + 3 * (siren % 97)) % 97;
    key.parse::<u64>().map_or(false, |k| k == expected)
}

fn united_kingdom(body: &str, d: &[u32]) -> bool {
    if let Some(n) = body.strip_prefix("GD") {
        return n.parse::<u32>().map_or(false, |n| n < 500);
    }
    if let Some(n) = body.strip_prefix("HA") {
        return n.parse::<u32>().map_or(false, |n| n >= 500);
    }
    if d.len() < 9 {
        return false;
    }
    let total = weighted_sum(d, &[8, 7, 6, 5, 4, 3, 2]) + d[7] * 10 + d[8];
    matches!(total % 97, 0 | 42)
}

fn ireland(body: &str) -> bool {
    const LETTERS: &[u8; 23] = b"WABCDEFGHIJKLMNOPQRSTUV";
    let bytes = body.as_bytes();
    // Legacy "1X23456T" layout: move the leading digit behind the block.
    let normal: Vec<u8> = if !bytes[1].is_ascii_digit() {
        let mut v = vec![b'0'];
        v.extend_from_slice(&bytes[2..7]);
        v.push(bytes[0]);
        v.extend_from_slice(&bytes[7..]);
        v
    } else {
        bytes.to_vec()
    };
    let Some(digits) = normal[..7]
        .iter()
        .map(|b| b.is_ascii_digit().then(|| u32::from(b - b'0')))
        .collect::<Option<Vec<u32>>>()
    else {
        return false;
    };
    let mut sum = weighted_sum(&digits, &[8, 7, 6, 5, 4, 3, 2]);
    if let Some(&second) = normal.get(8) {
        if second != b'W' {
            sum += 9 * u32::from(second - b'A' + 1);
        }
    }
    LETTERS[(sum % 23) as usize] == normal[7]
}

fn latvia(d: &[u32]) -> bool {
    if d.len() != 11 {
        return false;
    }
    if d[0] <= 3 {
        // Natural persons: a personal code, layout only.
        return true;
    }
    let sum = weighted_sum(d, &[9, 1, 4, 8, 3, 10, 2, 5, 7, 6]) as i64;
    let mut r = 3 - sum % 11;
    if r < -1 {
        r += 11;
    }
    r != -1 && r == i64::from(d[10])
}

fn lithuania(d: &[u32]) -> bool {
    let n = d.len() - 1;
    let weights = |offset: usize| -> Vec<u32> { (0..n).map(|i| ((i + offset) % 9) as u32 + 1).collect() };
    let mut r = weighted_sum(d, &weights(0)) % 11;
    if r == 10 {
        r = weighted_sum(d, &weights(2)) % 11;
        if r == 10 {
            r = 0;
        }
    }
    r == d[n]
}

fn netherlands(body: &str, d: &[u32]) -> bool {
    let nine = &body[..9];
    if nine.bytes().all(|b| b.is_ascii_digit()) {
        let sum = weighted_sum(d, &[9, 8, 7, 6, 5, 4, 3, 2]);
        if sum % 11 != 10 && sum % 11 == d[8] {
            return true;
        }
    }
    // Sole-proprietor numbers: ISO 7064 mod 97 over "NL" + body.
    let values = "NL".chars().chain(body.chars()).map(|c| match c {
        '+' => Some(36),
        '*' => Some(37),
        c => alnum_value(c),
    });
    match values.collect::<Option<Vec<u32>>>() {
        Some(values) => mod97(values) == 1,
        None => false,
    }
}

fn romania(d: &[u32]) -> bool {
    const WEIGHTS: [u32; 9] = [7, 5, 3, 2, 1, 7, 5, 3, 2];
    let Some((&check, rest)) = d.split_last() else {
        return false;
    };
    let offset = WEIGHTS.len() - rest.len();
    let sum = weighted_sum(rest, &WEIGHTS[offset..]);
    sum * 10 % 11 % 10 == check
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcheck_tables::tables;

    fn vat(raw: &str) -> Result<String, ReasonCode> {
        check_vat(tables(), raw, None)
    }

    fn cc(code: &str) -> CountryCode {
        CountryCode::new(code).unwrap()
    }

    // -- Valid samples per scheme --

    #[test]
    fn valid_samples() {
        let samples = [
            "ATU13585627", "ATU10223006", "BE0403019261", "BE0776091951", "BG175074752",
            "CHE116281710", "CY10259033P", "CZ46505334", "DE136695976", "DK13585628",
            "EE100931558", "EE100594102", "EL094259216", "ESA28015865", "ESB58378431",
            "ESX1234567L", "ES12345678Z", "ESQ2826000H", "ESA13585625", "FI20774740",
            "FR40303265045", "FR00300076965", "GB980780684", "GB434031494", "HR33392005961",
            "HU12892312", "IE6388047V", "IE3628739UA", "IE8Z49289F", "IE3628739L",
            "IT00743110157", "LT119511515", "LT100001919017", "LU15027442", "LV40003521600",
            "MT11679112", "NL004495445B01", "PL5260001246", "PL7740001454", "PT501964843",
            "RO18547290", "SE556188840401", "SI50223054", "SK2022749619",
        ];
        for sample in samples {
            assert_eq!(vat(sample).as_deref(), Ok(sample), "{sample}");
        }
    }

    #[test]
    fn separators_and_case_are_normalized() {
        assert_eq!(vat("de 136 695 976"), Ok("DE136695976".to_string()));
        assert_eq!(vat("NL 0044.95.445.B.01"), Ok("NL004495445B01".to_string()));
    }

    #[test]
    fn belgian_short_form_is_widened() {
        assert_eq!(vat("BE403019261"), Ok("BE0403019261".to_string()));
    }

    #[test]
    fn irish_trailing_letter_forms() {
        for sample in ["IE1234567T", "IE1234567TW", "IE1234567FA"] {
            assert!(vat(sample).is_ok(), "{sample}");
        }
        assert_eq!(vat("IE1234567TA"), Err(ReasonCode::BadChecksum));
    }

    #[test]
    fn greek_country_code_resolves_to_el() {
        assert_eq!(vat("GR094259216"), Ok("EL094259216".to_string()));
        assert!(check_vat(tables(), "EL094259216", Some(&cc("GR"))).is_ok());
    }

    #[test]
    fn uk_government_and_health_ranges() {
        assert!(vat("GBGD123").is_ok());
        assert_eq!(vat("GBGD500"), Err(ReasonCode::BadChecksum));
        assert!(vat("GBHA500").is_ok());
        assert_eq!(vat("GBHA499"), Err(ReasonCode::BadChecksum));
    }

    // -- Reason codes --

    #[test]
    fn unknown_prefix() {
        assert_eq!(vat("US123456789"), Err(ReasonCode::BadCountry));
        assert_eq!(vat("12345678"), Err(ReasonCode::BadCountry));
    }

    #[test]
    fn wrong_body_length() {
        assert_eq!(vat("DE13669597"), Err(ReasonCode::BadLength));
        assert_eq!(vat("D"), Err(ReasonCode::BadLength));
    }

    #[test]
    fn wrong_body_layout() {
        assert_eq!(vat("DE13669597A"), Err(ReasonCode::BadFormat));
        assert_eq!(vat("AT113585627"), Err(ReasonCode::BadFormat));
        assert_eq!(vat("DE136_695976"), Err(ReasonCode::BadFormat));
    }

    #[test]
    fn bad_check_digits() {
        for sample in [
            "ATU13585626", "BE0403019262", "DE136695977", "DK13585627", "FI20774741",
            "GB980780685", "IE6388047W", "IT00743110158", "NL004495446B01", "PL5260001247",
            "ES12345678A", "CY10259033Q",
        ] {
            assert_eq!(vat(sample), Err(ReasonCode::BadChecksum), "{sample}");
        }
    }

    #[test]
    fn country_argument_mismatch() {
        assert_eq!(
            check_vat(tables(), "DE136695976", Some(&cc("AT"))),
            Err(ReasonCode::CountryMismatch)
        );
        assert!(check_vat(tables(), "DE136695976", Some(&cc("DE"))).is_ok());
    }

    // -- Weighted rule arithmetic --

    #[test]
    fn complement_remaps() {
        let rule = CheckRule::Complement {
            on_ten: None,
            on_eleven: Some(0),
        };
        // 11 - 0 = 11 -> 0
        assert!(weighted(&[1, 1, 0], &[1, 10], 11, rule, 1));
        // 11 - 1 = 10 -> invalid
        assert!(!weighted(&[1, 0, 0], &[1, 10], 11, rule, 1));
    }

    #[test]
    fn remainder_ten_is_invalid() {
        assert!(!weighted(&[5, 5, 0], &[1, 1], 11, CheckRule::Remainder, 1));
        assert!(weighted(&[5, 2, 7], &[1, 1], 11, CheckRule::Remainder, 1));
    }
}
