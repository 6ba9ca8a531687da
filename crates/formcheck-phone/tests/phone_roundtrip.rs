//! Parse/render behaviour through the public entry points.

use formcheck_core::{CountryCode, ReasonCode};
use formcheck_phone::{format_phone_number, parse_phone_number, PhoneFormatStyle, PhoneNumber};
use proptest::prelude::*;

fn de() -> CountryCode {
    CountryCode::new("DE").unwrap()
}

#[test]
fn munich_round_trip() {
    let n = parse_phone_number("+49 89 1234-5678", None).unwrap();
    assert_eq!(n.country_calling_code, "49");
    assert_eq!(n.area_code.as_deref(), Some("89"));
    assert_eq!(n.subscriber_number, "1234");
    assert_eq!(n.extension.as_deref(), Some("5678"));
    assert_eq!(format_phone_number(&n, PhoneFormatStyle::Din5008National), "089 1234-5678");
    assert_eq!(format_phone_number(&n, PhoneFormatStyle::E123International), "+49 89 12345678");
}

#[test]
fn default_country_is_ignored_for_international_input() {
    let gb = CountryCode::new("GB").unwrap();
    let n = parse_phone_number("+49 89 1234-5678", Some(&gb)).unwrap();
    assert_eq!(n.country_calling_code, "49");
}

#[test]
fn e164_normalization() {
    let n = parse_phone_number("(089) 1234-5678", Some(&de())).unwrap();
    assert_eq!(n.e164(), "+498912345678");
}

#[test]
fn common_international_parses_back() {
    let n = parse_phone_number("+49 (0)89 1234 - 5678", None).unwrap();
    assert_eq!(n, PhoneNumber::new("49", Some("89"), "1234", Some("5678")));
}

#[test]
fn unparseable_noise_is_rejected() {
    assert_eq!(parse_phone_number("+49 89 1234 5678!", None), Err(ReasonCode::BadFormat));
}

#[test]
fn over_fifteen_digits_is_rejected() {
    let at = parse_phone_number("+43 2742 123456789", None).unwrap();
    assert_eq!(at.e164().len(), 16);
    // Within the Austrian subscriber range, beyond the E.164 ceiling.
    assert_eq!(parse_phone_number("+43 2742 12345678901", None), Err(ReasonCode::BadLength));
}

/// Valid international numbers without extensions, one per plan shape.
const SAMPLES: &[&str] = &[
    "+49 89 12345678",
    "+49 6221 123456",
    "+49 170 1234567",
    "+1 415 5551234",
    "+44 20 79460958",
    "+44 7911 123456",
    "+33 1 23456789",
    "+34 912345678",
    "+31 20 1234567",
    "+43 1 5123456",
    "+41 44 1234567",
    "+353 1 2345678",
    "+61 2 12345678",
    "+55 11 987654321",
];

proptest! {
    #[test]
    fn international_layouts_parse_back(
        idx in 0..SAMPLES.len(),
        style in prop::sample::select(vec![
            PhoneFormatStyle::E123International,
            PhoneFormatStyle::Rfc3966,
            PhoneFormatStyle::MicrosoftCanonical,
            PhoneFormatStyle::CommonInternational,
        ]),
    ) {
        let n = parse_phone_number(SAMPLES[idx], None).unwrap();
        let rendered = format_phone_number(&n, style);
        prop_assert_eq!(parse_phone_number(&rendered, None).unwrap(), n);
    }

    #[test]
    fn rfc3966_keeps_extensions(idx in 0..SAMPLES.len(), ext in "[0-9]{1,5}") {
        let mut n = parse_phone_number(SAMPLES[idx], None).unwrap();
        n.extension = Some(ext);
        let rendered = format_phone_number(&n, PhoneFormatStyle::Rfc3966);
        prop_assert_eq!(parse_phone_number(&rendered, None).unwrap(), n);
    }

    #[test]
    fn parser_never_panics(raw in "\\PC{0,40}") {
        let _ = parse_phone_number(&raw, Some(&de()));
    }
}
