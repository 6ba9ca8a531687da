//! # Parser State Machine
//!
//! `Scan → SplitCountryCode → SplitAreaCode → AssignSubscriber → Done`.
//! Each state owns the data gathered so far; a failed transition ends the
//! run with the reason code of that step. Steps are traced without the
//! digits themselves.

use formcheck_core::{CountryCode, ReasonCode};
use formcheck_tables::{CountryTables, NumberingPlan};

use crate::number::PhoneNumber;
use crate::scan::{scan, Scanned};

/// Longest digit string E.164 permits for calling code plus national number.
pub const E164_MAX_DIGITS: usize = 15;

enum State {
    Scan,
    SplitCountryCode(Scanned),
    SplitAreaCode {
        scanned: Scanned,
        plan: &'static NumberingPlan,
        national_start: usize,
    },
    AssignSubscriber {
        scanned: Scanned,
        plan: &'static NumberingPlan,
        area: (usize, usize),
    },
    Done(PhoneNumber),
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            Self::Scan => "scan",
            Self::SplitCountryCode(_) => "split_country_code",
            Self::SplitAreaCode { .. } => "split_area_code",
            Self::AssignSubscriber { .. } => "assign_subscriber",
            Self::Done(_) => "done",
        }
    }
}

pub(crate) fn parse(
    tables: &CountryTables,
    raw: &str,
    default_country: Option<&CountryCode>,
) -> Result<PhoneNumber, ReasonCode> {
    let mut state = State::Scan;
    loop {
        let step = state.name();
        let next = match state {
            State::Scan => scan(raw).map(State::SplitCountryCode),
            State::SplitCountryCode(scanned) => split_country_code(tables, scanned, default_country),
            State::SplitAreaCode {
                scanned,
                plan,
                national_start,
            } => split_area_code(scanned, plan, national_start),
            State::AssignSubscriber {
                scanned,
                plan,
                area,
            } => assign_subscriber(scanned, plan, area),
            State::Done(number) => return Ok(number),
        };
        match next {
            Ok(next) => {
                tracing::trace!(from = step, to = next.name(), "phone parse step");
                state = next;
            }
            Err(reason) => {
                tracing::trace!(step, reason = %reason, "phone parse rejected");
                return Err(reason);
            }
        }
    }
}

fn split_country_code(
    tables: &CountryTables,
    scanned: Scanned,
    default_country: Option<&CountryCode>,
) -> Result<State, ReasonCode> {
    let (plan, national_start) = if scanned.international {
        let plan = tables
            .plan_for_international(&scanned.digits)
            .ok_or(ReasonCode::BadCountry)?;
        let cc_len = plan.calling_code.len();
        // A written "(0)" right after the calling code is a redundant trunk.
        let skip = usize::from(scanned.trunk_marker == Some(cc_len));
        (plan, cc_len + skip)
    } else {
        let country = default_country.ok_or(ReasonCode::BadCountry)?;
        let plan = tables
            .plan_for_country(country.as_str())
            .ok_or(ReasonCode::BadCountry)?;
        let trunk_len = match plan.trunk_prefix {
            Some(trunk) if scanned.digits.starts_with(trunk) => trunk.len(),
            _ => 0,
        };
        (plan, trunk_len)
    };
    tracing::trace!(
        calling_code = plan.calling_code,
        country = plan.country,
        international = scanned.international,
        "calling code resolved"
    );
    Ok(State::SplitAreaCode {
        scanned,
        plan,
        national_start,
    })
}

fn split_area_code(
    scanned: Scanned,
    plan: &'static NumberingPlan,
    national_start: usize,
) -> Result<State, ReasonCode> {
    let national = scanned.digits.get(national_start..).unwrap_or_default();
    if national.is_empty() {
        return Err(ReasonCode::BadLength);
    }
    let area_len = plan.area_codes.area_len(national).ok_or(ReasonCode::BadFormat)?;
    if area_len >= national.len() {
        return Err(ReasonCode::BadLength);
    }
    Ok(State::AssignSubscriber {
        plan,
        area: (national_start, national_start + area_len),
        scanned,
    })
}

fn assign_subscriber(
    scanned: Scanned,
    plan: &'static NumberingPlan,
    (area_start, sub_start): (usize, usize),
) -> Result<State, ReasonCode> {
    let Scanned {
        digits,
        dashes,
        extension,
        ..
    } = scanned;

    let mut sub_end = digits.len();
    let mut extension = extension;
    if extension.is_none() && plan.dash_extension {
        if let Some(&dash) = dashes.iter().rev().find(|&&d| d > sub_start && d < digits.len()) {
            sub_end = dash;
            extension = Some(digits[dash..].to_string());
        }
    }

    let subscriber = &digits[sub_start..sub_end];
    if !(plan.subscriber_min..=plan.subscriber_max).contains(&subscriber.len()) {
        return Err(ReasonCode::BadLength);
    }
    let area = &digits[area_start..sub_start];
    if plan.calling_code.len() + area.len() + subscriber.len() > E164_MAX_DIGITS {
        return Err(ReasonCode::BadLength);
    }

    Ok(State::Done(PhoneNumber {
        country_calling_code: plan.calling_code.to_string(),
        area_code: (!area.is_empty()).then(|| area.to_string()),
        subscriber_number: subscriber.to_string(),
        extension,
    }))
}
