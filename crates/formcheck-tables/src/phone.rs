//! # Telephone Numbering Plans
//!
//! One [`NumberingPlan`] per country: its calling code, national trunk
//! prefix, how the area code is split off, and the subscriber length
//! bounds. Countries sharing a calling code (`+1`, `+7`) list the primary
//! plan first; calling-code lookups resolve to the first entry.
//!
//! ## Area codes
//!
//! [`AreaCodeRule::Prefixes`] is a length table: the longest listed prefix
//! of the national number decides how many digits form the area code. A
//! one-digit entry sets the length for its whole range and longer entries
//! carve out the exceptions, so `("6", 4)` with `("69", 2)` for Germany
//! reads "codes starting with 6 have four digits unless a longer entry
//! says otherwise".
//! Every range a plan accepts has an entry; numbers matching no prefix
//! (a stray leading `0`, say) are rejected.
//!
//! Plans whose area codes vary too much to tabulate use
//! [`AreaCodeRule::None`] with the whole national number as the
//! subscriber range. They validate and render the number as one group.

use serde::Serialize;

/// How the area code is separated from the subscriber number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaCodeRule {
    /// Closed numbering plan without area codes.
    None,
    /// Every national number starts with an area code of this length.
    Fixed(usize),
    /// Longest-prefix length table.
    Prefixes(&'static [(&'static str, usize)]),
}

impl AreaCodeRule {
    /// Length of the area code at the start of `national`. `Some(0)` means
    /// the plan has no area codes; `None` means no listed prefix matches.
    /// Whether digits remain for the subscriber is the caller's concern.
    pub fn area_len(&self, national: &str) -> Option<usize> {
        match self {
            Self::None => Some(0),
            Self::Fixed(len) => Some(*len),
            Self::Prefixes(entries) => entries
                .iter()
                .filter(|(prefix, _)| national.starts_with(prefix))
                .max_by_key(|(prefix, _)| prefix.len())
                .map(|(_, len)| *len),
        }
    }
}

/// Numbering plan of one country.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumberingPlan {
    /// ISO 3166-1 alpha-2 country.
    pub country: &'static str,
    /// International calling code without `+`.
    pub calling_code: &'static str,
    /// Digits dialled before the area code inside the country.
    pub trunk_prefix: Option<&'static str>,
    /// Area code split rule.
    pub area_codes: AreaCodeRule,
    /// Minimum subscriber digits (area code and extension excluded).
    pub subscriber_min: usize,
    /// Maximum subscriber digits (area code and extension excluded).
    pub subscriber_max: usize,
    /// Whether a `-` inside the subscriber part marks the extension
    /// (DIN 5008 convention).
    pub dash_extension: bool,
}

impl NumberingPlan {
    const fn new(
        country: &'static str,
        calling_code: &'static str,
        trunk_prefix: Option<&'static str>,
        area_codes: AreaCodeRule,
        subscriber_min: usize,
        subscriber_max: usize,
    ) -> Self {
        Self {
            country,
            calling_code,
            trunk_prefix,
            area_codes,
            subscriber_min,
            subscriber_max,
            dash_extension: false,
        }
    }

    const fn din_5008(self) -> Self {
        Self {
            dash_extension: true,
            ..self
        }
    }
}

const T0: Option<&str> = Some("0");
const NO_AREA: AreaCodeRule = AreaCodeRule::None;

// ─── Area-code tables ────────────────────────────────────────────────

const DE_AREA_CODES: &[(&str, usize)] = &[
    ("30", 2), ("40", 2), ("69", 2), ("89", 2),
    ("1", 3), ("15", 4), ("16", 3), ("17", 3), ("18", 4),
    ("700", 3), ("800", 3), ("900", 3), ("906", 3),
    ("2", 4), ("201", 3), ("202", 3), ("203", 3), ("208", 3), ("209", 3), ("211", 3),
    ("212", 3), ("214", 3), ("221", 3), ("228", 3), ("231", 3), ("234", 3), ("241", 3),
    ("251", 3), ("261", 3), ("271", 3), ("281", 3), ("291", 3),
    ("3", 4), ("331", 3), ("335", 3), ("340", 3), ("341", 3), ("345", 3), ("351", 3),
    ("355", 3), ("361", 3), ("365", 3), ("371", 3), ("375", 3), ("381", 3), ("385", 3),
    ("391", 3), ("395", 3),
    // Eastern five-digit blocks.
    ("3320", 5), ("3330", 5), ("3340", 5), ("3360", 5), ("3370", 5), ("3380", 5), ("3390", 5),
    ("3420", 5), ("3430", 5), ("3440", 5), ("3460", 5), ("3470", 5), ("3480", 5), ("3490", 5),
    ("3520", 5), ("3530", 5), ("3540", 5), ("3560", 5), ("3570", 5), ("3580", 5), ("3590", 5),
    ("3620", 5), ("3630", 5), ("3640", 5), ("3660", 5), ("3670", 5), ("3680", 5), ("3690", 5),
    ("3720", 5), ("3730", 5), ("3740", 5), ("3760", 5), ("3770", 5), ("3780", 5), ("3790", 5),
    ("3820", 5), ("3830", 5), ("3840", 5), ("3860", 5), ("3870", 5), ("3880", 5), ("3890", 5),
    ("3920", 5), ("3930", 5), ("3940", 5), ("3960", 5), ("3970", 5), ("3980", 5), ("3990", 5),
    ("4", 4), ("421", 3), ("431", 3), ("441", 3), ("451", 3), ("461", 3), ("471", 3),
    ("481", 3), ("491", 3),
    ("5", 4), ("511", 3), ("521", 3), ("531", 3), ("541", 3), ("551", 3), ("561", 3),
    ("571", 3), ("581", 3), ("591", 3),
    ("6", 4), ("611", 3), ("621", 3), ("631", 3), ("641", 3), ("651", 3), ("661", 3),
    ("671", 3), ("681", 3),
    ("7", 4), ("711", 3), ("721", 3), ("731", 3), ("741", 3), ("751", 3), ("761", 3),
    ("771", 3), ("781", 3), ("791", 3),
    ("8", 4), ("821", 3), ("831", 3), ("841", 3), ("851", 3), ("861", 3), ("871", 3),
    ("881", 3),
    ("9", 4), ("911", 3), ("921", 3), ("931", 3), ("941", 3), ("951", 3), ("961", 3),
    ("971", 3), ("981", 3), ("991", 3),
];

const AT_AREA_CODES: &[(&str, usize)] = &[
    ("1", 1),
    ("2", 4), ("3", 4), ("4", 4), ("5", 4), ("6", 4), ("7", 4),
    ("316", 3), ("463", 3), ("512", 3), ("662", 3), ("732", 3),
    ("650", 3), ("660", 3), ("664", 3), ("676", 3), ("677", 3), ("678", 3),
    ("680", 3), ("681", 3), ("688", 3), ("699", 3), ("720", 3), ("780", 3),
    ("8", 3), ("9", 3),
];

const CH_AREA_CODES: &[(&str, usize)] = &[
    ("2", 2), ("3", 2), ("4", 2), ("5", 2), ("6", 2), ("7", 2), ("8", 2), ("9", 2),
    ("80", 3), ("84", 3), ("90", 3),
];

const GB_AREA_CODES: &[(&str, usize)] = &[
    ("1", 4), ("113", 3), ("114", 3), ("115", 3), ("116", 3), ("117", 3), ("118", 3),
    ("121", 3), ("131", 3), ("141", 3), ("151", 3), ("161", 3), ("191", 3),
    ("13397", 5), ("13398", 5), ("13873", 5), ("15242", 5), ("15394", 5), ("15395", 5),
    ("15396", 5), ("16973", 5), ("16974", 5), ("16977", 5), ("17683", 5), ("17684", 5),
    ("17687", 5), ("19467", 5),
    ("2", 2), ("3", 3), ("5", 2), ("7", 4), ("70", 2), ("8", 3), ("9", 3),
];

const NL_AREA_CODES: &[(&str, usize)] = &[
    ("1", 3), ("10", 2), ("13", 2), ("15", 2),
    ("2", 3), ("20", 2), ("23", 2), ("24", 2), ("26", 2),
    ("3", 3), ("30", 2), ("33", 2), ("35", 2), ("36", 2), ("38", 2),
    ("4", 3), ("40", 2), ("43", 2), ("45", 2), ("46", 2),
    ("5", 3), ("50", 2), ("53", 2), ("55", 2), ("58", 2),
    ("6", 1), ("7", 2), ("8", 2), ("800", 3), ("9", 3),
];

const BE_AREA_CODES: &[(&str, usize)] = &[
    ("1", 2), ("2", 1), ("3", 1), ("4", 1), ("46", 3), ("47", 3), ("48", 3), ("49", 3),
    ("5", 2), ("6", 2), ("7", 2), ("8", 2), ("800", 3), ("9", 1), ("90", 3),
];

const SE_AREA_CODES: &[(&str, usize)] = &[
    ("1", 3), ("11", 2), ("13", 2), ("16", 2), ("18", 2), ("19", 2),
    ("2", 3), ("21", 2), ("23", 2), ("26", 2),
    ("3", 3), ("31", 2), ("33", 2), ("35", 2), ("36", 2),
    ("4", 3), ("40", 2), ("42", 2), ("44", 2), ("46", 2),
    ("5", 3), ("54", 2), ("6", 3), ("60", 2), ("63", 2),
    ("7", 2), ("8", 1), ("9", 3), ("90", 2),
];

const IE_AREA_CODES: &[(&str, usize)] = &[
    ("1", 1), ("2", 2), ("4", 2), ("402", 3), ("404", 3), ("5", 2), ("504", 3), ("505", 3),
    ("6", 2), ("7", 2), ("8", 2), ("9", 2),
];

const FI_AREA_CODES: &[(&str, usize)] = &[
    ("1", 2), ("2", 1), ("3", 1), ("4", 2), ("5", 1), ("50", 2), ("6", 1), ("7", 3),
    ("8", 1), ("9", 1),
];

const SK_AREA_CODES: &[(&str, usize)] =
    &[("2", 1), ("3", 2), ("4", 2), ("5", 2), ("8", 3), ("9", 3)];

const HU_AREA_CODES: &[(&str, usize)] = &[
    ("1", 1), ("2", 2), ("3", 2), ("4", 2), ("5", 2), ("6", 2), ("7", 2), ("8", 2), ("9", 2),
];

const RO_AREA_CODES: &[(&str, usize)] = &[
    ("2", 3), ("21", 2), ("3", 3), ("31", 2), ("7", 3), ("8", 3), ("9", 3),
];

const LT_AREA_CODES: &[(&str, usize)] = &[
    ("3", 3), ("37", 2), ("4", 3), ("41", 2), ("45", 2), ("46", 2), ("5", 1), ("6", 3),
    ("7", 3), ("8", 3), ("9", 3),
];

const HR_AREA_CODES: &[(&str, usize)] = &[
    ("1", 1), ("2", 2), ("3", 2), ("4", 2), ("5", 2), ("6", 2), ("7", 2), ("8", 3), ("9", 2),
];

const SI_AREA_CODES: &[(&str, usize)] = &[
    ("1", 1), ("2", 1), ("3", 1), ("30", 2), ("31", 2), ("4", 1), ("40", 2), ("41", 2),
    ("5", 1), ("51", 2), ("6", 2), ("7", 1), ("70", 2), ("71", 2), ("8", 2), ("9", 2),
];

const BG_AREA_CODES: &[(&str, usize)] = &[
    ("2", 1),
    ("3", 3), ("32", 2), ("38", 2),
    ("4", 3), ("42", 2), ("44", 2), ("46", 2),
    ("5", 3), ("52", 2), ("54", 2), ("56", 2), ("58", 2),
    ("6", 3), ("62", 2), ("64", 2), ("66", 2), ("68", 2),
    ("7", 3), ("76", 2),
    ("8", 3), ("82", 2), ("84", 2), ("86", 2), ("87", 2), ("88", 2), ("89", 2),
    ("9", 3), ("92", 2), ("94", 2), ("96", 2), ("98", 2), ("99", 2),
];

const AE_AREA_CODES: &[(&str, usize)] = &[
    ("2", 1), ("3", 1), ("4", 1), ("5", 2), ("6", 1), ("600", 3), ("7", 1), ("8", 3),
    ("9", 1),
];

const CN_AREA_CODES: &[(&str, usize)] = &[
    ("1", 3), ("10", 2), ("2", 2), ("3", 3), ("4", 3), ("5", 3), ("6", 3), ("7", 3),
    ("8", 3), ("9", 3),
];

const JP_AREA_CODES: &[(&str, usize)] = &[
    ("1", 2), ("120", 3), ("2", 2), ("3", 1), ("4", 2), ("5", 2), ("6", 1), ("7", 2),
    ("8", 2), ("800", 3), ("9", 2),
];

const KR_AREA_CODES: &[(&str, usize)] = &[
    ("1", 2), ("2", 1), ("3", 2), ("4", 2), ("5", 2), ("6", 2), ("70", 2), ("80", 3),
];

const NZ_AREA_CODES: &[(&str, usize)] = &[
    ("2", 2), ("3", 1), ("4", 1), ("6", 1), ("7", 1), ("8", 3), ("9", 1),
];

const AU_AREA_CODES: &[(&str, usize)] =
    &[("1", 3), ("2", 1), ("3", 1), ("4", 3), ("7", 1), ("8", 1)];

// ─── Plans ───────────────────────────────────────────────────────────

/// All numbering plans, ordered by calling code.
pub const NUMBERING_PLANS: &[NumberingPlan] = &[
    // North American Numbering Plan.
    NumberingPlan::new("US", "1", None, AreaCodeRule::Fixed(3), 7, 7),
    NumberingPlan::new("CA", "1", None, AreaCodeRule::Fixed(3), 7, 7),
    NumberingPlan::new("DO", "1", None, AreaCodeRule::Fixed(3), 7, 7),
    NumberingPlan::new("LC", "1", None, AreaCodeRule::Fixed(3), 7, 7),
    NumberingPlan::new("VG", "1", None, AreaCodeRule::Fixed(3), 7, 7),
    NumberingPlan::new("RU", "7", Some("8"), AreaCodeRule::Fixed(3), 7, 7),
    NumberingPlan::new("KZ", "7", Some("8"), AreaCodeRule::Fixed(3), 7, 7),
    NumberingPlan::new("EG", "20", T0, NO_AREA, 8, 10),
    NumberingPlan::new("ZA", "27", T0, AreaCodeRule::Fixed(2), 7, 7),
    NumberingPlan::new("GR", "30", None, NO_AREA, 10, 10),
    NumberingPlan::new("NL", "31", T0, AreaCodeRule::Prefixes(NL_AREA_CODES), 4, 8),
    NumberingPlan::new("BE", "32", T0, AreaCodeRule::Prefixes(BE_AREA_CODES), 5, 7),
    NumberingPlan::new("FR", "33", T0, AreaCodeRule::Fixed(1), 8, 8),
    NumberingPlan::new("ES", "34", None, NO_AREA, 9, 9),
    NumberingPlan::new("HU", "36", Some("06"), AreaCodeRule::Prefixes(HU_AREA_CODES), 6, 7),
    NumberingPlan::new("IT", "39", None, NO_AREA, 6, 11),
    NumberingPlan::new("VA", "39", None, NO_AREA, 6, 11),
    NumberingPlan::new("RO", "40", T0, AreaCodeRule::Prefixes(RO_AREA_CODES), 6, 7),
    NumberingPlan::new("CH", "41", T0, AreaCodeRule::Prefixes(CH_AREA_CODES), 6, 7).din_5008(),
    NumberingPlan::new("AT", "43", T0, AreaCodeRule::Prefixes(AT_AREA_CODES), 3, 11).din_5008(),
    NumberingPlan::new("GB", "44", T0, AreaCodeRule::Prefixes(GB_AREA_CODES), 4, 8),
    NumberingPlan::new("DK", "45", None, NO_AREA, 8, 8),
    NumberingPlan::new("SE", "46", T0, AreaCodeRule::Prefixes(SE_AREA_CODES), 5, 8),
    NumberingPlan::new("NO", "47", None, NO_AREA, 8, 8),
    NumberingPlan::new("PL", "48", None, NO_AREA, 9, 9),
    NumberingPlan::new("DE", "49", T0, AreaCodeRule::Prefixes(DE_AREA_CODES), 3, 9).din_5008(),
    NumberingPlan::new("PE", "51", T0, NO_AREA, 8, 9),
    NumberingPlan::new("MX", "52", None, NO_AREA, 10, 10),
    NumberingPlan::new("AR", "54", T0, NO_AREA, 10, 11),
    NumberingPlan::new("BR", "55", T0, AreaCodeRule::Fixed(2), 8, 9),
    NumberingPlan::new("CL", "56", None, NO_AREA, 9, 9),
    NumberingPlan::new("CO", "57", None, NO_AREA, 10, 10),
    NumberingPlan::new("MY", "60", T0, NO_AREA, 8, 10),
    NumberingPlan::new("AU", "61", T0, AreaCodeRule::Prefixes(AU_AREA_CODES), 6, 8),
    NumberingPlan::new("ID", "62", T0, NO_AREA, 8, 12),
    NumberingPlan::new("PH", "63", T0, NO_AREA, 8, 10),
    NumberingPlan::new("NZ", "64", T0, AreaCodeRule::Prefixes(NZ_AREA_CODES), 6, 8),
    NumberingPlan::new("SG", "65", None, NO_AREA, 8, 8),
    NumberingPlan::new("TH", "66", T0, NO_AREA, 8, 9),
    NumberingPlan::new("JP", "81", T0, AreaCodeRule::Prefixes(JP_AREA_CODES), 6, 8),
    NumberingPlan::new("KR", "82", T0, AreaCodeRule::Prefixes(KR_AREA_CODES), 7, 8),
    NumberingPlan::new("VN", "84", T0, NO_AREA, 9, 10),
    NumberingPlan::new("CN", "86", T0, AreaCodeRule::Prefixes(CN_AREA_CODES), 7, 8),
    NumberingPlan::new("TR", "90", T0, AreaCodeRule::Fixed(3), 7, 7),
    NumberingPlan::new("IN", "91", T0, NO_AREA, 10, 10),
    NumberingPlan::new("PK", "92", T0, NO_AREA, 9, 10),
    NumberingPlan::new("LK", "94", T0, NO_AREA, 9, 9),
    NumberingPlan::new("MA", "212", T0, NO_AREA, 9, 9),
    NumberingPlan::new("TN", "216", None, NO_AREA, 8, 8),
    NumberingPlan::new("LY", "218", T0, NO_AREA, 8, 9),
    NumberingPlan::new("MR", "222", None, NO_AREA, 8, 8),
    NumberingPlan::new("MU", "230", None, NO_AREA, 7, 8),
    NumberingPlan::new("GH", "233", T0, NO_AREA, 9, 9),
    NumberingPlan::new("NG", "234", T0, NO_AREA, 8, 10),
    NumberingPlan::new("ST", "239", None, NO_AREA, 7, 7),
    NumberingPlan::new("SC", "248", None, NO_AREA, 7, 7),
    NumberingPlan::new("SD", "249", T0, NO_AREA, 9, 9),
    NumberingPlan::new("ET", "251", T0, NO_AREA, 9, 9),
    NumberingPlan::new("SO", "252", T0, NO_AREA, 7, 9),
    NumberingPlan::new("DJ", "253", None, NO_AREA, 8, 8),
    NumberingPlan::new("KE", "254", T0, NO_AREA, 9, 9),
    NumberingPlan::new("TZ", "255", T0, NO_AREA, 9, 9),
    NumberingPlan::new("UG", "256", T0, NO_AREA, 9, 9),
    NumberingPlan::new("BI", "257", None, NO_AREA, 8, 8),
    NumberingPlan::new("FO", "298", None, NO_AREA, 6, 6),
    NumberingPlan::new("GL", "299", None, NO_AREA, 6, 6),
    NumberingPlan::new("GI", "350", None, NO_AREA, 8, 8),
    NumberingPlan::new("PT", "351", None, NO_AREA, 9, 9),
    NumberingPlan::new("LU", "352", None, NO_AREA, 4, 11),
    NumberingPlan::new("IE", "353", T0, AreaCodeRule::Prefixes(IE_AREA_CODES), 5, 7),
    NumberingPlan::new("IS", "354", None, NO_AREA, 7, 9),
    NumberingPlan::new("AL", "355", T0, NO_AREA, 8, 9),
    NumberingPlan::new("MT", "356", None, NO_AREA, 8, 8),
    NumberingPlan::new("CY", "357", None, NO_AREA, 8, 8),
    NumberingPlan::new("FI", "358", T0, AreaCodeRule::Prefixes(FI_AREA_CODES), 4, 10),
    NumberingPlan::new("BG", "359", T0, AreaCodeRule::Prefixes(BG_AREA_CODES), 5, 8),
    NumberingPlan::new("LT", "370", Some("8"), AreaCodeRule::Prefixes(LT_AREA_CODES), 5, 7),
    NumberingPlan::new("LV", "371", None, NO_AREA, 8, 8),
    NumberingPlan::new("EE", "372", None, NO_AREA, 7, 8),
    NumberingPlan::new("MD", "373", T0, NO_AREA, 8, 8),
    NumberingPlan::new("BY", "375", Some("80"), NO_AREA, 9, 9),
    NumberingPlan::new("AD", "376", None, NO_AREA, 6, 9),
    NumberingPlan::new("MC", "377", None, NO_AREA, 8, 9),
    NumberingPlan::new("SM", "378", None, NO_AREA, 6, 10),
    NumberingPlan::new("UA", "380", T0, NO_AREA, 9, 9),
    NumberingPlan::new("RS", "381", T0, NO_AREA, 8, 10),
    NumberingPlan::new("ME", "382", T0, NO_AREA, 8, 9),
    NumberingPlan::new("XK", "383", T0, NO_AREA, 8, 9),
    NumberingPlan::new("HR", "385", T0, AreaCodeRule::Prefixes(HR_AREA_CODES), 6, 8),
    NumberingPlan::new("SI", "386", T0, AreaCodeRule::Prefixes(SI_AREA_CODES), 5, 7),
    NumberingPlan::new("BA", "387", T0, NO_AREA, 8, 9),
    NumberingPlan::new("MK", "389", T0, NO_AREA, 8, 8),
    NumberingPlan::new("CZ", "420", None, NO_AREA, 9, 9),
    NumberingPlan::new("SK", "421", T0, AreaCodeRule::Prefixes(SK_AREA_CODES), 6, 8),
    NumberingPlan::new("LI", "423", None, NO_AREA, 7, 7).din_5008(),
    NumberingPlan::new("FK", "500", None, NO_AREA, 5, 5),
    NumberingPlan::new("GT", "502", None, NO_AREA, 8, 8),
    NumberingPlan::new("SV", "503", None, NO_AREA, 8, 8),
    NumberingPlan::new("NI", "505", None, NO_AREA, 8, 8),
    NumberingPlan::new("CR", "506", None, NO_AREA, 8, 8),
    NumberingPlan::new("UY", "598", None, NO_AREA, 8, 8),
    NumberingPlan::new("TL", "670", None, NO_AREA, 7, 8),
    NumberingPlan::new("HK", "852", None, NO_AREA, 8, 8),
    NumberingPlan::new("BD", "880", T0, NO_AREA, 8, 10),
    NumberingPlan::new("TW", "886", T0, NO_AREA, 8, 9),
    NumberingPlan::new("LB", "961", T0, NO_AREA, 7, 8),
    NumberingPlan::new("JO", "962", T0, NO_AREA, 8, 9),
    NumberingPlan::new("IQ", "964", T0, NO_AREA, 8, 10),
    NumberingPlan::new("KW", "965", None, NO_AREA, 7, 8),
    NumberingPlan::new("SA", "966", T0, NO_AREA, 8, 9),
    NumberingPlan::new("OM", "968", None, NO_AREA, 8, 8),
    NumberingPlan::new("PS", "970", T0, NO_AREA, 8, 9),
    NumberingPlan::new("AE", "971", T0, AreaCodeRule::Prefixes(AE_AREA_CODES), 5, 7),
    NumberingPlan::new("IL", "972", T0, NO_AREA, 8, 9),
    NumberingPlan::new("BH", "973", None, NO_AREA, 8, 8),
    NumberingPlan::new("QA", "974", None, NO_AREA, 7, 8),
    NumberingPlan::new("MN", "976", None, NO_AREA, 8, 8),
    NumberingPlan::new("AZ", "994", T0, NO_AREA, 9, 9),
    NumberingPlan::new("GE", "995", T0, NO_AREA, 9, 9),
];
