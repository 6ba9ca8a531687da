//! # Rendering
//!
//! Nine fixed layouts. National layouts drop the calling code and put the
//! destination's trunk prefix in front of the area code (or of the
//! subscriber number when the plan has no area codes); international
//! layouts always start with `+<cc>`. The layouts below render
//! `{49, "89", "1234", ext "5678"}`.
//!
//! | Style | Example |
//! |-------|---------|
//! | `E123National` | `(089) 12345678` |
//! | `E123International` | `+49 89 12345678` |
//! | `Din5008National` | `089 1234-5678` |
//! | `Din5008International` | `+49 89 1234-5678` |
//! | `Rfc3966` | `tel:+49-89-1234;ext=5678` |
//! | `MicrosoftCanonical` | `+49 (89) 12345678` |
//! | `UrlSafe` | `+49-89-1234-5678` |
//! | `CommonNational` | `(089) 1234 - 5678` |
//! | `CommonInternational` | `+49 (0)89 1234 - 5678` |
//!
//! ## Extensions
//!
//! Five layouts append the extension after a dash. The parser reads that
//! dash as an extension marker only in DIN 5008 plans (DE, AT, CH, LI);
//! elsewhere it is a group separator and the extension digits run into
//! the subscriber number. Numbers with an extension outside those plans
//! read back only from `Rfc3966` (`;ext=`) or from input written with
//! `x`/`ext`.

use std::str::FromStr;

use formcheck_core::ValidationError;
use serde::{Deserialize, Serialize};

use crate::number::PhoneNumber;

/// A rendering layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneFormatStyle {
    /// ITU-T E.123 national notation.
    E123National,
    /// ITU-T E.123 international notation.
    E123International,
    /// DIN 5008 national notation. The `-<ext>` suffix reads back in
    /// DIN 5008 plans only.
    Din5008National,
    /// DIN 5008 international notation. The `-<ext>` suffix reads back in
    /// DIN 5008 plans only.
    Din5008International,
    /// RFC 3966 `tel:` URI.
    Rfc3966,
    /// Microsoft canonical address format.
    MicrosoftCanonical,
    /// Dash-only layout safe in URLs. The `-<ext>` suffix reads back in
    /// DIN 5008 plans only.
    UrlSafe,
    /// Common national notation. The ` - <ext>` suffix reads back in
    /// DIN 5008 plans only.
    CommonNational,
    /// Common international notation. The ` - <ext>` suffix reads back in
    /// DIN 5008 plans only.
    CommonInternational,
}

impl PhoneFormatStyle {
    /// All styles in declaration order.
    pub fn all() -> &'static [PhoneFormatStyle] {
        &[
            Self::E123National,
            Self::E123International,
            Self::Din5008National,
            Self::Din5008International,
            Self::Rfc3966,
            Self::MicrosoftCanonical,
            Self::UrlSafe,
            Self::CommonNational,
            Self::CommonInternational,
        ]
    }

    /// Stable snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E123National => "e123_national",
            Self::E123International => "e123_international",
            Self::Din5008National => "din5008_national",
            Self::Din5008International => "din5008_international",
            Self::Rfc3966 => "rfc3966",
            Self::MicrosoftCanonical => "microsoft_canonical",
            Self::UrlSafe => "url_safe",
            Self::CommonNational => "common_national",
            Self::CommonInternational => "common_international",
        }
    }

    /// Whether the layout omits the calling code.
    pub fn is_national(&self) -> bool {
        matches!(
            self,
            Self::E123National | Self::Din5008National | Self::CommonNational
        )
    }
}

impl std::fmt::Display for PhoneFormatStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the snake_case name, the CamelCase variant name, or kebab-case.
impl FromStr for PhoneFormatStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Self::all()
            .iter()
            .copied()
            .find(|style| style.as_str().replace('_', "") == key)
            .ok_or_else(|| ValidationError::UnknownPhoneFormatStyle(s.to_string()))
    }
}

/// Trunk prefix of the calling code's primary plan, if it has one.
fn trunk_for(calling_code: &str) -> &'static str {
    formcheck_tables::tables()
        .plan_for_international(calling_code)
        .filter(|plan| plan.calling_code == calling_code)
        .and_then(|plan| plan.trunk_prefix)
        .unwrap_or("")
}

pub(crate) fn render(number: &PhoneNumber, style: PhoneFormatStyle) -> String {
    let cc = number.country_calling_code.as_str();
    let area = number.area_code.as_deref().filter(|a| !a.is_empty());
    let sub = number.subscriber_number.as_str();
    let ext = number.extension.as_deref().filter(|e| !e.is_empty());
    let trunk = trunk_for(cc);

    // Subscriber with the extension run straight on.
    let joined = || format!("{sub}{}", ext.unwrap_or(""));
    let suffixed = |sep: &str| match ext {
        Some(e) => format!("{sub}{sep}{e}"),
        None => sub.to_string(),
    };

    use PhoneFormatStyle as S;
    match (style, area) {
        (S::E123National, Some(a)) => format!("({trunk}{a}) {}", joined()),
        (S::E123National, None) => format!("{trunk}{}", joined()),
        (S::E123International, Some(a)) => format!("+{cc} {a} {}", joined()),
        (S::E123International, None) => format!("+{cc} {}", joined()),
        (S::Din5008National, Some(a)) => format!("{trunk}{a} {}", suffixed("-")),
        (S::Din5008National, None) => format!("{trunk}{}", suffixed("-")),
        (S::Din5008International, Some(a)) => format!("+{cc} {a} {}", suffixed("-")),
        (S::Din5008International, None) => format!("+{cc} {}", suffixed("-")),
        (S::Rfc3966, Some(a)) => format!("tel:+{cc}-{a}-{}", suffixed(";ext=")),
        (S::Rfc3966, None) => format!("tel:+{cc}-{}", suffixed(";ext=")),
        (S::MicrosoftCanonical, Some(a)) => format!("+{cc} ({a}) {}", joined()),
        (S::MicrosoftCanonical, None) => format!("+{cc} {}", joined()),
        (S::UrlSafe, Some(a)) => format!("+{cc}-{a}-{}", suffixed("-")),
        (S::UrlSafe, None) => format!("+{cc}-{}", suffixed("-")),
        (S::CommonNational, Some(a)) => format!("({trunk}{a}) {}", suffixed(" - ")),
        (S::CommonNational, None) => format!("{trunk}{}", suffixed(" - ")),
        (S::CommonInternational, Some(a)) if !trunk.is_empty() => {
            format!("+{cc} ({trunk}){a} {}", suffixed(" - "))
        }
        (S::CommonInternational, Some(a)) => format!("+{cc} {a} {}", suffixed(" - ")),
        (S::CommonInternational, None) => format!("+{cc} {}", suffixed(" - ")),
    }
}
