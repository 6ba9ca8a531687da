//! # Scan
//!
//! First stage of the parser: reduce the raw input to its digits while
//! remembering the few formatting facts later stages need.
//!
//! Accepted: digits, a leading `+`, the separators space `-` `/` `.`
//! and balanced parentheses, an optional `tel:` scheme, and one extension
//! marker (`x`, `ext`, `ext.`, `#`, `;ext=`, case-insensitive) followed by
//! digits. Anything else rejects the whole input.

use formcheck_core::ReasonCode;

const EXTENSION_MARKERS: &[&str] = &[";ext=", "ext.", "ext", "x", "#"];

/// Result of scanning a raw number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Scanned {
    /// Dialled with `+` or `00`.
    pub international: bool,
    /// All digits before the extension, `00` prefix removed.
    pub digits: String,
    /// Digit offsets at which a `-` appeared.
    pub dashes: Vec<usize>,
    /// Digit offset of a `(0)` group, if one was written.
    pub trunk_marker: Option<usize>,
    /// Explicitly marked extension.
    pub extension: Option<String>,
}

/// Split off the extension at the first marker, if any.
fn split_extension(input: &str) -> Result<(&str, Option<String>), ReasonCode> {
    let lower = input.to_ascii_lowercase();
    for (idx, _) in lower.char_indices() {
        let Some(marker) = EXTENSION_MARKERS.iter().find(|m| lower[idx..].starts_with(**m)) else {
            continue;
        };
        let ext = input[idx + marker.len()..].trim();
        if ext.is_empty() || !ext.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ReasonCode::BadFormat);
        }
        return Ok((&input[..idx], Some(ext.to_string())));
    }
    Ok((input, None))
}

pub(crate) fn scan(raw: &str) -> Result<Scanned, ReasonCode> {
    let mut input = raw.trim();
    if input.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("tel:")) {
        input = input[4..].trim_start();
    }
    let (main, extension) = split_extension(input)?;

    let mut international = false;
    let mut digits = String::with_capacity(main.len());
    let mut dashes = Vec::new();
    let mut trunk_marker = None;
    let mut depth = 0usize;
    let mut group_start = 0usize;

    for (i, c) in main.trim_end().char_indices() {
        match c {
            '0'..='9' => digits.push(c),
            '+' if i == 0 => international = true,
            '-' => dashes.push(digits.len()),
            ' ' | '/' | '.' => {}
            '(' => {
                depth += 1;
                group_start = digits.len();
            }
            ')' => {
                depth = depth.checked_sub(1).ok_or(ReasonCode::BadFormat)?;
                if &digits[group_start..] == "0" && trunk_marker.is_none() {
                    trunk_marker = Some(group_start);
                }
            }
            _ => return Err(ReasonCode::BadFormat),
        }
    }
    if depth != 0 {
        return Err(ReasonCode::BadFormat);
    }

    if !international && digits.starts_with("00") {
        international = true;
        digits.drain(..2);
        for d in &mut dashes {
            *d = d.saturating_sub(2);
        }
        trunk_marker = trunk_marker.and_then(|t| t.checked_sub(2));
    }
    if digits.is_empty() {
        return Err(ReasonCode::BadFormat);
    }

    Ok(Scanned {
        international,
        digits,
        dashes,
        trunk_marker,
        extension,
    })
}
