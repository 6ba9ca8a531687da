//! # National Identifiers
//!
//! Polish and Brazilian registry numbers. All are pure digit strings with
//! one or two trailing check digits computed from a weighted sum mod 11 or
//! mod 10. PESEL and Título Eleitoral additionally carry structure (an
//! encoded birth month, an issuing state) that is checked before the
//! checksum.

use formcheck_core::{compact, digit_values, NationalIdKind, ReasonCode, COMMON_SEPARATORS};

use crate::checksum::weighted_sum;

/// Validate a national identifier of the given variant.
pub fn check_national_id(kind: NationalIdKind, raw: &str) -> Result<String, ReasonCode> {
    let value = compact(raw, COMMON_SEPARATORS);
    let digits = digit_values(&value).ok_or(ReasonCode::BadFormat)?;
    let ok = match kind {
        NationalIdKind::PlNip => nip(&digits)?,
        NationalIdKind::PlPesel => pesel(&digits)?,
        NationalIdKind::PlRegon => regon(&digits)?,
        NationalIdKind::BrCpf => cpf(&digits)?,
        NationalIdKind::BrCnpj => cnpj(&digits)?,
        NationalIdKind::BrTituloEleitoral => titulo_eleitoral(&digits)?,
    };
    if !ok {
        return Err(ReasonCode::BadChecksum);
    }
    Ok(value)
}

fn require_len(digits: &[u32], lengths: &[usize]) -> Result<(), ReasonCode> {
    if lengths.contains(&digits.len()) {
        Ok(())
    } else {
        Err(ReasonCode::BadLength)
    }
}

/// `0` for remainders of 10, the remainder otherwise.
fn mod11_folded(sum: u32) -> u32 {
    sum % 11 % 10
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

// ─── Poland ─────────────────────────────────────────────────────────

fn nip(d: &[u32]) -> Result<bool, ReasonCode> {
    require_len(d, &[10])?;
    let r = weighted_sum(d, &[6, 5, 7, 2, 3, 4, 5, 6, 7]) % 11;
    Ok(r != 10 && r == d[9])
}

fn pesel(d: &[u32]) -> Result<bool, ReasonCode> {
    require_len(d, &[11])?;
    // The century is folded into the month: +80 (1800s), +0, +20, +40, +60.
    let month = (d[2] * 10 + d[3]) % 20;
    let day = d[4] * 10 + d[5];
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(ReasonCode::BadFormat);
    }
    let s = weighted_sum(d, &[1, 3, 7, 9, 1, 3, 7, 9, 1, 3]);
    Ok((10 - s % 10) % 10 == d[10])
}

fn regon(d: &[u32]) -> Result<bool, ReasonCode> {
    require_len(d, &[9, 14])?;
    let short = mod11_folded(weighted_sum(d, &[8, 9, 2, 3, 4, 5, 6, 7])) == d[8];
    if d.len() == 9 {
        return Ok(short);
    }
    let long = weighted_sum(d, &[2, 4, 8, 5, 0, 9, 7, 3, 6, 1, 2, 4, 8]);
    Ok(short && mod11_folded(long) == d[13])
}

// ─── Brazil ─────────────────────────────────────────────────────────

fn cpf(d: &[u32]) -> Result<bool, ReasonCode> {
    require_len(d, &[11])?;
    if all_same(d) {
        return Ok(false);
    }
    let first = weighted_sum(d, &[10, 9, 8, 7, 6, 5, 4, 3, 2]) * 10 % 11 % 10;
    let second = weighted_sum(d, &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2]) * 10 % 11 % 10;
    Ok(first == d[9] && second == d[10])
}

fn cnpj(d: &[u32]) -> Result<bool, ReasonCode> {
    require_len(d, &[14])?;
    if all_same(d) {
        return Ok(false);
    }
    let check = |weights: &[u32]| match weighted_sum(d, weights) % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    };
    let first = check(&[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);
    let second = check(&[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);
    Ok(first == d[12] && second == d[13])
}

/// Highest issuing state code (28 = voters abroad).
const TITULO_MAX_STATE: u32 = 28;

fn titulo_eleitoral(d: &[u32]) -> Result<bool, ReasonCode> {
    require_len(d, &[12])?;
    let state = d[8] * 10 + d[9];
    if !(1..=TITULO_MAX_STATE).contains(&state) {
        return Err(ReasonCode::BadFormat);
    }
    // São Paulo (01) and Minas Gerais (02) turn a zero check digit into 1.
    let fold = |sum: u32| match mod11_folded(sum) {
        0 if state <= 2 => 1,
        r => r,
    };
    let first = fold(weighted_sum(d, &[2, 3, 4, 5, 6, 7, 8, 9]));
    let second = fold(d[8] * 7 + d[9] * 8 + first * 9);
    Ok(first == d[10] && second == d[11])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(kind: NationalIdKind, raw: &str) -> Result<String, ReasonCode> {
        check_national_id(kind, raw)
    }

    // -- NIP --

    #[test]
    fn nip_valid() {
        assert_eq!(check(NationalIdKind::PlNip, "526-000-12-46"), Ok("5260001246".to_string()));
        assert!(check(NationalIdKind::PlNip, "7740001454").is_ok());
    }

    #[test]
    fn nip_reasons() {
        assert_eq!(check(NationalIdKind::PlNip, "5260001247"), Err(ReasonCode::BadChecksum));
        assert_eq!(check(NationalIdKind::PlNip, "526000124"), Err(ReasonCode::BadLength));
        assert_eq!(check(NationalIdKind::PlNip, "PL5260001246"), Err(ReasonCode::BadFormat));
    }

    // -- PESEL --

    #[test]
    fn pesel_valid_across_centuries() {
        assert!(check(NationalIdKind::PlPesel, "44051401359").is_ok());
        // Month 27: July 2002.
        assert!(check(NationalIdKind::PlPesel, "02270803624").is_ok());
    }

    #[test]
    fn pesel_reasons() {
        assert_eq!(check(NationalIdKind::PlPesel, "44051401358"), Err(ReasonCode::BadChecksum));
        assert_eq!(check(NationalIdKind::PlPesel, "4405140135"), Err(ReasonCode::BadLength));
        assert_eq!(check(NationalIdKind::PlPesel, "44131401359"), Err(ReasonCode::BadFormat));
        assert_eq!(check(NationalIdKind::PlPesel, "44053201359"), Err(ReasonCode::BadFormat));
    }

    // -- REGON --

    #[test]
    fn regon_short_and_long() {
        assert!(check(NationalIdKind::PlRegon, "123456785").is_ok());
        assert!(check(NationalIdKind::PlRegon, "192598184").is_ok());
        assert!(check(NationalIdKind::PlRegon, "12345678512347").is_ok());
    }

    #[test]
    fn regon_reasons() {
        assert_eq!(check(NationalIdKind::PlRegon, "123456786"), Err(ReasonCode::BadChecksum));
        assert_eq!(check(NationalIdKind::PlRegon, "12345678512348"), Err(ReasonCode::BadChecksum));
        assert_eq!(check(NationalIdKind::PlRegon, "1234567851"), Err(ReasonCode::BadLength));
    }

    // -- CPF --

    #[test]
    fn cpf_valid() {
        assert_eq!(check(NationalIdKind::BrCpf, "529.982.247-25"), Ok("52998224725".to_string()));
        assert!(check(NationalIdKind::BrCpf, "11144477735").is_ok());
    }

    #[test]
    fn cpf_rejects_repeated_digits() {
        assert_eq!(check(NationalIdKind::BrCpf, "11111111111"), Err(ReasonCode::BadChecksum));
        assert_eq!(check(NationalIdKind::BrCpf, "00000000000"), Err(ReasonCode::BadChecksum));
    }

    #[test]
    fn cpf_reasons() {
        assert_eq!(check(NationalIdKind::BrCpf, "52998224726"), Err(ReasonCode::BadChecksum));
        assert_eq!(check(NationalIdKind::BrCpf, "5299822472"), Err(ReasonCode::BadLength));
    }

    // -- CNPJ --

    #[test]
    fn cnpj_valid() {
        assert_eq!(
            check(NationalIdKind::BrCnpj, "11.222.333/0001-81"),
            Ok("11222333000181".to_string())
        );
        assert!(check(NationalIdKind::BrCnpj, "11444777000161").is_ok());
    }

    #[test]
    fn cnpj_reasons() {
        assert_eq!(check(NationalIdKind::BrCnpj, "11222333000182"), Err(ReasonCode::BadChecksum));
        assert_eq!(check(NationalIdKind::BrCnpj, "00000000000000"), Err(ReasonCode::BadChecksum));
        assert_eq!(check(NationalIdKind::BrCnpj, "1122233300018"), Err(ReasonCode::BadLength));
    }

    // -- Título Eleitoral --

    #[test]
    fn titulo_valid() {
        assert!(check(NationalIdKind::BrTituloEleitoral, "0043 5687 0906").is_ok());
        assert!(check(NationalIdKind::BrTituloEleitoral, "102385010671").is_ok());
        assert!(check(NationalIdKind::BrTituloEleitoral, "123456780191").is_ok());
    }

    #[test]
    fn titulo_reasons() {
        assert_eq!(
            check(NationalIdKind::BrTituloEleitoral, "004356870907"),
            Err(ReasonCode::BadChecksum)
        );
        assert_eq!(
            check(NationalIdKind::BrTituloEleitoral, "004356872906"),
            Err(ReasonCode::BadFormat)
        );
        assert_eq!(
            check(NationalIdKind::BrTituloEleitoral, "004356870006"),
            Err(ReasonCode::BadFormat)
        );
        assert_eq!(
            check(NationalIdKind::BrTituloEleitoral, "00435687090"),
            Err(ReasonCode::BadLength)
        );
    }
}
