//! # Identifier Kinds — Single Source of Truth
//!
//! The closed catalogue of identifier families formcheck validates. Each
//! kind owns exactly one checksum algorithm and one canonicalization rule;
//! the dispatcher in `formcheck-ident` matches exhaustively on this enum.
//!
//! Kinds have stable snake_case names used on the command line, in
//! configuration files and in serialized output. National identifiers are
//! named `national_id:<variant>`, e.g. `national_id:pl_pesel`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// National identifier variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NationalIdKind {
    /// Polish tax identification number (NIP), 10 digits.
    PlNip,
    /// Polish personal identification number (PESEL), 11 digits.
    PlPesel,
    /// Polish business registry number (REGON), 9 or 14 digits.
    PlRegon,
    /// Brazilian individual taxpayer registry (CPF), 11 digits.
    BrCpf,
    /// Brazilian company registry (CNPJ), 14 digits.
    BrCnpj,
    /// Brazilian voter registration (Título Eleitoral), 12 digits.
    BrTituloEleitoral,
}

impl NationalIdKind {
    /// All national identifier variants.
    pub fn all() -> &'static [NationalIdKind] {
        &[
            Self::PlNip,
            Self::PlPesel,
            Self::PlRegon,
            Self::BrCpf,
            Self::BrCnpj,
            Self::BrTituloEleitoral,
        ]
    }

    /// The canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlNip => "pl_nip",
            Self::PlPesel => "pl_pesel",
            Self::PlRegon => "pl_regon",
            Self::BrCpf => "br_cpf",
            Self::BrCnpj => "br_cnpj",
            Self::BrTituloEleitoral => "br_titulo_eleitoral",
        }
    }
}

impl std::fmt::Display for NationalIdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The identifier families formcheck can validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IdentifierKind {
    /// International Bank Account Number (mod-97).
    Iban,
    /// Bank Identifier Code (structural plus country allow-list).
    Bic,
    /// ISBN-10 (weighted mod 11, `X` as final check character).
    Isbn10,
    /// ISBN-13 (GTIN mod 10 with a 978/979 prefix).
    Isbn13,
    /// Either ISBN form, selected by length.
    Isbn,
    /// International Standard Serial Number (weighted mod 11).
    Issn,
    /// GTIN-8 / EAN-8 (mod 10).
    Gtin8,
    /// GTIN-13 / EAN-13 (mod 10).
    Gtin13,
    /// Either GTIN length, selected by length.
    Gtin,
    /// International Securities Identification Number (Luhn over expanded digits).
    Isin,
    /// Payment card number (Luhn).
    CreditCard,
    /// EU and European VAT identification number, prefixed with its country.
    VatId,
    /// Postal code of a given country.
    PostalCode,
    /// International or national telephone number.
    PhoneNumber,
    /// A national identifier variant.
    NationalId(NationalIdKind),
}

impl IdentifierKind {
    /// All kinds, national identifiers expanded.
    pub fn all() -> Vec<IdentifierKind> {
        let mut kinds = vec![
            Self::Iban,
            Self::Bic,
            Self::Isbn10,
            Self::Isbn13,
            Self::Isbn,
            Self::Issn,
            Self::Gtin8,
            Self::Gtin13,
            Self::Gtin,
            Self::Isin,
            Self::CreditCard,
            Self::VatId,
            Self::PostalCode,
            Self::PhoneNumber,
        ];
        kinds.extend(NationalIdKind::all().iter().copied().map(Self::NationalId));
        kinds
    }

    /// The canonical name (`iban`, `national_id:pl_pesel`, …).
    pub fn name(&self) -> String {
        match self {
            Self::NationalId(variant) => format!("national_id:{}", variant.as_str()),
            other => other.simple_name().to_string(),
        }
    }

    fn simple_name(&self) -> &'static str {
        match self {
            Self::Iban => "iban",
            Self::Bic => "bic",
            Self::Isbn10 => "isbn10",
            Self::Isbn13 => "isbn13",
            Self::Isbn => "isbn",
            Self::Issn => "issn",
            Self::Gtin8 => "gtin8",
            Self::Gtin13 => "gtin13",
            Self::Gtin => "gtin",
            Self::Isin => "isin",
            Self::CreditCard => "credit_card",
            Self::VatId => "vat_id",
            Self::PostalCode => "postal_code",
            Self::PhoneNumber => "phone_number",
            Self::NationalId(_) => "national_id",
        }
    }

    /// Whether validation is impossible without a country argument.
    pub fn requires_country(&self) -> bool {
        matches!(self, Self::PostalCode)
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for IdentifierKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::all()
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ValidationError::UnknownIdentifierKind(s.to_string()))
    }
}

impl TryFrom<String> for IdentifierKind {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IdentifierKind> for String {
    fn from(kind: IdentifierKind) -> Self {
        kind.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip_through_from_str() {
        for kind in IdentifierKind::all() {
            let parsed: IdentifierKind = kind.name().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<String> = IdentifierKind::all().iter().map(|k| k.name()).collect();
        let before = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn from_str_is_lenient_on_case_and_dashes() {
        assert_eq!(
            "Credit-Card".parse::<IdentifierKind>().unwrap(),
            IdentifierKind::CreditCard
        );
        assert_eq!(
            "national_id:br_cpf".parse::<IdentifierKind>().unwrap(),
            IdentifierKind::NationalId(NationalIdKind::BrCpf)
        );
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("isbn11".parse::<IdentifierKind>().is_err());
        assert!("national_id".parse::<IdentifierKind>().is_err());
    }

    #[test]
    fn serde_uses_canonical_name() {
        let json = serde_json::to_string(&IdentifierKind::NationalId(NationalIdKind::PlPesel))
            .unwrap();
        assert_eq!(json, "\"national_id:pl_pesel\"");
        let kind: IdentifierKind = serde_json::from_str("\"vat_id\"").unwrap();
        assert_eq!(kind, IdentifierKind::VatId);
    }

    #[test]
    fn only_postal_code_requires_country() {
        let requiring: Vec<IdentifierKind> = IdentifierKind::all()
            .into_iter()
            .filter(IdentifierKind::requires_country)
            .collect();
        assert_eq!(requiring, vec![IdentifierKind::PostalCode]);
    }
}
