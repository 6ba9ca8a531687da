#![deny(missing_docs)]

//! # formcheck-core — Foundational Types for formcheck
//!
//! This crate defines the value objects every other crate in the workspace
//! speaks in. It has no internal crate dependencies — only `serde`,
//! `serde_json` and `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Verdicts, not exceptions.** Malformed user input always resolves to
//!    [`Verdict::Invalid`] carrying a [`ReasonCode`]. Reason codes are a
//!    closed, stable set that hosts match on; they are never free text.
//!
//! 2. **Single [`IdentifierKind`] enum.** One catalogue of identifier
//!    families, exhaustive `match` everywhere. Adding a kind forces every
//!    dispatcher to handle it at compile time.
//!
//! 3. **Newtypes at the boundary.** [`CountryCode`] validates its shape at
//!    construction, so lookups downstream never see garbage keys.
//!
//! 4. **[`FormcheckError`] hierarchy.** Construction and configuration
//!    failures are structured `thiserror` errors, distinct from verdicts.

pub mod country;
pub mod error;
pub mod kind;
pub mod normalize;
pub mod verdict;

// Re-export primary types at crate root for ergonomic imports.
pub use country::CountryCode;
pub use error::{FormcheckError, ValidationError};
pub use kind::{IdentifierKind, NationalIdKind};
pub use normalize::{compact, digit_values, is_blank, COMMON_SEPARATORS};
pub use verdict::{ReasonCode, Verdict};
