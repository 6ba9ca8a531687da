#![deny(missing_docs)]

//! # formcheck-rules — Cross-Field Rule Evaluator
//!
//! Decides whether a field may be empty or must be filled, based on a
//! sibling field's value or emptiness. The record is reached only through
//! the [`FieldAccessor`] capability supplied by the caller; the evaluator
//! never owns or reflects over it.
//!
//! Rules ([`FieldRule`]) are plain serde data so hosts can keep them in
//! configuration. [`evaluate`] answers one rule; [`evaluate_all`] answers
//! a rule list independently, so one misconfigured rule never hides the
//! verdicts of its siblings.

pub mod accessor;
pub mod evaluate;
pub mod rule;

pub use accessor::{FieldAccessor, FieldValue};
pub use evaluate::{evaluate, evaluate_all, RuleOutcome};
pub use rule::{FieldRule, RuleOperator};
