//! # Rule Evaluation
//!
//! Each rule resolves to a [`Verdict`] on its own; a list of rules is
//! evaluated in full and never short-circuits.
//!
//! - A rule whose condition does not hold, or whose condition holds and
//!   is satisfied, is `Valid(<field text>)`.
//! - A violated rule is `Invalid(BadLength)`: the field's length is zero
//!   where it must not be, or non-zero where it must be.
//! - A rule that names a field the record does not have, or that lacks the
//!   comparison field its operator needs, is `Invalid(BadFormat)` and is
//!   logged at `warn`. It never aborts the other rules.

use formcheck_core::{ReasonCode, Verdict};
use serde::Serialize;

use crate::accessor::{FieldAccessor, FieldValue};
use crate::rule::{FieldRule, RuleOperator};

/// The verdict of one rule, attributed to its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    /// The rule's field, plus the alternative field for
    /// `not_empty_alternate`.
    pub fields: Vec<String>,
    /// The operator name.
    pub operator: &'static str,
    /// The rule's verdict.
    pub verdict: Verdict,
}

impl RuleOutcome {
    /// Whether the rule rejected the record.
    pub fn is_violation(&self) -> bool {
        !self.verdict.is_valid()
    }
}

/// Evaluate one rule against a record.
pub fn evaluate<A: FieldAccessor + ?Sized>(rule: &FieldRule, accessor: &A) -> Verdict {
    match check(rule, accessor) {
        Ok(verdict) => verdict,
        Err(problem) => {
            tracing::warn!(
                field = %rule.field,
                operator = %rule.operator,
                problem = %problem,
                "misconfigured field rule"
            );
            Verdict::Invalid(ReasonCode::BadFormat)
        }
    }
}

/// Evaluate every rule, one outcome per rule in input order.
pub fn evaluate_all<A: FieldAccessor + ?Sized>(
    rules: &[FieldRule],
    accessor: &A,
) -> Vec<RuleOutcome> {
    rules
        .iter()
        .map(|rule| RuleOutcome {
            fields: rule.fields(),
            operator: rule.operator.as_str(),
            verdict: evaluate(rule, accessor),
        })
        .collect()
}

/// Configuration problems, reported through the log only.
enum Problem<'r> {
    UnknownField(&'r str),
    MissingComparisonField,
}

impl std::fmt::Display for Problem<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(name) => write!(f, "unknown field {name:?}"),
            Self::MissingComparisonField => f.write_str("no comparison field"),
        }
    }
}

fn known<'a, 'r, A: FieldAccessor + ?Sized>(
    accessor: &'a A,
    name: &'r str,
) -> Result<FieldValue<'a>, Problem<'r>> {
    let value = accessor.lookup(name);
    if !value.is_known() {
        return Err(Problem::UnknownField(name));
    }
    Ok(value)
}

/// Whether the comparison field holds one of the rule's values, or is
/// empty when the rule lists none.
fn equals(rule: &FieldRule, other: &FieldValue<'_>) -> bool {
    if rule.comparison_values.is_empty() {
        return other.is_empty();
    }
    match other {
        FieldValue::Text(text) => rule.comparison_values.iter().any(|v| v == text),
        FieldValue::Null | FieldValue::Unknown => false,
    }
}

fn check<'r, A: FieldAccessor + ?Sized>(
    rule: &'r FieldRule,
    accessor: &A,
) -> Result<Verdict, Problem<'r>> {
    let value = known(accessor, &rule.field)?;
    let other = match rule.comparison_field.as_deref() {
        Some(name) => Some(known(accessor, name)?),
        None => None,
    };

    let needed = || other.as_ref().ok_or(Problem::MissingComparisonField);

    let (active, must_be_empty) = match &rule.operator {
        RuleOperator::EmptyIfEquals => (equals(rule, needed()?), true),
        RuleOperator::NotEmptyIfEquals => (equals(rule, needed()?), false),
        RuleOperator::EmptyIfOtherEmpty => (needed()?.is_empty(), true),
        RuleOperator::NotEmptyIfOtherEmpty => (needed()?.is_empty(), false),
        RuleOperator::EmptyIfOtherNotEmpty => (!needed()?.is_empty(), true),
        RuleOperator::NotEmptyIfOtherNotEmpty => (!needed()?.is_empty(), false),
        // Reduces to "the field must be set" once the alternative is empty.
        RuleOperator::NotEmptyAlternate { alt_field } => {
            let alt = known(accessor, alt_field)?;
            let condition = other.as_ref().map_or(true, |o| equals(rule, o));
            (condition && alt.is_empty(), false)
        }
    };
    let satisfied = !active || value.is_empty() == must_be_empty;

    if satisfied {
        Ok(Verdict::valid(value.as_str()))
    } else {
        tracing::debug!(
            field = %rule.field,
            operator = %rule.operator,
            "field rule violated"
        );
        Ok(Verdict::Invalid(ReasonCode::BadLength))
    }
}
