//! # Field Rules
//!
//! A [`FieldRule`] states when a field must be empty or non-empty,
//! depending on a sibling field. Rules are plain data and deserialize from
//! configuration:
//!
//! ```yaml
//! - field: vatId
//!   comparisonField: customerType
//!   comparisonValues: [business]
//!   operator: not_empty_if_equals
//! - field: email
//!   operator:
//!     not_empty_alternate:
//!       altField: phone
//! ```

use serde::{Deserialize, Serialize};

/// How the dependent field relates to the comparison field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOperator {
    /// The field must be empty when the comparison field equals a
    /// comparison value.
    EmptyIfEquals,
    /// The field must be non-empty when the comparison field equals a
    /// comparison value.
    NotEmptyIfEquals,
    /// The field must be empty when the comparison field is empty.
    EmptyIfOtherEmpty,
    /// The field must be non-empty when the comparison field is empty.
    NotEmptyIfOtherEmpty,
    /// The field must be empty when the comparison field is non-empty.
    EmptyIfOtherNotEmpty,
    /// The field must be non-empty when the comparison field is non-empty.
    NotEmptyIfOtherNotEmpty,
    /// The field or `alt_field` must be non-empty. With a comparison field
    /// the rule only applies when the comparison condition holds.
    #[serde(rename_all = "camelCase")]
    NotEmptyAlternate {
        /// The alternative field.
        alt_field: String,
    },
}

impl RuleOperator {
    /// The snake_case operator name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyIfEquals => "empty_if_equals",
            Self::NotEmptyIfEquals => "not_empty_if_equals",
            Self::EmptyIfOtherEmpty => "empty_if_other_empty",
            Self::NotEmptyIfOtherEmpty => "not_empty_if_other_empty",
            Self::EmptyIfOtherNotEmpty => "empty_if_other_not_empty",
            Self::NotEmptyIfOtherNotEmpty => "not_empty_if_other_not_empty",
            Self::NotEmptyAlternate { .. } => "not_empty_alternate",
        }
    }
}

impl std::fmt::Display for RuleOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One conditional rule over a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRule {
    /// The dependent field.
    pub field: String,
    /// The field whose value or emptiness activates the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_field: Option<String>,
    /// Values of the comparison field that activate the rule. Empty means
    /// "the comparison field is empty".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comparison_values: Vec<String>,
    /// The relation to enforce.
    pub operator: RuleOperator,
}

impl FieldRule {
    /// A rule on `field` with no comparison field yet.
    pub fn new(field: impl Into<String>, operator: RuleOperator) -> Self {
        Self {
            field: field.into(),
            comparison_field: None,
            comparison_values: Vec::new(),
            operator,
        }
    }

    /// Set the comparison field.
    pub fn against(mut self, comparison_field: impl Into<String>) -> Self {
        self.comparison_field = Some(comparison_field.into());
        self
    }

    /// Add an activating comparison value.
    pub fn when_equals(mut self, value: impl Into<String>) -> Self {
        self.comparison_values.push(value.into());
        self
    }

    /// The fields a violation is attributed to.
    pub fn fields(&self) -> Vec<String> {
        let mut fields = vec![self.field.clone()];
        if let RuleOperator::NotEmptyAlternate { alt_field } = &self.operator {
            fields.push(alt_field.clone());
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Serde --

    #[test]
    fn rule_deserializes_camel_case() {
        let json = serde_json::json!({
            "field": "b",
            "comparisonField": "a",
            "comparisonValues": ["x", "y"],
            "operator": "not_empty_if_equals"
        });
        let rule: FieldRule = serde_json::from_value(json).unwrap();
        assert_eq!(
            rule,
            FieldRule::new("b", RuleOperator::NotEmptyIfEquals)
                .against("a")
                .when_equals("x")
                .when_equals("y")
        );
    }

    #[test]
    fn alternate_operator_shape() {
        let op = RuleOperator::NotEmptyAlternate {
            alt_field: "phone".to_string(),
        };
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"not_empty_alternate": {"altField": "phone"}})
        );
        let back: RuleOperator = serde_json::from_value(json).unwrap();
        assert_eq!(back, op);
    }

    #[test]
    fn optional_keys_are_omitted() {
        let rule = FieldRule::new("a", RuleOperator::EmptyIfOtherEmpty).against("b");
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": "a",
                "comparisonField": "b",
                "operator": "empty_if_other_empty"
            })
        );
    }

    #[test]
    fn rules_load_from_yaml() {
        let yaml = "
- field: vatId
  comparisonField: customerType
  comparisonValues: [business]
  operator: not_empty_if_equals
- field: email
  operator:
    not_empty_alternate:
      altField: phone
";
        let rules: Vec<FieldRule> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].comparison_values, vec!["business".to_string()]);
        assert_eq!(rules[1].fields(), vec!["email".to_string(), "phone".to_string()]);
    }

    // -- Names --

    #[test]
    fn operator_names_match_serde() {
        for op in [
            RuleOperator::EmptyIfEquals,
            RuleOperator::NotEmptyIfEquals,
            RuleOperator::EmptyIfOtherEmpty,
            RuleOperator::NotEmptyIfOtherEmpty,
            RuleOperator::EmptyIfOtherNotEmpty,
            RuleOperator::NotEmptyIfOtherNotEmpty,
        ] {
            let json = serde_json::to_value(&op).unwrap();
            assert_eq!(json, serde_json::json!(op.as_str()));
        }
    }
}
