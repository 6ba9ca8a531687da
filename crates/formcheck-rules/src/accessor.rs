//! # Field Accessor Capability
//!
//! The evaluator never inspects a record directly. The caller hands it a
//! [`FieldAccessor`] that answers one question: what is the current value
//! of the field with this name? Three states are distinguished because
//! they mean different things to a rule:
//!
//! - [`FieldValue::Unknown`]: the record has no such field. A rule naming
//!   it is misconfigured.
//! - [`FieldValue::Null`]: the field exists and holds nothing.
//! - [`FieldValue::Text`]: the field's text, possibly empty.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// The value of one named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// The record has no field of that name.
    Unknown,
    /// The field exists without a value.
    Null,
    /// The field's current text.
    Text(Cow<'a, str>),
}

impl<'a> FieldValue<'a> {
    /// Borrowed text value.
    pub fn text(s: &'a str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }

    /// `Null` or zero-length text. Whitespace is not trimmed.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            Self::Unknown => false,
        }
    }

    /// Whether the record has the field at all.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// The text, with `Null` and `Unknown` as the empty string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Null | Self::Unknown => "",
        }
    }
}

/// Named-field lookup over a record.
pub trait FieldAccessor {
    /// Current value of the field `name`.
    fn lookup(&self, name: &str) -> FieldValue<'_>;
}

impl<T: FieldAccessor + ?Sized> FieldAccessor for &T {
    fn lookup(&self, name: &str) -> FieldValue<'_> {
        (**self).lookup(name)
    }
}

impl FieldAccessor for HashMap<String, String> {
    fn lookup(&self, name: &str) -> FieldValue<'_> {
        self.get(name)
            .map_or(FieldValue::Unknown, |v| FieldValue::text(v))
    }
}

impl FieldAccessor for BTreeMap<String, Option<String>> {
    fn lookup(&self, name: &str) -> FieldValue<'_> {
        match self.get(name) {
            None => FieldValue::Unknown,
            Some(None) => FieldValue::Null,
            Some(Some(v)) => FieldValue::text(v),
        }
    }
}

/// JSON records: `null` is `Null`, strings are their contents, every
/// other value is its JSON text (so `0`, `false` and `[]` are non-empty).
impl FieldAccessor for serde_json::Map<String, Value> {
    fn lookup(&self, name: &str) -> FieldValue<'_> {
        match self.get(name) {
            None => FieldValue::Unknown,
            Some(Value::Null) => FieldValue::Null,
            Some(Value::String(s)) => FieldValue::text(s),
            Some(other) => FieldValue::Text(Cow::Owned(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- Emptiness --

    #[test]
    fn emptiness_is_not_trimmed() {
        assert!(FieldValue::Null.is_empty());
        assert!(FieldValue::text("").is_empty());
        assert!(!FieldValue::text(" ").is_empty());
        assert!(!FieldValue::Unknown.is_empty());
    }

    // -- Implementations --

    #[test]
    fn hash_map_lookup() {
        let record: HashMap<String, String> =
            [("a".to_string(), "x".to_string())].into_iter().collect();
        assert_eq!(record.lookup("a"), FieldValue::text("x"));
        assert_eq!(record.lookup("b"), FieldValue::Unknown);
    }

    #[test]
    fn btree_map_distinguishes_null() {
        let mut record = BTreeMap::new();
        record.insert("a".to_string(), None);
        record.insert("b".to_string(), Some(String::new()));
        assert_eq!(record.lookup("a"), FieldValue::Null);
        assert_eq!(record.lookup("b"), FieldValue::text(""));
        assert_eq!(record.lookup("c"), FieldValue::Unknown);
    }

    #[test]
    fn json_values_render_as_text() {
        let Value::Object(record) = json!({
            "name": "Ada",
            "none": null,
            "zero": 0,
            "flag": false,
            "list": [],
        }) else {
            unreachable!()
        };
        assert_eq!(record.lookup("name"), FieldValue::text("Ada"));
        assert_eq!(record.lookup("none"), FieldValue::Null);
        assert_eq!(record.lookup("zero").as_str(), "0");
        assert_eq!(record.lookup("flag").as_str(), "false");
        assert_eq!(record.lookup("list").as_str(), "[]");
        assert!(!record.lookup("list").is_empty());
        assert_eq!(record.lookup("missing"), FieldValue::Unknown);
    }

    #[test]
    fn accessor_through_reference() {
        fn first(accessor: &dyn FieldAccessor) -> String {
            accessor.lookup("a").as_str().to_string()
        }
        let record: HashMap<String, String> =
            [("a".to_string(), "v".to_string())].into_iter().collect();
        assert_eq!(first(&&record), "v");
    }
}
