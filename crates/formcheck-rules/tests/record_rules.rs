//! Rule lists evaluated over JSON and map records.

use std::collections::HashMap;

use formcheck_core::{ReasonCode, Verdict};
use formcheck_rules::{evaluate, evaluate_all, FieldRule, RuleOperator};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn dependency_triggers_only_when_other_is_empty() {
    let rule = FieldRule::new("b", RuleOperator::NotEmptyIfOtherEmpty).against("a");
    assert_eq!(
        evaluate(&rule, &map(&[("a", ""), ("b", "")])),
        Verdict::Invalid(ReasonCode::BadLength)
    );
    assert!(evaluate(&rule, &map(&[("a", "x"), ("b", "")])).is_valid());
}

#[test]
fn customer_record_rule_set() {
    let rules: Vec<FieldRule> = serde_json::from_value(json!([
        {
            "field": "vatId",
            "comparisonField": "customerType",
            "comparisonValues": ["business"],
            "operator": "not_empty_if_equals"
        },
        {
            "field": "birthDate",
            "comparisonField": "customerType",
            "comparisonValues": ["business"],
            "operator": "empty_if_equals"
        },
        {
            "field": "email",
            "operator": {"not_empty_alternate": {"altField": "phone"}}
        },
        {
            "field": "vatId",
            "comparisonField": "vatNumber",
            "operator": "empty_if_other_empty"
        }
    ]))
    .unwrap();

    let record = object(json!({
        "customerType": "business",
        "vatId": null,
        "birthDate": "1990-01-01",
        "email": "",
        "phone": 491701234567u64,
    }));
    let outcomes = evaluate_all(&rules, &record);
    let verdicts: Vec<Verdict> = outcomes.iter().map(|o| o.verdict.clone()).collect();
    assert_eq!(
        verdicts,
        vec![
            Verdict::Invalid(ReasonCode::BadLength),
            Verdict::Invalid(ReasonCode::BadLength),
            Verdict::blank(),
            Verdict::Invalid(ReasonCode::BadFormat),
        ]
    );
    assert_eq!(outcomes[2].fields, vec!["email".to_string(), "phone".to_string()]);
    assert_eq!(outcomes.iter().filter(|o| o.is_violation()).count(), 3);
}

#[test]
fn outcomes_serialize_for_reporting() {
    let rule = FieldRule::new("b", RuleOperator::EmptyIfOtherNotEmpty).against("a");
    let outcomes = evaluate_all(&[rule], &map(&[("a", "x"), ("b", "y")]));
    assert_eq!(
        serde_json::to_value(&outcomes).unwrap(),
        json!([{
            "fields": ["b"],
            "operator": "empty_if_other_not_empty",
            "verdict": {"verdict": "invalid", "value": "bad_length"}
        }])
    );
}

proptest! {
    #[test]
    fn one_outcome_per_rule(n in 0usize..12, filled in any::<bool>()) {
        let rules: Vec<FieldRule> = (0..n)
            .map(|i| {
                let op = if i % 2 == 0 {
                    RuleOperator::NotEmptyIfOtherEmpty
                } else {
                    RuleOperator::EmptyIfOtherEmpty
                };
                FieldRule::new("b", op).against(if i % 3 == 0 { "missing" } else { "a" })
            })
            .collect();
        let b = if filled { "x" } else { "" };
        let outcomes = evaluate_all(&rules, &map(&[("a", ""), ("b", b)]));
        prop_assert_eq!(outcomes.len(), n);
        for (rule, outcome) in rules.iter().zip(&outcomes) {
            prop_assert_eq!(&outcome.fields[0], &rule.field);
        }
    }

    #[test]
    fn rules_without_dependency_accept_anything(a in ".{0,8}", b in ".{0,8}") {
        // `a` is non-empty text, so the empty-dependent rules never trigger.
        prop_assume!(!a.is_empty());
        let rule = FieldRule::new("b", RuleOperator::NotEmptyIfOtherEmpty).against("a");
        let record = map(&[("a", a.as_str()), ("b", b.as_str())]);
        prop_assert_eq!(evaluate(&rule, &record), Verdict::valid(b));
    }
}
