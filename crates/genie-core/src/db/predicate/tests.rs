use crate::{
    config::LikeConfig,
    db::predicate::{
        CompareOp, LikePatterns, Predicate, PredicateFingerprint, eval,
        eval::{FieldPresence, Row},
        normalize,
    },
    types::Timestamp,
    value::{Value, ValueEnum},
};
use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
struct TestRow {
    fields: BTreeMap<String, Value>,
}

impl Row for TestRow {
    fn field(&self, name: &str) -> FieldPresence {
        match self.fields.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}

const FIELDS: [&str; 4] = ["a", "b", "c", "d"];

fn arb_field() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(FIELDS[0].to_string()),
        Just(FIELDS[1].to_string()),
        Just(FIELDS[2].to_string()),
        Just(FIELDS[3].to_string()),
    ]
}

fn arb_scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<u64>().prop_map(Value::Uint),
        "[a-c%_]{0,4}".prop_map(Value::Text),
        (0u64..10).prop_map(|ms| Value::Timestamp(Timestamp::from_millis(ms))),
        prop_oneof![Just("UP"), Just("OUT_OF_SERVICE"), Just("TERMINATED")]
            .prop_map(|variant| Value::Enum(ValueEnum::loose(variant))),
        Just(Value::Null),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_scalar_value(),
        prop::collection::vec(arb_scalar_value(), 0..4).prop_map(Value::List),
    ]
}

fn arb_compare_op() -> impl Strategy<Value = CompareOp> {
    prop_oneof![
        Just(CompareOp::Eq),
        Just(CompareOp::Ne),
        Just(CompareOp::Lt),
        Just(CompareOp::Lte),
        Just(CompareOp::Gt),
        Just(CompareOp::Gte),
        Just(CompareOp::In),
        Just(CompareOp::Contains),
        Just(CompareOp::Like),
    ]
}

fn arb_predicate() -> impl Strategy<Value = Predicate> {
    let leaf = prop_oneof![
        Just(Predicate::True),
        Just(Predicate::False),
        (arb_field(), arb_compare_op(), arb_value())
            .prop_map(|(field, op, value)| Predicate::compare(field, op, value)),
    ];

    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Predicate::And),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Predicate::Or),
            inner.prop_map(|p| Predicate::Not(Box::new(p))),
        ]
    })
}

fn arb_row() -> impl Strategy<Value = TestRow> {
    prop::collection::vec(
        prop_oneof![Just(None), arb_value().prop_map(Some)],
        FIELDS.len(),
    )
    .prop_map(|values| {
        let mut fields = BTreeMap::new();
        for (name, value) in FIELDS.iter().zip(values) {
            if let Some(value) = value {
                fields.insert((*name).to_string(), value);
            }
        }
        TestRow { fields }
    })
}

fn scan(rows: &[TestRow], predicate: &Predicate) -> BTreeMap<usize, bool> {
    let like = LikePatterns::compile(predicate, &LikeConfig::default());

    rows.iter()
        .enumerate()
        .map(|(idx, row)| (idx, eval(row, predicate, &like)))
        .collect()
}

proptest! {
    #[test]
    fn normalization_equivalence(predicate in arb_predicate(), row in arb_row()) {
        let like = LikePatterns::compile(&predicate, &LikeConfig::default());
        let normalized = normalize(&predicate);
        prop_assert_eq!(eval(&row, &predicate, &like), eval(&row, &normalized, &like));
    }

    #[test]
    fn scan_invariance(predicate in arb_predicate(), rows in prop::collection::vec(arb_row(), 0..10)) {
        let normalized = normalize(&predicate);
        let left = scan(&rows, &predicate);
        let right = scan(&rows, &normalized);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn normalization_is_idempotent(predicate in arb_predicate()) {
        let once = normalize(&predicate);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert_eq!(PredicateFingerprint::of(&predicate), PredicateFingerprint::of(&once));
    }
}

#[test]
fn like_is_false_against_non_text_values() {
    let mut fields = BTreeMap::new();
    fields.insert("a".to_string(), Value::Uint(5));
    let row = TestRow { fields };

    let pred = Predicate::compare("a", CompareOp::Like, Value::from("%"));
    let like = LikePatterns::compile(&pred, &LikeConfig::default());
    assert!(!eval(&row, &pred, &like));
}
