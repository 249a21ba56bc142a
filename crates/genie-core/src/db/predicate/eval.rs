use crate::{
    config::LikeConfig,
    db::predicate::{CompareOp, ComparePredicate, Predicate},
    traits::EntityValue,
    value::{LikePattern, Value, strict_order_cmp},
};
use std::{cmp::Ordering, collections::BTreeMap};

///
/// FieldPresence
///
/// Result of attempting to read a field from a row during predicate
/// evaluation. This distinguishes between a missing field and a
/// present field whose value may be `Null`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    /// Field exists and has a value (including `Value::Null`).
    Present(Value),
    /// Field is not present on the row.
    Missing,
}

///
/// Row
///
/// Abstraction over a row-like value that can expose fields by name.
/// This decouples predicate evaluation from concrete entity types.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

impl<T: EntityValue> Row for T {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get_value(name) {
            Some(value) => FieldPresence::Present(value),
            None => FieldPresence::Missing,
        }
    }
}

///
/// LikePatterns
///
/// LIKE patterns of one predicate, compiled once under a [`LikeConfig`]
/// and shared by every row of a scan.
///

#[derive(Clone, Debug)]
pub struct LikePatterns {
    config: LikeConfig,
    compiled: BTreeMap<String, LikePattern>,
}

impl LikePatterns {
    #[must_use]
    pub fn compile(predicate: &Predicate, config: &LikeConfig) -> Self {
        let compiled = predicate
            .compares()
            .filter(|cmp| cmp.op == CompareOp::Like)
            .filter_map(|cmp| cmp.value.as_text())
            .map(|pattern| (pattern.to_string(), config.compile(pattern)))
            .collect();

        Self {
            config: config.clone(),
            compiled,
        }
    }

    // Patterns outside the compiled predicate fall back to a one-off compile.
    fn matches(&self, actual: &Value, pattern: &str) -> Option<bool> {
        match self.compiled.get(pattern) {
            Some(compiled) => actual.text_like(compiled),
            None => actual.text_like(&self.config.compile(pattern)),
        }
    }

    #[cfg(test)]
    pub(crate) fn compiled_count(&self) -> usize {
        self.compiled.len()
    }
}

///
/// Evaluate a predicate against a single row.
///
/// This function performs **pure runtime evaluation**:
/// - no model access
/// - no validation
///
/// Any unsupported comparison simply evaluates to `false`.
/// CONTRACT: predicates should be validated before evaluation.
///
#[must_use]
pub fn eval<R: Row + ?Sized>(row: &R, predicate: &Predicate, like: &LikePatterns) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::False => false,

        Predicate::And(children) => children.iter().all(|child| eval(row, child, like)),
        Predicate::Or(children) => children.iter().any(|child| eval(row, child, like)),
        Predicate::Not(inner) => !eval(row, inner, like),

        Predicate::Compare(cmp) => eval_compare(row, cmp, like),
    }
}

///
/// Evaluate a single comparison predicate against a row.
///
/// Returns `false` if:
/// - the field is missing
/// - the comparison is not defined for the operand shapes
///
fn eval_compare<R: Row + ?Sized>(row: &R, cmp: &ComparePredicate, like: &LikePatterns) -> bool {
    let ComparePredicate { field, op, value } = cmp;

    let FieldPresence::Present(actual) = row.field(field) else {
        return false;
    };

    match op {
        CompareOp::Eq => actual == *value,
        CompareOp::Ne => actual != *value,

        CompareOp::Lt => order(&actual, value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => order(&actual, value).is_some_and(Ordering::is_le),
        CompareOp::Gt => order(&actual, value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => order(&actual, value).is_some_and(Ordering::is_ge),

        CompareOp::In => actual.in_list(value).unwrap_or(false),
        CompareOp::Contains => actual.contains(value).unwrap_or(false),

        CompareOp::Like => value
            .as_text()
            .and_then(|pattern| like.matches(&actual, pattern))
            .unwrap_or(false),
    }
}

fn order(actual: &Value, expected: &Value) -> Option<Ordering> {
    strict_order_cmp(actual, expected)
}

///
/// TESTS
///
