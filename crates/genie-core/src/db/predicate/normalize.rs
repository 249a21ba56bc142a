use crate::{
    db::predicate::ast::{ComparePredicate, Predicate},
    value::{Value, ValueEnum},
};

///
/// Normalize a predicate into a canonical, deterministic form.
///
/// Normalization guarantees:
/// - Logical equivalence is preserved
/// - Nested AND / OR nodes are flattened
/// - Neutral elements are removed (True / False)
/// - Double negation is eliminated
/// - Child predicates are deterministically ordered and deduplicated
/// - Single-child AND / OR nodes collapse to the child
///
/// This is used to ensure:
/// - stable fingerprints
/// - consistent equality checks between independently built filters
/// - predictable test behavior
///
#[must_use]
pub fn normalize(predicate: &Predicate) -> Predicate {
    match predicate {
        Predicate::True => Predicate::True,
        Predicate::False => Predicate::False,

        Predicate::And(children) => normalize_and(children),
        Predicate::Or(children) => normalize_or(children),
        Predicate::Not(inner) => normalize_not(inner),

        Predicate::Compare(cmp) => Predicate::Compare(cmp.clone()),
    }
}

///
/// Normalize a NOT expression.
///
/// Eliminates double negation and folds constants:
///     NOT (NOT x)  →  x
///     NOT True     →  False
///
fn normalize_not(inner: &Predicate) -> Predicate {
    match normalize(inner) {
        Predicate::Not(double) => *double,
        Predicate::True => Predicate::False,
        Predicate::False => Predicate::True,
        other => Predicate::Not(Box::new(other)),
    }
}

///
/// Normalize an AND expression.
///
/// Rules:
/// - AND(True, x)        → x
/// - AND(False, x)       → False
/// - AND(AND(a, b), c)   → AND(a, b, c)
/// - AND()               → True
///
fn normalize_and(children: &[Predicate]) -> Predicate {
    let mut out = Vec::new();

    for child in children {
        match normalize(child) {
            Predicate::True => {}
            Predicate::False => return Predicate::False,
            Predicate::And(grandchildren) => out.extend(grandchildren),
            other => out.push(other),
        }
    }

    finish_group(out, Predicate::True, Predicate::And)
}

///
/// Normalize an OR expression.
///
/// Rules:
/// - OR(False, x)       → x
/// - OR(True, x)        → True
/// - OR(OR(a, b), c)    → OR(a, b, c)
/// - OR()               → False
///
fn normalize_or(children: &[Predicate]) -> Predicate {
    let mut out = Vec::new();

    for child in children {
        match normalize(child) {
            Predicate::False => {}
            Predicate::True => return Predicate::True,
            Predicate::Or(grandchildren) => out.extend(grandchildren),
            other => out.push(other),
        }
    }

    finish_group(out, Predicate::False, Predicate::Or)
}

// Sort, dedupe, and collapse one flattened AND/OR child list.
fn finish_group(
    mut out: Vec<Predicate>,
    empty: Predicate,
    group: fn(Vec<Predicate>) -> Predicate,
) -> Predicate {
    out.sort_by_cached_key(sort_key);
    out.dedup();

    match out.len() {
        0 => empty,
        1 => out.pop().unwrap_or(empty),
        _ => group(out),
    }
}

///
/// Generate a deterministic, length-prefixed key for a predicate.
///
/// This key is used **only for sorting and fingerprinting**, not for display.
///
pub(crate) fn sort_key(predicate: &Predicate) -> Vec<u8> {
    let mut out = Vec::new();
    encode_predicate_key(&mut out, predicate);
    out
}

const PRED_TRUE: u8 = 0x00;
const PRED_FALSE: u8 = 0x01;
const PRED_AND: u8 = 0x02;
const PRED_OR: u8 = 0x03;
const PRED_NOT: u8 = 0x04;
const PRED_COMPARE: u8 = 0x05;

// Encode predicate keys with length-prefixed segments to avoid collisions.
fn encode_predicate_key(out: &mut Vec<u8>, predicate: &Predicate) {
    match predicate {
        Predicate::True => out.push(PRED_TRUE),
        Predicate::False => out.push(PRED_FALSE),
        Predicate::And(children) => {
            out.push(PRED_AND);
            push_len(out, children.len());
            for child in children {
                push_predicate(out, child);
            }
        }
        Predicate::Or(children) => {
            out.push(PRED_OR);
            push_len(out, children.len());
            for child in children {
                push_predicate(out, child);
            }
        }
        Predicate::Not(inner) => {
            out.push(PRED_NOT);
            push_predicate(out, inner);
        }
        Predicate::Compare(cmp) => encode_compare_key(out, cmp),
    }
}

fn encode_compare_key(out: &mut Vec<u8>, cmp: &ComparePredicate) {
    out.push(PRED_COMPARE);
    push_str(out, &cmp.field);
    out.push(cmp.op.tag());
    push_value(out, &cmp.value);
}

fn encode_value_key(out: &mut Vec<u8>, value: &Value) {
    out.push(value.canonical_tag().to_u8());

    match value {
        Value::Enum(v) => push_enum(out, v),
        Value::List(items) => {
            push_len(out, items.len());
            for item in items {
                push_value(out, item);
            }
        }
        Value::Null => {}
        Value::Text(v) => push_str(out, v),
        Value::Timestamp(v) => out.extend_from_slice(&v.get().to_be_bytes()),
        Value::Uint(v) => out.extend_from_slice(&v.to_be_bytes()),
        Value::Ulid(v) => out.extend_from_slice(&v.to_bytes()),
    }
}

fn push_predicate(out: &mut Vec<u8>, predicate: &Predicate) {
    push_framed(out, |buf| encode_predicate_key(buf, predicate));
}

fn push_value(out: &mut Vec<u8>, value: &Value) {
    push_framed(out, |buf| encode_value_key(buf, value));
}

fn push_enum(out: &mut Vec<u8>, value: &ValueEnum) {
    match &value.path {
        Some(path) => {
            out.push(1);
            push_str(out, path);
        }
        None => out.push(0),
    }
    push_str(out, &value.variant);
}

fn push_len(out: &mut Vec<u8>, len: usize) {
    // NOTE: Sort keys are diagnostics-only; overflow saturates for determinism.
    let len = u64::try_from(len).unwrap_or(u64::MAX);
    out.extend_from_slice(&len.to_be_bytes());
}

// Write one nested deterministic payload as [len:u64be][payload] without
// allocating an intermediate buffer.
fn push_framed(out: &mut Vec<u8>, encode: impl FnOnce(&mut Vec<u8>)) {
    let len_pos = out.len();
    out.extend_from_slice(&0u64.to_be_bytes());
    let payload_start = out.len();

    encode(out);

    let payload_len = out.len().saturating_sub(payload_start);
    let payload_len = u64::try_from(payload_len).unwrap_or(u64::MAX);
    out[len_pos..len_pos + std::mem::size_of::<u64>()].copy_from_slice(&payload_len.to_be_bytes());
}

fn push_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    push_len(out, bytes.len());
    out.extend_from_slice(bytes);
}

fn push_str(out: &mut Vec<u8>, s: &str) {
    push_bytes(out, s.as_bytes());
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::predicate::CompareOp;

    fn leaf(field: &str, n: u64) -> Predicate {
        Predicate::compare(field, CompareOp::Eq, Value::Uint(n))
    }

    #[test]
    fn sort_key_distinguishes_list_text_with_delimiters() {
        let left = Predicate::compare(
            "field",
            CompareOp::Eq,
            Value::List(vec![Value::Text("a,b".to_string())]),
        );
        let right = Predicate::compare(
            "field",
            CompareOp::Eq,
            Value::List(vec![
                Value::Text("a".to_string()),
                Value::Text("b".to_string()),
            ]),
        );

        assert_ne!(sort_key(&left), sort_key(&right));
    }

    #[test]
    fn and_flattens_and_orders_children() {
        let nested = Predicate::And(vec![
            leaf("b", 2),
            Predicate::And(vec![leaf("a", 1), Predicate::True]),
        ]);
        let flat = Predicate::And(vec![leaf("a", 1), leaf("b", 2)]);

        assert_eq!(normalize(&nested), normalize(&flat));
        assert_eq!(normalize(&nested).conjuncts().len(), 2);
    }

    #[test]
    fn empty_groups_fold_to_identity() {
        assert_eq!(normalize(&Predicate::And(vec![])), Predicate::True);
        assert_eq!(normalize(&Predicate::Or(vec![])), Predicate::False);
    }

    #[test]
    fn absorbing_elements_short_circuit() {
        let and = Predicate::And(vec![leaf("a", 1), Predicate::False]);
        let or = Predicate::Or(vec![leaf("a", 1), Predicate::True]);

        assert_eq!(normalize(&and), Predicate::False);
        assert_eq!(normalize(&or), Predicate::True);
    }

    #[test]
    fn single_child_groups_collapse_and_duplicates_drop() {
        let pred = Predicate::Or(vec![leaf("a", 1), leaf("a", 1)]);
        assert_eq!(normalize(&pred), leaf("a", 1));
    }

    #[test]
    fn double_negation_is_removed() {
        let pred = Predicate::not(Predicate::not(leaf("a", 1)));
        assert_eq!(normalize(&pred), leaf("a", 1));
    }
}
