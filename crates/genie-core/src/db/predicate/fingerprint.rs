use crate::db::predicate::{
    Predicate,
    normalize::{normalize, sort_key},
};
use sha2::{Digest, Sha256};
use std::fmt;

///
/// PredicateFingerprint
///
/// SHA-256 digest of a predicate's normalized structure.
/// Two predicates with the same semantic composition (same sub-predicates,
/// same grouping) share a fingerprint regardless of emission order.
///

#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PredicateFingerprint([u8; 32]);

impl PredicateFingerprint {
    #[must_use]
    pub fn of(predicate: &Predicate) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"genie:predicate:v1");
        hasher.update(sort_key(&normalize(predicate)));

        Self(hasher.finalize().into())
    }
}

impl fmt::Display for PredicateFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..8] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PredicateFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PredicateFingerprint({self})")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::predicate::CompareOp, value::Value};

    fn leaf(field: &str) -> Predicate {
        Predicate::compare(field, CompareOp::Eq, Value::from("x"))
    }

    #[test]
    fn fingerprint_ignores_child_order() {
        let left = Predicate::And(vec![leaf("a"), leaf("b")]);
        let right = Predicate::And(vec![leaf("b"), leaf("a")]);

        assert_eq!(PredicateFingerprint::of(&left), PredicateFingerprint::of(&right));
    }

    #[test]
    fn fingerprint_separates_and_from_or() {
        let and = Predicate::And(vec![leaf("a"), leaf("b")]);
        let or = Predicate::Or(vec![leaf("a"), leaf("b")]);

        assert_ne!(PredicateFingerprint::of(&and), PredicateFingerprint::of(&or));
    }

    #[test]
    fn display_is_short_hex() {
        let rendered = PredicateFingerprint::of(&Predicate::True).to_string();

        assert_eq!(rendered.len(), 16);
        assert!(rendered.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
