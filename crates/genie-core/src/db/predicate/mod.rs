mod ast;
mod builder;
mod eval;
mod fingerprint;
mod normalize;
mod validate;

#[cfg(test)]
mod tests;

pub use ast::{CompareOp, ComparePredicate, Predicate};
pub use builder::{CriteriaBuilder, PredicateBuilder};
pub use eval::{FieldPresence, LikePatterns, Row, eval};
pub use fingerprint::PredicateFingerprint;
pub use normalize::normalize;
pub use validate::{ValidateError, validate};
