//! Test-only collaborators.

use crate::{
    db::predicate::CriteriaBuilder,
    model::{Attribute, SetAttribute},
    traits::FieldValue,
    value::Value,
};
use std::cell::RefCell;

///
/// Call
///
/// One recorded `CriteriaBuilder` invocation. Group calls reference the
/// handles of their children.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Call {
    Equal { field: &'static str, value: Value },
    Like { field: &'static str, pattern: String },
    GreaterThanOrEqualTo { field: &'static str, value: Value },
    LessThan { field: &'static str, value: Value },
    IsMember { field: &'static str, value: Value },
    And(Vec<usize>),
    Or(Vec<usize>),
    Conjunction,
}

///
/// RecordingBuilder
///
/// `CriteriaBuilder` that hands out opaque handles and records every call,
/// so tests can verify exactly which sub-predicates a filter emitted.
///

#[derive(Debug, Default)]
pub(crate) struct RecordingBuilder {
    calls: RefCell<Vec<Call>>,
}

impl RecordingBuilder {
    fn record(&self, call: Call) -> usize {
        let mut calls = self.calls.borrow_mut();
        calls.push(call);
        calls.len() - 1
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Number of recorded calls equal to `call`.
    pub(crate) fn times(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    /// Number of recorded calls matching `pred`.
    pub(crate) fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|&c| pred(c)).count()
    }

    pub(crate) fn call(&self, handle: usize) -> Call {
        self.calls.borrow()[handle].clone()
    }
}

impl<E> CriteriaBuilder<E> for RecordingBuilder {
    type Predicate = usize;

    fn equal<T: FieldValue>(&self, attribute: Attribute<E, T>, value: &T) -> usize {
        self.record(Call::Equal {
            field: attribute.name(),
            value: value.to_value(),
        })
    }

    fn like(&self, attribute: Attribute<E, String>, pattern: &str) -> usize {
        self.record(Call::Like {
            field: attribute.name(),
            pattern: pattern.to_string(),
        })
    }

    fn greater_than_or_equal_to<T: FieldValue + Ord>(
        &self,
        attribute: Attribute<E, T>,
        value: &T,
    ) -> usize {
        self.record(Call::GreaterThanOrEqualTo {
            field: attribute.name(),
            value: value.to_value(),
        })
    }

    fn less_than<T: FieldValue + Ord>(&self, attribute: Attribute<E, T>, value: &T) -> usize {
        self.record(Call::LessThan {
            field: attribute.name(),
            value: value.to_value(),
        })
    }

    fn is_member<T: FieldValue>(&self, value: &T, attribute: SetAttribute<E, T>) -> usize {
        self.record(Call::IsMember {
            field: attribute.name(),
            value: value.to_value(),
        })
    }

    fn and(&self, predicates: Vec<usize>) -> usize {
        self.record(Call::And(predicates))
    }

    fn or(&self, predicates: Vec<usize>) -> usize {
        self.record(Call::Or(predicates))
    }

    fn conjunction(&self) -> usize {
        self.record(Call::Conjunction)
    }
}
