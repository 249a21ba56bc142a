use crate::{
    db::predicate::{CompareOp, Predicate},
    model::{Attribute, SetAttribute},
    traits::FieldValue,
    value::Value,
};

///
/// CriteriaBuilder
///
/// Capability set for composing predicates over typed attributes of `E`.
///
/// Filter builders are written against this trait only, so the same
/// composition logic can target the in-memory AST, a SQL builder, or a
/// document-store query without change. Every method is a pure constructor.
///

pub trait CriteriaBuilder<E> {
    type Predicate;

    /// `attribute = value`
    fn equal<T: FieldValue>(&self, attribute: Attribute<E, T>, value: &T) -> Self::Predicate;

    /// `attribute LIKE pattern`
    fn like(&self, attribute: Attribute<E, String>, pattern: &str) -> Self::Predicate;

    /// `attribute >= value`
    fn greater_than_or_equal_to<T: FieldValue + Ord>(
        &self,
        attribute: Attribute<E, T>,
        value: &T,
    ) -> Self::Predicate;

    /// `attribute < value`
    fn less_than<T: FieldValue + Ord>(
        &self,
        attribute: Attribute<E, T>,
        value: &T,
    ) -> Self::Predicate;

    /// `value MEMBER OF attribute`
    fn is_member<T: FieldValue>(&self, value: &T, attribute: SetAttribute<E, T>)
    -> Self::Predicate;

    /// Conjunction of `predicates`.
    fn and(&self, predicates: Vec<Self::Predicate>) -> Self::Predicate;

    /// Disjunction of `predicates`.
    fn or(&self, predicates: Vec<Self::Predicate>) -> Self::Predicate;

    /// The empty conjunction; matches every record.
    fn conjunction(&self) -> Self::Predicate;
}

///
/// PredicateBuilder
///
/// Stateless [`CriteriaBuilder`] producing the in-memory [`Predicate`] AST.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct PredicateBuilder;

impl<E> CriteriaBuilder<E> for PredicateBuilder {
    type Predicate = Predicate;

    fn equal<T: FieldValue>(&self, attribute: Attribute<E, T>, value: &T) -> Predicate {
        Predicate::compare(attribute.name(), CompareOp::Eq, value.to_value())
    }

    fn like(&self, attribute: Attribute<E, String>, pattern: &str) -> Predicate {
        Predicate::compare(attribute.name(), CompareOp::Like, Value::from(pattern))
    }

    fn greater_than_or_equal_to<T: FieldValue + Ord>(
        &self,
        attribute: Attribute<E, T>,
        value: &T,
    ) -> Predicate {
        Predicate::compare(attribute.name(), CompareOp::Gte, value.to_value())
    }

    fn less_than<T: FieldValue + Ord>(&self, attribute: Attribute<E, T>, value: &T) -> Predicate {
        Predicate::compare(attribute.name(), CompareOp::Lt, value.to_value())
    }

    fn is_member<T: FieldValue>(&self, value: &T, attribute: SetAttribute<E, T>) -> Predicate {
        Predicate::compare(attribute.name(), CompareOp::Contains, value.to_value())
    }

    fn and(&self, predicates: Vec<Predicate>) -> Predicate {
        Predicate::And(predicates)
    }

    fn or(&self, predicates: Vec<Predicate>) -> Predicate {
        Predicate::Or(predicates)
    }

    fn conjunction(&self) -> Predicate {
        Predicate::True
    }
}

///
/// TESTS
///
