use crate::{
    model::entity::EntityModel,
    value::{Value, ValueEnum},
};
use std::collections::BTreeSet;
use ulid::Ulid;

// ============================================================================
// ENTITY IDENTITY & SCHEMA
// ============================================================================
//
// These traits describe *what an entity is*, not how it is stored
// or manipulated at runtime.
//

///
/// Path
/// Fully-qualified type path used for diagnostics and strict enum matching.
///

pub trait Path {
    const PATH: &'static str;
}

///
/// EntityKind
///
/// Static runtime model for a queryable entity.
///

pub trait EntityKind: Path + 'static {
    const MODEL: &'static EntityModel;
}

///
/// EntityValue
///
/// Runtime field access for a queryable entity.
/// Field names match the entity model; unknown names return `None`.
///

pub trait EntityValue: EntityKind {
    fn get_value(&self, field: &str) -> Option<Value>;

    /// Primary key as a runtime value.
    fn key(&self) -> Value;
}

// ============================================================================
// TYPE SYSTEM CONTRACTS
// ============================================================================

pub trait EnumValue {
    fn to_value_enum(&self) -> ValueEnum;
}

///
/// FieldValue
///
/// Conversion between a typed attribute value and the runtime `Value`.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;

    #[must_use]
    fn from_value(value: &Value) -> Option<Self>
    where
        Self: Sized;
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FieldValue for Ulid {
    fn to_value(&self) -> Value {
        Value::Ulid(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Ulid(v) => Some(*v),
            _ => None,
        }
    }
}

impl<T: FieldValue + Ord> FieldValue for BTreeSet<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Value::List(items) = value else {
            return None;
        };

        items.iter().map(T::from_value).collect()
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Value::List(items) = value else {
            return None;
        };

        items.iter().map(T::from_value).collect()
    }
}
