use crate::{
    db::predicate::{CompareOp, ComparePredicate, Predicate},
    model::{EntityFieldKind, EntityModel},
    value::Value,
};
use thiserror::Error as ThisError;

/// Predicate/model validation failures.
#[derive(Debug, ThisError)]
pub enum ValidateError {
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error("operator {op:?} is not valid for field '{field}'")]
    InvalidOperator { field: String, op: CompareOp },

    #[error("invalid literal for field '{field}': {message}")]
    InvalidLiteral { field: String, message: String },
}

///
/// Validate a predicate against an entity model.
///
/// Checks that every referenced field exists, that each operator is legal
/// for the field's kind, and that literals match the field's value shape.
/// Evaluation assumes this pass has run.
///
pub fn validate(model: &EntityModel, predicate: &Predicate) -> Result<(), ValidateError> {
    predicate
        .compares()
        .try_for_each(|cmp| validate_compare(model, cmp))
}

fn validate_compare(model: &EntityModel, cmp: &ComparePredicate) -> Result<(), ValidateError> {
    let field = model
        .field(&cmp.field)
        .ok_or_else(|| ValidateError::UnknownField {
            field: cmp.field.clone(),
        })?;
    let kind = &field.kind;

    let invalid_op = || ValidateError::InvalidOperator {
        field: cmp.field.clone(),
        op: cmp.op,
    };

    match cmp.op {
        CompareOp::Eq | CompareOp::Ne => {
            if kind.is_collection() {
                return Err(invalid_op());
            }
            expect_literal(&cmp.field, kind, &cmp.value)
        }
        CompareOp::Lt | CompareOp::Lte | CompareOp::Gt | CompareOp::Gte => {
            if !kind.is_orderable() {
                return Err(invalid_op());
            }
            expect_literal(&cmp.field, kind, &cmp.value)
        }
        CompareOp::In => {
            if kind.is_collection() {
                return Err(invalid_op());
            }
            let Value::List(items) = &cmp.value else {
                return Err(ValidateError::InvalidLiteral {
                    field: cmp.field.clone(),
                    message: "IN expects a list literal".to_string(),
                });
            };
            items
                .iter()
                .try_for_each(|item| expect_literal(&cmp.field, kind, item))
        }
        CompareOp::Contains => {
            let element = kind.element().ok_or_else(invalid_op)?;
            expect_literal(&cmp.field, element, &cmp.value)
        }
        CompareOp::Like => {
            if !kind.is_text() {
                return Err(invalid_op());
            }
            expect_literal(&cmp.field, kind, &cmp.value)
        }
    }
}

fn expect_literal(field: &str, kind: &EntityFieldKind, value: &Value) -> Result<(), ValidateError> {
    if literal_matches_kind(kind, value) {
        return Ok(());
    }

    Err(ValidateError::InvalidLiteral {
        field: field.to_string(),
        message: format!(
            "expected {kind:?}, found {}",
            value.canonical_tag().label()
        ),
    })
}

fn literal_matches_kind(kind: &EntityFieldKind, value: &Value) -> bool {
    match (kind, value) {
        (EntityFieldKind::Enum, Value::Enum(_))
        | (EntityFieldKind::Text, Value::Text(_))
        | (EntityFieldKind::Timestamp, Value::Timestamp(_))
        | (EntityFieldKind::Ulid, Value::Ulid(_)) => true,
        (EntityFieldKind::List(inner) | EntityFieldKind::Set(inner), Value::List(items)) => {
            items.iter().all(|item| literal_matches_kind(inner, item))
        }
        _ => false,
    }
}

///
/// TESTS
///
