///
/// EntityFieldModel
/// Runtime field metadata used by validation.
///

#[derive(Debug)]
pub struct EntityFieldModel {
    /// Field name as used in predicates.
    pub name: &'static str,
    /// Runtime type shape.
    pub kind: EntityFieldKind,
}

///
/// EntityFieldKind
///
/// Minimal type surface needed by the predicate validator.
/// Aligned with `Value` variants.
///

#[derive(Debug, Eq, PartialEq)]
pub enum EntityFieldKind {
    // Scalar primitives
    Enum,
    Text,
    Timestamp,
    Ulid,

    // Collections
    List(&'static Self),
    Set(&'static Self),
}

impl EntityFieldKind {
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::List(_) | Self::Set(_))
    }

    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Element kind for collections; `None` for scalars.
    #[must_use]
    pub const fn element(&self) -> Option<&'static Self> {
        match self {
            Self::List(inner) | Self::Set(inner) => Some(*inner),
            _ => None,
        }
    }

    /// Whether the kind supports `<`/`>=` style comparisons.
    #[must_use]
    pub const fn is_orderable(&self) -> bool {
        matches!(self, Self::Text | Self::Timestamp | Self::Ulid)
    }
}
