use crate::value::Value;

///
/// ValueTag
///
/// Stable canonical value-variant tag used by hashing and ordering surfaces.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ValueTag {
    Enum = 7,
    List = 13,
    Null = 15,
    Text = 18,
    Timestamp = 19,
    Uint = 20,
    Ulid = 23,
}

impl ValueTag {
    /// Stable hash byte tag for this variant.
    #[must_use]
    pub(crate) const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Enum => "Enum",
            Self::List => "List",
            Self::Null => "Null",
            Self::Text => "Text",
            Self::Timestamp => "Timestamp",
            Self::Uint => "Uint",
            Self::Ulid => "Ulid",
        }
    }
}

/// Stable canonical variant tag used by hash/fingerprint encodings.
#[must_use]
pub(super) const fn canonical_tag(value: &Value) -> ValueTag {
    match value {
        Value::Enum(_) => ValueTag::Enum,
        Value::List(_) => ValueTag::List,
        Value::Null => ValueTag::Null,
        Value::Text(_) => ValueTag::Text,
        Value::Timestamp(_) => ValueTag::Timestamp,
        Value::Uint(_) => ValueTag::Uint,
        Value::Ulid(_) => ValueTag::Ulid,
    }
}
