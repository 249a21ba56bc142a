mod compare;
mod like;
mod tag;


use crate::types::Timestamp;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

// re-exports
pub use compare::{canonical_cmp, strict_order_cmp};
pub use like::LikePattern;
pub(crate) use tag::ValueTag;

///
/// TextMode
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextMode {
    Cs, // case-sensitive
    Ci, // case-insensitive
}

///
/// Value
/// can be used in WHERE statements
///
/// Null        → the field’s value is Option::None (i.e., SQL NULL).
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Enum(ValueEnum),
    /// Ordered list of values.
    /// Set-valued fields are lowered to a list in their natural order.
    List(Vec<Self>),
    Null,
    Text(String),
    Timestamp(Timestamp),
    Uint(u64),
    Ulid(Ulid),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from a list literal.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: Into<Self> + Clone,
    {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub(crate) const fn canonical_tag(&self) -> ValueTag {
        tag::canonical_tag(self)
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(xs) = self {
            Some(xs.as_slice())
        } else {
            None
        }
    }

    ///
    /// TEXT
    ///

    #[must_use]
    /// Match `self` against a SQL-style LIKE pattern.
    /// Returns `None` when `self` is not text.
    pub fn text_like(&self, pattern: &LikePattern) -> Option<bool> {
        self.as_text().map(|text| pattern.matches(text))
    }

    ///
    /// COLLECTIONS
    ///

    #[must_use]
    /// Returns true if `self` is a list holding `needle`.
    /// Returns `None` when `self` is not a collection.
    pub fn contains(&self, needle: &Self) -> Option<bool> {
        self.as_list().map(|items| items.iter().any(|item| item == needle))
    }

    #[must_use]
    /// Returns true if `self` exists inside the provided list.
    pub fn in_list(&self, haystack: &Self) -> Option<bool> {
        haystack.contains(self)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Timestamp> for Value {
    fn from(ts: Timestamp) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<Ulid> for Value {
    fn from(id: Ulid) -> Self {
        Self::Ulid(id)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Uint(n)
    }
}

impl From<ValueEnum> for Value {
    fn from(v: ValueEnum) -> Self {
        Self::Enum(v)
    }
}

///
/// ValueEnum
/// handles the Enum case; `path` is optional to allow strict (typed) or loose matching.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, PartialOrd, Serialize)]
pub struct ValueEnum {
    pub variant: String,
    pub path: Option<String>,
}

impl ValueEnum {
    #[must_use]
    /// Build a strict enum value matching the provided variant and path.
    pub fn new(variant: &str, path: Option<&str>) -> Self {
        Self {
            variant: variant.to_string(),
            path: path.map(ToString::to_string),
        }
    }

    #[must_use]
    /// Build an enum value that ignores the path for loose matching.
    pub fn loose(variant: &str) -> Self {
        Self::new(variant, None)
    }
}
