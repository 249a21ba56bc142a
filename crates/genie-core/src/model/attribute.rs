use std::{fmt, marker::PhantomData};

///
/// Attribute
///
/// Typed handle for a single-valued attribute of entity `E` holding `T`.
/// Handles carry only the field name; the type parameters keep builder
/// calls honest at compile time without touching storage representation.
///

pub struct Attribute<E, T> {
    name: &'static str,
    _marker: PhantomData<fn(&E) -> T>,
}

impl<E, T> Attribute<E, T> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<E, T> Clone for Attribute<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T> Copy for Attribute<E, T> {}

impl<E, T> fmt::Debug for Attribute<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Attribute").field(&self.name).finish()
    }
}

impl<E, T> PartialEq for Attribute<E, T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<E, T> Eq for Attribute<E, T> {}

///
/// SetAttribute
///
/// Typed handle for a multi-valued attribute of entity `E` whose elements are `T`.
///

pub struct SetAttribute<E, T> {
    name: &'static str,
    _marker: PhantomData<fn(&E) -> T>,
}

impl<E, T> SetAttribute<E, T> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<E, T> Clone for SetAttribute<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T> Copy for SetAttribute<E, T> {}

impl<E, T> fmt::Debug for SetAttribute<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SetAttribute").field(&self.name).finish()
    }
}

impl<E, T> PartialEq for SetAttribute<E, T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<E, T> Eq for SetAttribute<E, T> {}
