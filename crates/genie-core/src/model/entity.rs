use crate::model::field::EntityFieldModel;

///
/// EntityModel
/// Minimal, hand-declared runtime model for one entity.
///

#[derive(Debug)]
pub struct EntityModel {
    /// Fully-qualified Rust type path (for diagnostics).
    pub path: &'static str,
    /// Stable external name used in traces and errors.
    pub entity_name: &'static str,
    /// Primary key field (points at an entry in `fields`).
    pub primary_key: &'static EntityFieldModel,
    /// Ordered field list (authoritative for validation).
    pub fields: &'static [EntityFieldModel],
}

impl EntityModel {
    /// Resolve a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static EntityFieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }
}
