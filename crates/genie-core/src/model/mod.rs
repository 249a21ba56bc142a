//! Runtime entity metadata and typed attribute handles.

pub mod attribute;
pub mod entity;
pub mod field;

pub use attribute::{Attribute, SetAttribute};
pub use entity::EntityModel;
pub use field::{EntityFieldKind, EntityFieldModel};
