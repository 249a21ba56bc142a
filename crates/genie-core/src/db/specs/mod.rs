//! Criteria specifications.
//!
//! A specification turns a caller-supplied criteria value object into a
//! predicate through any [`CriteriaBuilder`]. Each supplied criterion adds
//! its own conjunct; absent criteria add nothing.
//!
//! Filters that join clusters to their commands are not provided yet. They
//! plug in here as further `Specification<Cluster>` implementations and use
//! [`QueryShape::distinct`] to drop the duplicate rows a one-to-many join
//! produces.

mod cluster;
mod command;

use crate::db::predicate::CriteriaBuilder;

pub use cluster::{ClusterCriteria, build_cluster_filter};
pub use command::{CommandCriteria, build_command_filter};

///
/// QueryShape
///
/// Result-set flags a specification may set alongside its predicate.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct QueryShape {
    /// Collapse rows with the same primary key.
    pub distinct: bool,
}

///
/// Specification
///
/// Source of a predicate over entity `E`.
///

pub trait Specification<E> {
    fn to_predicate<B: CriteriaBuilder<E>>(&self, shape: &mut QueryShape, cb: &B) -> B::Predicate;
}
