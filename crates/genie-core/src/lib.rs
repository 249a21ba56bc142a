//! Core runtime for Genie cluster/command lookups: typed attribute handles,
//! criteria value objects, the predicate composer, and an in-memory executor.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod model;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, executors, or config loaders are re-exported here.
///

pub mod prelude {
    pub use crate::{
        db::{
            predicate::{CriteriaBuilder, Predicate, PredicateBuilder},
            specs::{ClusterCriteria, CommandCriteria, Specification},
        },
        entity::{Cluster, ClusterStatus, Command, CommandStatus},
        model::{Attribute, SetAttribute},
        traits::{EntityKind, EntityValue, FieldValue},
        types::Timestamp,
        value::Value,
    };
}
