//! Queryable entities.
//!
//! Each entity declares its runtime model plus typed attribute handles,
//! so filter builders can name fields without stringly-typed access.

mod cluster;
mod command;

pub use cluster::{Cluster, ClusterStatus};
pub use command::{Command, CommandStatus};
