//! Query surface: predicates, criteria specifications, and execution.

pub mod executor;
pub mod predicate;
pub mod specs;

pub use executor::{Query, QueryTraceEvent, QueryTraceSink};
