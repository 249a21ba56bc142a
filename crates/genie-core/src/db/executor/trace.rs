//! Executor query tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect execution semantics.

use crate::{db::predicate::PredicateFingerprint, error::ErrorClass};

///
/// QueryTraceSink
///

pub trait QueryTraceSink: Send + Sync {
    fn on_event(&self, event: QueryTraceEvent);
}

///
/// QueryTraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueryTraceEvent {
    Start {
        entity: &'static str,
        fingerprint: PredicateFingerprint,
        distinct: bool,
    },
    Finish {
        entity: &'static str,
        fingerprint: PredicateFingerprint,
        rows_scanned: u64,
        rows_matched: u64,
    },
    Error {
        entity: &'static str,
        fingerprint: PredicateFingerprint,
        class: ErrorClass,
    },
}

// Forward one event when a sink is installed.
pub(super) fn emit(sink: Option<&dyn QueryTraceSink>, event: QueryTraceEvent) {
    if let Some(sink) = sink {
        sink.on_event(event);
    }
}
