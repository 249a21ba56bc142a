//! In-memory query execution.
//!
//! Executes a validated predicate over borrowed rows. Storage engines plug
//! in above this layer by supplying the row iterator.

mod trace;

use crate::{
    config::EngineConfig,
    db::{
        predicate::{
            LikePatterns, Predicate, PredicateBuilder, PredicateFingerprint, eval, validate,
        },
        specs::{QueryShape, Specification},
    },
    error::InternalError,
    traits::EntityValue,
    value::{Value, canonical_cmp},
};
use std::{cmp::Ordering, collections::BTreeSet, marker::PhantomData};

pub use trace::{QueryTraceEvent, QueryTraceSink};

///
/// Query
///
/// A predicate plus result-set shape, bound to entity `E`.
///

#[derive(Clone, Debug)]
pub struct Query<E> {
    predicate: Predicate,
    shape: QueryShape,
    _marker: PhantomData<fn() -> E>,
}

impl<E: EntityValue> Query<E> {
    #[must_use]
    pub const fn new(predicate: Predicate) -> Self {
        Self {
            predicate,
            shape: QueryShape { distinct: false },
            _marker: PhantomData,
        }
    }

    /// Build a query from a specification, letting it set result-set flags.
    #[must_use]
    pub fn from_spec<S: Specification<E>>(spec: &S) -> Self {
        let mut shape = QueryShape::default();
        let predicate = spec.to_predicate(&mut shape, &PredicateBuilder);

        Self {
            predicate,
            shape,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn distinct(mut self, distinct: bool) -> Self {
        self.shape.distinct = distinct;
        self
    }

    #[must_use]
    pub const fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    #[must_use]
    pub const fn shape(&self) -> QueryShape {
        self.shape
    }

    #[must_use]
    pub fn fingerprint(&self) -> PredicateFingerprint {
        PredicateFingerprint::of(&self.predicate)
    }

    /// Execute with default configuration and no tracing.
    pub fn execute<'a, I>(&self, rows: I) -> Result<Vec<&'a E>, InternalError>
    where
        I: IntoIterator<Item = &'a E>,
    {
        self.execute_with(rows, &EngineConfig::default(), None)
    }

    /// Execute against `rows`, returning matches in input order.
    ///
    /// The configuration and the predicate are both checked before the
    /// first row is read.
    pub fn execute_with<'a, I>(
        &self,
        rows: I,
        config: &EngineConfig,
        sink: Option<&dyn QueryTraceSink>,
    ) -> Result<Vec<&'a E>, InternalError>
    where
        I: IntoIterator<Item = &'a E>,
    {
        let entity = E::MODEL.entity_name;
        let fingerprint = self.fingerprint();

        trace::emit(
            sink,
            QueryTraceEvent::Start {
                entity,
                fingerprint,
                distinct: self.shape.distinct,
            },
        );

        let checked = config
            .validate()
            .map_err(InternalError::from)
            .and_then(|()| validate(E::MODEL, &self.predicate).map_err(InternalError::from));
        if let Err(err) = checked {
            trace::emit(
                sink,
                QueryTraceEvent::Error {
                    entity,
                    fingerprint,
                    class: err.class,
                },
            );
            return Err(err);
        }

        let like = LikePatterns::compile(&self.predicate, &config.like);
        let mut seen = BTreeSet::new();
        let mut rows_scanned = 0u64;
        let mut matched = Vec::new();

        for row in rows {
            rows_scanned = rows_scanned.saturating_add(1);

            if !eval(row, &self.predicate, &like) {
                continue;
            }
            if self.shape.distinct && !seen.insert(KeyOrd(row.key())) {
                continue;
            }
            matched.push(row);
        }

        trace::emit(
            sink,
            QueryTraceEvent::Finish {
                entity,
                fingerprint,
                rows_scanned,
                rows_matched: u64::try_from(matched.len()).unwrap_or(u64::MAX),
            },
        );

        Ok(matched)
    }
}

///
/// KeyOrd
///
/// Primary-key wrapper ordered by the canonical value comparator.
///

#[derive(Debug)]
struct KeyOrd(Value);

impl PartialEq for KeyOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for KeyOrd {}

impl PartialOrd for KeyOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KeyOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        canonical_cmp(&self.0, &other.0)
    }
}

///
/// TESTS
///
