use crate::{
    db::{
        predicate::{CriteriaBuilder, Predicate, PredicateBuilder},
        specs::{QueryShape, Specification},
    },
    entity::{Cluster, ClusterStatus},
    types::Timestamp,
};
use serde::Deserialize;
use std::collections::BTreeSet;

///
/// ClusterCriteria
///
/// Optional filters for a cluster lookup. Every field is independent:
/// `None` means "no constraint". Empty `statuses`/`tags` sets are treated
/// the same as `None`; an empty `name_pattern` still filters.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClusterCriteria {
    /// LIKE pattern matched against the cluster name.
    pub name_pattern: Option<String>,
    /// A cluster matches if its status is any of these.
    pub statuses: Option<BTreeSet<ClusterStatus>>,
    /// A cluster matches only if it carries every one of these tags.
    pub tags: Option<BTreeSet<String>>,
    /// Inclusive lower bound on `updated`.
    pub min_update_time: Option<Timestamp>,
    /// Exclusive upper bound on `updated`.
    pub max_update_time: Option<Timestamp>,
}

impl ClusterCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn statuses(mut self, statuses: impl IntoIterator<Item = ClusterStatus>) -> Self {
        self.statuses = Some(statuses.into_iter().collect());
        self
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub const fn min_update_time(mut self, at: Timestamp) -> Self {
        self.min_update_time = Some(at);
        self
    }

    #[must_use]
    pub const fn max_update_time(mut self, at: Timestamp) -> Self {
        self.max_update_time = Some(at);
        self
    }

    /// Build the in-memory predicate for these criteria.
    #[must_use]
    pub fn to_filter(&self) -> Predicate {
        build_cluster_filter(self, &PredicateBuilder)
    }
}

impl Specification<Cluster> for ClusterCriteria {
    fn to_predicate<B: CriteriaBuilder<Cluster>>(
        &self,
        _shape: &mut QueryShape,
        cb: &B,
    ) -> B::Predicate {
        build_cluster_filter(self, cb)
    }
}

///
/// Compose the cluster filter for `criteria`.
///
/// Conjuncts are emitted in a fixed order: name, lower bound, upper bound,
/// one membership check per tag, then a single OR group over the statuses.
/// With no criteria the result is `cb.conjunction()`, which matches every row.
///
pub fn build_cluster_filter<B>(criteria: &ClusterCriteria, cb: &B) -> B::Predicate
where
    B: CriteriaBuilder<Cluster>,
{
    let mut predicates = Vec::new();

    if let Some(pattern) = &criteria.name_pattern {
        predicates.push(cb.like(Cluster::NAME, pattern));
    }
    if let Some(min) = &criteria.min_update_time {
        predicates.push(cb.greater_than_or_equal_to(Cluster::UPDATED, min));
    }
    if let Some(max) = &criteria.max_update_time {
        predicates.push(cb.less_than(Cluster::UPDATED, max));
    }
    if let Some(tags) = &criteria.tags {
        for tag in tags {
            predicates.push(cb.is_member(tag, Cluster::TAGS));
        }
    }
    if let Some(statuses) = criteria.statuses.as_ref().filter(|s| !s.is_empty()) {
        let any_status = statuses
            .iter()
            .map(|status| cb.equal(Cluster::STATUS, status))
            .collect();
        predicates.push(cb.or(any_status));
    }

    if predicates.is_empty() {
        cb.conjunction()
    } else {
        cb.and(predicates)
    }
}

///
/// TESTS
///
