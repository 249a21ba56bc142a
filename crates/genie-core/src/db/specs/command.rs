use crate::{
    db::{
        predicate::{CriteriaBuilder, Predicate, PredicateBuilder},
        specs::{QueryShape, Specification},
    },
    entity::{Command, CommandStatus},
};
use serde::Deserialize;
use std::collections::BTreeSet;

///
/// CommandCriteria
///
/// Optional filters for a command lookup, with the same absence rules as
/// [`ClusterCriteria`](super::ClusterCriteria).
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CommandCriteria {
    pub name_pattern: Option<String>,
    /// Exact owning user.
    pub user: Option<String>,
    pub statuses: Option<BTreeSet<CommandStatus>>,
    pub tags: Option<BTreeSet<String>>,
}

impl CommandCriteria {
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
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    #[must_use]
    pub fn statuses(mut self, statuses: impl IntoIterator<Item = CommandStatus>) -> Self {
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
    pub fn to_filter(&self) -> Predicate {
        build_command_filter(self, &PredicateBuilder)
    }
}

impl Specification<Command> for CommandCriteria {
    fn to_predicate<B: CriteriaBuilder<Command>>(
        &self,
        _shape: &mut QueryShape,
        cb: &B,
    ) -> B::Predicate {
        build_command_filter(self, cb)
    }
}

/// Compose the command filter for `criteria`: name, user, tags, then statuses.
pub fn build_command_filter<B>(criteria: &CommandCriteria, cb: &B) -> B::Predicate
where
    B: CriteriaBuilder<Command>,
{
    let mut predicates = Vec::new();

    if let Some(pattern) = &criteria.name_pattern {
        predicates.push(cb.like(Command::NAME, pattern));
    }
    if let Some(user) = &criteria.user {
        predicates.push(cb.equal(Command::USER, user));
    }
    if let Some(tags) = &criteria.tags {
        for tag in tags {
            predicates.push(cb.is_member(tag, Command::TAGS));
        }
    }
    if let Some(statuses) = criteria.statuses.as_ref().filter(|s| !s.is_empty()) {
        let any_status = statuses
            .iter()
            .map(|status| cb.equal(Command::STATUS, status))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_support::{Call, RecordingBuilder},
        value::Value,
    };

    fn record(criteria: &CommandCriteria) -> RecordingBuilder {
        let cb = RecordingBuilder::default();
        build_command_filter(criteria, &cb);
        cb
    }

    fn full() -> CommandCriteria {
        CommandCriteria::new()
            .name_pattern("spark%")
            .user("tgianos")
            .statuses([CommandStatus::Active, CommandStatus::Deprecated])
            .tags(["batch", "spark"])
    }

    fn like_name() -> Call {
        Call::Like {
            field: "name",
            pattern: "spark%".to_string(),
        }
    }

    fn user_is() -> Call {
        Call::Equal {
            field: "user",
            value: Value::from("tgianos"),
        }
    }

    fn status_groups(cb: &RecordingBuilder) -> usize {
        cb.count(|call| matches!(call, Call::Or(_)))
    }

    fn tag_checks(cb: &RecordingBuilder) -> usize {
        cb.count(|call| matches!(call, Call::IsMember { field: "tags", .. }))
    }

    #[test]
    fn all_criteria_present() {
        let criteria = full();
        let cb = record(&criteria);

        assert_eq!(cb.times(&like_name()), 1);
        assert_eq!(cb.times(&user_is()), 1);
        assert_eq!(tag_checks(&cb), 2);
        assert_eq!(cb.count(|call| matches!(call, Call::Or(children) if children.len() == 2)), 1);
        assert_eq!(criteria.to_filter().conjuncts().len(), 5);
    }

    #[test]
    fn name_pattern_absent_emits_no_like() {
        let criteria = CommandCriteria {
            name_pattern: None,
            ..full()
        };
        let cb = record(&criteria);

        assert_eq!(cb.count(|call| matches!(call, Call::Like { .. })), 0);
        assert_eq!(cb.times(&user_is()), 1);
        assert_eq!(tag_checks(&cb), 2);
        assert_eq!(status_groups(&cb), 1);
        assert_eq!(criteria.to_filter().conjuncts().len(), 4);
    }

    #[test]
    fn user_absent_emits_no_equality_on_user() {
        let criteria = CommandCriteria {
            user: None,
            ..full()
        };
        let cb = record(&criteria);

        assert_eq!(
            cb.count(|call| matches!(call, Call::Equal { field: "user", .. })),
            0
        );
        assert_eq!(cb.times(&like_name()), 1);
        assert_eq!(tag_checks(&cb), 2);
        assert_eq!(status_groups(&cb), 1);
        assert_eq!(criteria.to_filter().conjuncts().len(), 4);
    }

    #[test]
    fn tags_absent_emit_no_membership_checks() {
        let criteria = CommandCriteria {
            tags: None,
            ..full()
        };
        let cb = record(&criteria);

        assert_eq!(tag_checks(&cb), 0);
        assert_eq!(cb.times(&like_name()), 1);
        assert_eq!(cb.times(&user_is()), 1);
        assert_eq!(status_groups(&cb), 1);
        assert_eq!(criteria.to_filter().conjuncts().len(), 3);
    }

    #[test]
    fn statuses_absent_emit_no_status_group() {
        let criteria = CommandCriteria {
            statuses: None,
            ..full()
        };
        let cb = record(&criteria);

        assert_eq!(status_groups(&cb), 0);
        assert_eq!(
            cb.count(|call| matches!(call, Call::Equal { field: "status", .. })),
            0
        );
        assert_eq!(cb.times(&like_name()), 1);
        assert_eq!(cb.times(&user_is()), 1);
        assert_eq!(tag_checks(&cb), 2);
        assert_eq!(criteria.to_filter().conjuncts().len(), 4);
    }

    #[test]
    fn empty_collections_are_no_constraint() {
        let criteria = CommandCriteria {
            statuses: Some(BTreeSet::new()),
            tags: Some(BTreeSet::new()),
            ..CommandCriteria::default()
        };

        assert_eq!(record(&criteria).calls(), vec![Call::Conjunction]);
        assert_eq!(criteria.to_filter(), Predicate::True);
    }
}
