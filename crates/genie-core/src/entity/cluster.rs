use crate::{
    model::{Attribute, EntityFieldKind, EntityFieldModel, EntityModel, SetAttribute},
    traits::{EntityKind, EntityValue, EnumValue, FieldValue, Path},
    types::Timestamp,
    value::{Value, ValueEnum},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use ulid::Ulid;

///
/// ClusterStatus
///
/// Lifecycle state of a cluster.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClusterStatus {
    Up,
    OutOfService,
    Terminated,
}

impl ClusterStatus {
    pub const PATH: &'static str = "genie_core::entity::ClusterStatus";

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::OutOfService => "OUT_OF_SERVICE",
            Self::Terminated => "TERMINATED",
        }
    }
}

impl EnumValue for ClusterStatus {
    fn to_value_enum(&self) -> ValueEnum {
        ValueEnum::new(self.as_str(), Some(Self::PATH))
    }
}

impl FieldValue for ClusterStatus {
    fn to_value(&self) -> Value {
        Value::Enum(self.to_value_enum())
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Value::Enum(v) = value else {
            return None;
        };
        if v.path.as_deref().is_some_and(|path| path != Self::PATH) {
            return None;
        }

        match v.variant.as_str() {
            "UP" => Some(Self::Up),
            "OUT_OF_SERVICE" => Some(Self::OutOfService),
            "TERMINATED" => Some(Self::Terminated),
            _ => None,
        }
    }
}

///
/// Cluster
///
/// An execution cluster that commands can be submitted to.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cluster {
    pub id: Ulid,
    pub name: String,
    pub status: ClusterStatus,
    pub tags: BTreeSet<String>,
    pub updated: Timestamp,
    /// Commands runnable on this cluster; only used by join filters.
    pub commands: Vec<Ulid>,
}

impl Cluster {
    pub const ID: Attribute<Self, Ulid> = Attribute::new("id");
    pub const NAME: Attribute<Self, String> = Attribute::new("name");
    pub const STATUS: Attribute<Self, ClusterStatus> = Attribute::new("status");
    pub const TAGS: SetAttribute<Self, String> = SetAttribute::new("tags");
    pub const UPDATED: Attribute<Self, Timestamp> = Attribute::new("updated");
    pub const COMMANDS: SetAttribute<Self, Ulid> = SetAttribute::new("commands");

    #[must_use]
    pub fn new(id: Ulid, name: impl Into<String>, status: ClusterStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            tags: BTreeSet::new(),
            updated: Timestamp::EPOCH,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_updated(mut self, updated: Timestamp) -> Self {
        self.updated = updated;
        self
    }

    #[must_use]
    pub fn with_commands(mut self, commands: impl IntoIterator<Item = Ulid>) -> Self {
        self.commands = commands.into_iter().collect();
        self
    }
}

static CLUSTER_FIELDS: [EntityFieldModel; 6] = [
    EntityFieldModel {
        name: "id",
        kind: EntityFieldKind::Ulid,
    },
    EntityFieldModel {
        name: "name",
        kind: EntityFieldKind::Text,
    },
    EntityFieldModel {
        name: "status",
        kind: EntityFieldKind::Enum,
    },
    EntityFieldModel {
        name: "tags",
        kind: EntityFieldKind::Set(&EntityFieldKind::Text),
    },
    EntityFieldModel {
        name: "updated",
        kind: EntityFieldKind::Timestamp,
    },
    EntityFieldModel {
        name: "commands",
        kind: EntityFieldKind::List(&EntityFieldKind::Ulid),
    },
];

static CLUSTER_MODEL: EntityModel = EntityModel {
    path: Cluster::PATH,
    entity_name: "cluster",
    primary_key: &CLUSTER_FIELDS[0],
    fields: &CLUSTER_FIELDS,
};

impl Path for Cluster {
    const PATH: &'static str = "genie_core::entity::Cluster";
}

impl EntityKind for Cluster {
    const MODEL: &'static EntityModel = &CLUSTER_MODEL;
}

impl EntityValue for Cluster {
    fn get_value(&self, field: &str) -> Option<Value> {
        let value = match field {
            "id" => self.id.to_value(),
            "name" => self.name.to_value(),
            "status" => self.status.to_value(),
            "tags" => self.tags.to_value(),
            "updated" => self.updated.to_value(),
            "commands" => self.commands.to_value(),
            _ => return None,
        };

        Some(value)
    }

    fn key(&self) -> Value {
        self.id.to_value()
    }
}

///
/// TESTS
///
