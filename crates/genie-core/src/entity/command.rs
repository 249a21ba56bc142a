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
/// CommandStatus
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandStatus {
    Active,
    Deprecated,
    Inactive,
}

impl CommandStatus {
    pub const PATH: &'static str = "genie_core::entity::CommandStatus";

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Deprecated => "DEPRECATED",
            Self::Inactive => "INACTIVE",
        }
    }
}

impl EnumValue for CommandStatus {
    fn to_value_enum(&self) -> ValueEnum {
        ValueEnum::new(self.as_str(), Some(Self::PATH))
    }
}

impl FieldValue for CommandStatus {
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
            "ACTIVE" => Some(Self::Active),
            "DEPRECATED" => Some(Self::Deprecated),
            "INACTIVE" => Some(Self::Inactive),
            _ => None,
        }
    }
}

///
/// Command
///
/// An executable registered with the service and attachable to clusters.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Command {
    pub id: Ulid,
    pub name: String,
    pub user: String,
    pub status: CommandStatus,
    pub tags: BTreeSet<String>,
    pub updated: Timestamp,
}

impl Command {
    pub const ID: Attribute<Self, Ulid> = Attribute::new("id");
    pub const NAME: Attribute<Self, String> = Attribute::new("name");
    pub const USER: Attribute<Self, String> = Attribute::new("user");
    pub const STATUS: Attribute<Self, CommandStatus> = Attribute::new("status");
    pub const TAGS: SetAttribute<Self, String> = SetAttribute::new("tags");
    pub const UPDATED: Attribute<Self, Timestamp> = Attribute::new("updated");

    #[must_use]
    pub fn new(
        id: Ulid,
        name: impl Into<String>,
        user: impl Into<String>,
        status: CommandStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            user: user.into(),
            status,
            tags: BTreeSet::new(),
            updated: Timestamp::EPOCH,
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
}

static COMMAND_FIELDS: [EntityFieldModel; 6] = [
    EntityFieldModel {
        name: "id",
        kind: EntityFieldKind::Ulid,
    },
    EntityFieldModel {
        name: "name",
        kind: EntityFieldKind::Text,
    },
    EntityFieldModel {
        name: "user",
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
];

static COMMAND_MODEL: EntityModel = EntityModel {
    path: Command::PATH,
    entity_name: "command",
    primary_key: &COMMAND_FIELDS[0],
    fields: &COMMAND_FIELDS,
};

impl Path for Command {
    const PATH: &'static str = "genie_core::entity::Command";
}

impl EntityKind for Command {
    const MODEL: &'static EntityModel = &COMMAND_MODEL;
}

impl EntityValue for Command {
    fn get_value(&self, field: &str) -> Option<Value> {
        let value = match field {
            "id" => self.id.to_value(),
            "name" => self.name.to_value(),
            "user" => self.user.to_value(),
            "status" => self.status.to_value(),
            "tags" => self.tags.to_value(),
            "updated" => self.updated.to_value(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_handles_resolve_in_model() {
        let names = [
            Command::ID.name(),
            Command::NAME.name(),
            Command::USER.name(),
            Command::STATUS.name(),
            Command::TAGS.name(),
            Command::UPDATED.name(),
        ];

        for name in names {
            assert!(Command::MODEL.field(name).is_some(), "{name} missing");
        }
    }

    #[test]
    fn status_value_round_trips_through_runtime_value() {
        for status in [
            CommandStatus::Active,
            CommandStatus::Deprecated,
            CommandStatus::Inactive,
        ] {
            assert_eq!(CommandStatus::from_value(&status.to_value()), Some(status));
        }
    }
}
