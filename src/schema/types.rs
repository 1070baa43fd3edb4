use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag of an entity. The set is closed; every source collection maps
/// onto exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Achievement,
    Boss,
    Item,
    Mount,
    Pet,
    Quest,
    Spell,
    Zone,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            EntityType::Achievement => "achievement",
            EntityType::Boss => "boss",
            EntityType::Item => "item",
            EntityType::Mount => "mount",
            EntityType::Pet => "pet",
            EntityType::Quest => "quest",
            EntityType::Spell => "spell",
            EntityType::Zone => "zone",
        };
        write!(f, "{}", tag)
    }
}

/// Identifier of an entity, unique only within its type. The store uses plain
/// integers for most collections but string ids are accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

/// The uniform record every source collection is normalized into.
///
/// `(type, id)` is the lookup key; `name` and `description` are the search
/// fields. Category-specific attributes stay optional and are omitted from
/// JSON bodies when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: EntityType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(rename = "itemLevel", skip_serializing_if = "Option::is_none")]
    pub item_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<i64>,
    #[serde(rename = "requiredLevel", skip_serializing_if = "Option::is_none")]
    pub required_level: Option<i64>,
}

impl Entity {
    /// An entity with every optional attribute absent. Normalizers fill in the
    /// attributes their category carries via struct update syntax.
    pub fn new(kind: EntityType, id: EntityId, name: String) -> Self {
        Self {
            id,
            kind,
            name,
            description: None,
            icon: None,
            points: None,
            item_level: None,
            quality: None,
            required_level: None,
        }
    }
}
