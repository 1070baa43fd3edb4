use super::types::{Entity, EntityId, EntityType};
use serde_json::Value;

/// One entry of the category schema table: which collection to read, which
/// fields to project, and how a raw record becomes an [`Entity`].
pub struct Category {
    /// Source collection name in the document store.
    pub collection: &'static str,
    /// Type tag stamped on every entity of this category.
    pub kind: EntityType,
    /// Fields requested from the store. Full records are never pulled.
    pub projection: &'static [&'static str],
    mapper: fn(&Value) -> Option<Entity>,
}

impl Category {
    /// Projects a raw store record into the uniform entity shape.
    ///
    /// Pure and idempotent. Returns `None` when the record is missing its
    /// identity fields (id or name source field); optional attributes that are
    /// absent stay absent, they are never defaulted.
    pub fn normalize(&self, record: &Value) -> Option<Entity> {
        (self.mapper)(record)
    }
}

/// The complete category schema table. Fixed at build time, never mutated.
pub const CATEGORIES: &[Category] = &[
    Category {
        collection: "achievements",
        kind: EntityType::Achievement,
        projection: &["description", "icon", "id", "points", "title"],
        mapper: map_achievement,
    },
    Category {
        collection: "bosses",
        kind: EntityType::Boss,
        projection: &["description", "id", "name"],
        mapper: map_boss,
    },
    Category {
        collection: "items",
        kind: EntityType::Item,
        projection: &["icon", "id", "itemLevel", "name", "quality", "requiredLevel"],
        mapper: map_item,
    },
    Category {
        collection: "mounts",
        kind: EntityType::Mount,
        projection: &["icon", "name", "qualityId", "spellId"],
        mapper: map_mount,
    },
    Category {
        collection: "pets",
        kind: EntityType::Pet,
        projection: &["creatureId", "icon", "name", "qualityId"],
        mapper: map_pet,
    },
    Category {
        collection: "quests",
        kind: EntityType::Quest,
        projection: &["description", "id", "title"],
        mapper: map_quest,
    },
    Category {
        collection: "spells",
        kind: EntityType::Spell,
        projection: &["description", "icon", "id", "name"],
        mapper: map_spell,
    },
    Category {
        collection: "zones",
        kind: EntityType::Zone,
        projection: &["description", "id", "name"],
        mapper: map_zone,
    },
];

fn map_achievement(record: &Value) -> Option<Entity> {
    Some(Entity {
        description: text(record, "description"),
        icon: text(record, "icon"),
        points: int(record, "points"),
        ..Entity::new(
            EntityType::Achievement,
            id(record, "id")?,
            text(record, "title")?,
        )
    })
}

fn map_boss(record: &Value) -> Option<Entity> {
    Some(Entity {
        description: text(record, "description"),
        ..Entity::new(EntityType::Boss, id(record, "id")?, text(record, "name")?)
    })
}

fn map_item(record: &Value) -> Option<Entity> {
    Some(Entity {
        icon: text(record, "icon"),
        item_level: int(record, "itemLevel"),
        quality: int(record, "quality"),
        required_level: int(record, "requiredLevel"),
        ..Entity::new(EntityType::Item, id(record, "id")?, text(record, "name")?)
    })
}

fn map_mount(record: &Value) -> Option<Entity> {
    Some(Entity {
        icon: text(record, "icon"),
        quality: int(record, "qualityId"),
        ..Entity::new(EntityType::Mount, id(record, "spellId")?, text(record, "name")?)
    })
}

fn map_pet(record: &Value) -> Option<Entity> {
    Some(Entity {
        icon: text(record, "icon"),
        quality: int(record, "qualityId"),
        ..Entity::new(EntityType::Pet, id(record, "creatureId")?, text(record, "name")?)
    })
}

fn map_quest(record: &Value) -> Option<Entity> {
    Some(Entity {
        description: text(record, "description"),
        ..Entity::new(EntityType::Quest, id(record, "id")?, text(record, "title")?)
    })
}

fn map_spell(record: &Value) -> Option<Entity> {
    Some(Entity {
        description: text(record, "description"),
        icon: text(record, "icon"),
        ..Entity::new(EntityType::Spell, id(record, "id")?, text(record, "name")?)
    })
}

fn map_zone(record: &Value) -> Option<Entity> {
    Some(Entity {
        description: text(record, "description"),
        ..Entity::new(EntityType::Zone, id(record, "id")?, text(record, "name")?)
    })
}

fn id(record: &Value, field: &str) -> Option<EntityId> {
    match record.get(field)? {
        Value::Number(n) => n.as_i64().map(EntityId::Int),
        Value::String(s) => Some(EntityId::Text(s.clone())),
        _ => None,
    }
}

fn text(record: &Value, field: &str) -> Option<String> {
    record.get(field)?.as_str().map(str::to_string)
}

fn int(record: &Value, field: &str) -> Option<i64> {
    record.get(field)?.as_i64()
}
