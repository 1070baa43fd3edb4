//! Schema Module Tests
//!
//! Validates the category schema table and the per-category normalizers.
//!
//! ## Test Scopes
//! - **Table**: the category set is complete and internally consistent.
//! - **Normalizers**: field renames per category, handling of absent fields.
//! - **Wire shape**: JSON serialization of the uniform entity record.

#[cfg(test)]
mod tests {
    use crate::schema::table::CATEGORIES;
    use crate::schema::types::{Entity, EntityId, EntityType};
    use serde_json::json;

    fn category(collection: &str) -> &'static crate::schema::table::Category {
        CATEGORIES
            .iter()
            .find(|c| c.collection == collection)
            .expect("unknown collection")
    }

    // ============================================================
    // CATEGORY TABLE
    // ============================================================

    #[test]
    fn test_table_covers_all_collections() {
        let collections: Vec<&str> = CATEGORIES.iter().map(|c| c.collection).collect();

        assert_eq!(
            collections,
            vec![
                "achievements",
                "bosses",
                "items",
                "mounts",
                "pets",
                "quests",
                "spells",
                "zones"
            ]
        );
    }

    #[test]
    fn test_table_kinds_are_distinct() {
        let mut kinds: Vec<EntityType> = CATEGORIES.iter().map(|c| c.kind).collect();
        kinds.sort();
        kinds.dedup();

        assert_eq!(kinds.len(), CATEGORIES.len());
    }

    #[test]
    fn test_table_projections_are_nonempty() {
        for c in CATEGORIES {
            assert!(
                !c.projection.is_empty(),
                "{} has an empty projection",
                c.collection
            );
        }
    }

    // ============================================================
    // NORMALIZERS - field renames per category
    // ============================================================

    #[test]
    fn test_achievement_renames_title_to_name() {
        let record = json!({
            "id": 42,
            "title": "Level 10",
            "description": "Reach level 10.",
            "icon": "achievement_level_10",
            "points": 10
        });

        let entity = category("achievements").normalize(&record).unwrap();

        assert_eq!(entity.kind, EntityType::Achievement);
        assert_eq!(entity.id, EntityId::Int(42));
        assert_eq!(entity.name, "Level 10");
        assert_eq!(entity.description.as_deref(), Some("Reach level 10."));
        assert_eq!(entity.points, Some(10));
    }

    #[test]
    fn test_mount_renames_spell_id_and_quality_id() {
        let record = json!({
            "spellId": 458,
            "name": "Brown Horse",
            "qualityId": 3,
            "icon": "ability_mount_ridinghorse"
        });

        let entity = category("mounts").normalize(&record).unwrap();

        assert_eq!(entity.kind, EntityType::Mount);
        assert_eq!(entity.id, EntityId::Int(458));
        assert_eq!(entity.quality, Some(3));
        assert_eq!(entity.icon.as_deref(), Some("ability_mount_ridinghorse"));
    }

    #[test]
    fn test_pet_renames_creature_id() {
        let record = json!({
            "creatureId": 7385,
            "name": "Mechanical Squirrel",
            "qualityId": 1
        });

        let entity = category("pets").normalize(&record).unwrap();

        assert_eq!(entity.kind, EntityType::Pet);
        assert_eq!(entity.id, EntityId::Int(7385));
        assert_eq!(entity.quality, Some(1));
    }

    #[test]
    fn test_item_keeps_level_fields() {
        let record = json!({
            "id": 19019,
            "name": "Thunderfury",
            "itemLevel": 80,
            "quality": 5,
            "requiredLevel": 60
        });

        let entity = category("items").normalize(&record).unwrap();

        assert_eq!(entity.item_level, Some(80));
        assert_eq!(entity.quality, Some(5));
        assert_eq!(entity.required_level, Some(60));
        // Items carry no description
        assert!(entity.description.is_none());
    }

    #[test]
    fn test_quest_renames_title_to_name() {
        let record = json!({
            "id": 1,
            "title": "A Threat Within",
            "description": "Speak with Marshal McBride."
        });

        let entity = category("quests").normalize(&record).unwrap();

        assert_eq!(entity.kind, EntityType::Quest);
        assert_eq!(entity.name, "A Threat Within");
    }

    // ============================================================
    // NORMALIZERS - absent fields
    // ============================================================

    #[test]
    fn test_missing_optional_fields_stay_absent() {
        // A boss without a description is valid; nothing gets defaulted in.
        let record = json!({ "id": 10, "name": "Ancient Dragon" });

        let entity = category("bosses").normalize(&record).unwrap();

        assert_eq!(entity.name, "Ancient Dragon");
        assert!(entity.description.is_none());
        assert!(entity.icon.is_none());
        assert!(entity.points.is_none());
    }

    #[test]
    fn test_missing_name_rejects_record() {
        let record = json!({ "id": 7 });

        assert!(category("zones").normalize(&record).is_none());
    }

    #[test]
    fn test_missing_id_rejects_record() {
        let record = json!({ "name": "Elwynn Forest" });

        assert!(category("zones").normalize(&record).is_none());
    }

    #[test]
    fn test_string_ids_are_accepted() {
        let record = json!({ "id": "npc-1042", "name": "Gatekeeper" });

        let entity = category("bosses").normalize(&record).unwrap();

        assert_eq!(entity.id, EntityId::Text("npc-1042".to_string()));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let record = json!({
            "id": 133,
            "name": "Fireball",
            "description": "Hurls a fiery ball.",
            "icon": "spell_fire_flamebolt"
        });

        let spells = category("spells");
        let first = spells.normalize(&record).unwrap();
        let second = spells.normalize(&record).unwrap();

        assert_eq!(first, second);
    }

    // ============================================================
    // WIRE SHAPE
    // ============================================================

    #[test]
    fn test_entity_serializes_with_lowercase_type_tag() {
        let entity = Entity::new(
            EntityType::Boss,
            EntityId::Int(10),
            "Ancient Dragon".to_string(),
        );

        let value = serde_json::to_value(&entity).unwrap();

        assert_eq!(value["type"], "boss");
        assert_eq!(value["id"], 10);
        assert_eq!(value["name"], "Ancient Dragon");
    }

    #[test]
    fn test_absent_attributes_are_omitted_from_json() {
        let entity = Entity::new(EntityType::Zone, EntityId::Int(1), "Durotar".to_string());

        let value = serde_json::to_value(&entity).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("description"));
        assert!(!object.contains_key("itemLevel"));
        assert!(!object.contains_key("quality"));
    }

    #[test]
    fn test_item_level_uses_camel_case_on_the_wire() {
        let mut entity = Entity::new(EntityType::Item, EntityId::Int(5), "Axe".to_string());
        entity.item_level = Some(20);
        entity.required_level = Some(15);

        let value = serde_json::to_value(&entity).unwrap();

        assert_eq!(value["itemLevel"], 20);
        assert_eq!(value["requiredLevel"], 15);
    }

    #[test]
    fn test_entity_type_is_usable_as_json_map_key() {
        // The lookup body maps type tags to id lists.
        let body = r#"{ "quest": [1, 2], "boss": [10] }"#;

        let parsed: std::collections::BTreeMap<EntityType, Vec<EntityId>> =
            serde_json::from_str(body).unwrap();

        assert_eq!(parsed[&EntityType::Quest], vec![
            EntityId::Int(1),
            EntityId::Int(2)
        ]);
        assert_eq!(parsed[&EntityType::Boss], vec![EntityId::Int(10)]);
    }
}
