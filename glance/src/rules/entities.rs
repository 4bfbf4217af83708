//! Entity previews: beehives, mob buckets, spawn eggs and armor stands.

use crate::config::EntityConfig;
use crate::data::{DataRef, BLOCK_STATE_TAG, ENTITY_TAG};
use crate::item::{BlockKind, ItemId, ItemKind};
use crate::rules::display::plain_text;
use crate::rules::RuleContext;
use crate::tooltip::{EntityHolder, EntityPreview, TooltipNode, TooltipPayload};

/// Side of one entity cell.
const ENTITY_SIZE: u32 = 24;

/// Extra height when names are drawn above entities.
const NAME_HEIGHT: u32 = 8;

/// Width of spawn egg and armor stand previews.
const WIDE_PREVIEW: u32 = 128;

const SPAWN_EGG_EXTRA_HEIGHT: u32 = 36;
const ARMOR_STAND_EXTRA_HEIGHT: u32 = 16;

const BEE: &str = "minecraft:bee";
const ARMOR_STAND: &str = "minecraft:armor_stand";

fn entity_height(named: bool) -> u32 {
    if named {
        ENTITY_SIZE + NAME_HEIGHT
    } else {
        ENTITY_SIZE
    }
}

fn custom_name(entity: DataRef<'_>) -> Option<String> {
    entity
        .string("CustomName")
        .map(plain_text)
        .filter(|name| !name.is_empty())
}

fn is_valid_entity_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "_-.:/".contains(c))
}

/// Builds the single-entity leaf shared by spawn eggs and armor stands.
fn holder_node(
    holder: EntityHolder,
    entity: String,
    tag: Option<DataRef<'_>>,
    config: &EntityConfig,
    extra_height: u32,
) -> TooltipNode {
    let custom_name = if config.always_show_name {
        tag.and_then(custom_name)
    } else {
        None
    };
    let height = entity_height(custom_name.is_some()) + extra_height;

    TooltipNode::leaf(
        WIDE_PREVIEW,
        height,
        TooltipPayload::Entity {
            holder,
            entity: EntityPreview {
                entity,
                custom_name,
                puff_state: None,
            },
            spin: config.spin,
        },
    )
}

/// Beehives show the bees inside.
pub fn beehive(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    let config = &ctx.config.entities.bee;
    if ctx.item.block() != Some(BlockKind::Beehive) || !config.entity.enabled {
        return None;
    }
    let entries = ctx.item.data().block_entity()?.list("Bees")?;
    if entries.is_empty() {
        return None;
    }

    let show_names = config.entity.always_show_name;
    let bees: Vec<EntityPreview> = entries
        .into_iter()
        .map(|bee| EntityPreview {
            entity: BEE.to_owned(),
            custom_name: if show_names {
                bee.compound("EntityData").and_then(custom_name)
            } else {
                None
            },
            puff_state: None,
        })
        .collect();

    let honey_level = if config.show_honey_level {
        ctx.item.data().root().compound(BLOCK_STATE_TAG).and_then(|state| {
            state
                .int("honey_level")
                .or_else(|| state.string("honey_level").and_then(|s| s.parse().ok()))
        })
    } else {
        None
    };

    let named = bees.iter().any(|bee| bee.custom_name.is_some());
    let count = u32::try_from(bees.len()).unwrap_or(u32::MAX);
    Some(TooltipNode::leaf(
        count.saturating_mul(ENTITY_SIZE),
        entity_height(named),
        TooltipPayload::Bees { bees, honey_level },
    ))
}

/// Mob buckets show the mob they hold.
pub fn entity_bucket(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    let ItemKind::EntityBucket { entity } = &ctx.item.kind else {
        return None;
    };
    let config = &ctx.config.entities.fish_bucket;
    if !config.enabled {
        return None;
    }

    let puff_state = (ItemId::new(entity.as_str()).path() == "pufferfish")
        .then(|| ctx.config.entities.pufferfish_puff_state.get());

    Some(TooltipNode::leaf(
        ENTITY_SIZE,
        ENTITY_SIZE,
        TooltipPayload::Entity {
            holder: EntityHolder::Bucket,
            entity: EntityPreview {
                entity: entity.clone(),
                custom_name: None,
                puff_state,
            },
            spin: config.spin,
        },
    ))
}

/// Spawn eggs show the mob they spawn; `EntityTag.id` overrides the egg's
/// default type.
pub fn spawn_egg(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    let ItemKind::SpawnEgg { entity } = &ctx.item.kind else {
        return None;
    };
    let config = &ctx.config.entities.spawn_egg;
    if !config.enabled {
        return None;
    }

    let tag = ctx.item.data().entity();
    let entity = tag
        .and_then(|tag| tag.string("id"))
        .filter(|id| is_valid_entity_id(id))
        .map_or_else(|| entity.clone(), str::to_owned);

    Some(holder_node(
        EntityHolder::SpawnEgg,
        entity,
        tag,
        config,
        SPAWN_EGG_EXTRA_HEIGHT,
    ))
}

/// Armor stand items show the stand.
pub fn armor_stand(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    let config = &ctx.config.entities.armor_stand;
    if ctx.item.kind != ItemKind::ArmorStand || !config.enabled {
        return None;
    }

    Some(holder_node(
        EntityHolder::ArmorStand,
        ARMOR_STAND.to_owned(),
        ctx.item.data().root().compound(ENTITY_TAG),
        config,
        ARMOR_STAND_EXTRA_HEIGHT,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, PuffState};
    use crate::item::{InspectedItem, ItemStack};
    use crate::rules::apply_rule;
    use serde_json::{json, Value};

    fn item(id: &str, kind: ItemKind, data: Value) -> InspectedItem {
        InspectedItem::new(ItemStack::new(id, 1).with_data(data)).with_kind(kind)
    }

    fn entity_payload(node: &TooltipNode) -> (&EntityHolder, &EntityPreview, bool) {
        match node.as_leaf().unwrap().payload() {
            TooltipPayload::Entity { holder, entity, spin } => (holder, entity, *spin),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    fn hive(data: Value) -> InspectedItem {
        item("beehive", ItemKind::Block { block: BlockKind::Beehive }, data)
    }

    #[test]
    fn test_beehive_counts_bees() {
        let data = json!({
            "BlockEntityTag": {"Bees": [
                {"EntityData": {"id": "minecraft:bee"}},
                {"EntityData": {"id": "minecraft:bee", "CustomName": "{\"text\":\"Buzz\"}"}},
            ]},
            "BlockStateTag": {"honey_level": "3"},
        });
        let node = apply_rule(beehive, &hive(data.clone()), &Config::default()).unwrap();
        assert_eq!((node.width(), node.height()), (48, 24));
        match node.as_leaf().unwrap().payload() {
            TooltipPayload::Bees { bees, honey_level } => {
                assert_eq!(bees.len(), 2);
                assert!(bees.iter().all(|bee| bee.custom_name.is_none()));
                assert_eq!(*honey_level, Some(3));
            }
            other => panic!("unexpected payload {other:?}"),
        }

        let mut config = Config::default();
        config.entities.bee.entity.always_show_name = true;
        config.entities.bee.show_honey_level = false;
        let named = apply_rule(beehive, &hive(data), &config).unwrap();
        assert_eq!(named.height(), 32);
        match named.as_leaf().unwrap().payload() {
            TooltipPayload::Bees { bees, honey_level } => {
                assert_eq!(bees[1].custom_name.as_deref(), Some("Buzz"));
                assert_eq!(*honey_level, None);
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_beehive_without_names_keeps_short_height() {
        let data = json!({"BlockEntityTag": {"Bees": [{"EntityData": {}}]}});
        let mut config = Config::default();
        config.entities.bee.entity.always_show_name = true;
        let node = apply_rule(beehive, &hive(data), &config).unwrap();
        assert_eq!((node.width(), node.height()), (24, 24));
    }

    #[test]
    fn test_empty_beehive_abstains() {
        let empty = hive(json!({"BlockEntityTag": {"Bees": []}}));
        assert!(apply_rule(beehive, &empty, &Config::default()).is_none());
        assert!(apply_rule(beehive, &hive(Value::Null), &Config::default()).is_none());
    }

    #[test]
    fn test_bucket_puff_state() {
        let mut config = Config::default();
        config.entities.pufferfish_puff_state = PuffState::new(1);
        let puffer = item(
            "pufferfish_bucket",
            ItemKind::EntityBucket { entity: "minecraft:pufferfish".into() },
            json!({"CustomName": "{\"text\":\"Spike\"}"}),
        );
        let node = apply_rule(entity_bucket, &puffer, &config).unwrap();
        assert_eq!((node.width(), node.height()), (24, 24));
        let (holder, entity, spin) = entity_payload(&node);
        assert_eq!(holder, &EntityHolder::Bucket);
        assert_eq!(entity.puff_state, Some(1));
        assert_eq!(entity.custom_name, None);
        assert!(spin);

        let cod = item(
            "cod_bucket",
            ItemKind::EntityBucket { entity: "minecraft:cod".into() },
            Value::Null,
        );
        let node = apply_rule(entity_bucket, &cod, &config).unwrap();
        assert_eq!(entity_payload(&node).1.puff_state, None);
    }

    #[test]
    fn test_bucket_disabled() {
        let mut config = Config::default();
        config.entities.fish_bucket.enabled = false;
        let cod = item(
            "cod_bucket",
            ItemKind::EntityBucket { entity: "minecraft:cod".into() },
            Value::Null,
        );
        assert!(apply_rule(entity_bucket, &cod, &config).is_none());
    }

    #[test]
    fn test_spawn_egg_entity_override() {
        let egg = item(
            "pig_spawn_egg",
            ItemKind::SpawnEgg { entity: "minecraft:pig".into() },
            json!({"EntityTag": {"id": "minecraft:cow", "CustomName": "{\"text\":\"Daisy\"}"}}),
        );
        let node = apply_rule(spawn_egg, &egg, &Config::default()).unwrap();
        assert_eq!((node.width(), node.height()), (128, 60));
        let (holder, entity, _) = entity_payload(&node);
        assert_eq!(holder, &EntityHolder::SpawnEgg);
        assert_eq!(entity.entity, "minecraft:cow");
        assert_eq!(entity.custom_name, None);

        let mut config = Config::default();
        config.entities.spawn_egg.always_show_name = true;
        let named = apply_rule(spawn_egg, &egg, &config).unwrap();
        assert_eq!(named.height(), 68);
        assert_eq!(entity_payload(&named).1.custom_name.as_deref(), Some("Daisy"));
    }

    #[test]
    fn test_spawn_egg_ignores_invalid_id() {
        let egg = item(
            "pig_spawn_egg",
            ItemKind::SpawnEgg { entity: "minecraft:pig".into() },
            json!({"EntityTag": {"id": "Not An Id"}}),
        );
        let node = apply_rule(spawn_egg, &egg, &Config::default()).unwrap();
        assert_eq!(entity_payload(&node).1.entity, "minecraft:pig");
    }

    #[test]
    fn test_armor_stand() {
        let stand = item("armor_stand", ItemKind::ArmorStand, Value::Null);
        let node = apply_rule(armor_stand, &stand, &Config::default()).unwrap();
        assert_eq!((node.width(), node.height()), (128, 40));
        assert_eq!(entity_payload(&node).1.entity, ARMOR_STAND);

        let mut config = Config::default();
        config.entities.armor_stand.enabled = false;
        assert!(apply_rule(armor_stand, &stand, &config).is_none());
    }

    #[test]
    fn test_entity_rules_ignore_other_items() {
        let apple = InspectedItem::new(ItemStack::new("apple", 1));
        let config = Config::default();
        assert!(apply_rule(beehive, &apple, &config).is_none());
        assert!(apply_rule(entity_bucket, &apple, &config).is_none());
        assert!(apply_rule(spawn_egg, &apple, &config).is_none());
        assert!(apply_rule(armor_stand, &apple, &config).is_none());
    }
}
