//! End-to-end resolution tests.
//!
//! Each test builds an item the way a host application would, resolves it
//! against a configuration and checks the node handed to the renderer.

mod common;

use glance::config::SaturationTooltipMode;
use glance::effect::StatusEffect;
use glance::item::{BlockKind, FoodProperties, ItemKind};
use glance::tooltip::{TooltipLeaf, TooltipRenderer};
use glance::{
    Config, InspectedItem, InventoryContext, ItemStack, ProviderRegistry, TooltipNode,
    TooltipPayload, TooltipResolver,
};
use serde_json::json;

use common::ContainerFixture;

/// Records where each leaf is drawn.
#[derive(Default)]
struct RecordingRenderer {
    drawn: Vec<(&'static str, i32, i32)>,
}

impl TooltipRenderer for RecordingRenderer {
    fn draw_leaf(&mut self, leaf: &TooltipLeaf, x: i32, y: i32) {
        self.drawn.push((leaf.payload().kind(), x, y));
    }
}

fn dispenser_with_duplicates() -> InspectedItem {
    // Nine slots, three empty, two of the six occupied slots hold equal stacks.
    ContainerFixture::new("dispenser", BlockKind::Dispenser)
        .with_slot(0, "minecraft:arrow", 16)
        .with_slot(1, "minecraft:arrow", 16)
        .with_slot(2, "minecraft:fire_charge", 2)
        .with_slot(4, "minecraft:bone_meal", 5)
        .with_slot(6, "minecraft:egg", 1)
        .with_slot(8, "minecraft:snowball", 8)
        .build()
}

fn inventory_slots(node: &TooltipNode) -> (&[ItemStack], u32) {
    match node.as_leaf().unwrap().payload() {
        TooltipPayload::Inventory { slots, columns, .. } => (slots.as_slice(), *columns),
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn test_inventory_keeps_every_slot() {
    let providers = ProviderRegistry::with_defaults();
    let resolver = TooltipResolver::new(&providers);

    let node = resolver
        .resolve(&dispenser_with_duplicates(), &Config::default())
        .unwrap();
    let (slots, columns) = inventory_slots(&node);
    assert_eq!(slots.len(), 9);
    assert_eq!(slots.iter().filter(|slot| slot.is_empty()).count(), 3);
    assert_eq!(columns, 3);
    assert_eq!((node.width(), node.height()), (3 * 18, 3 * 18 + 3));
}

#[test]
fn test_compacted_inventory_merges_duplicates() {
    let providers = ProviderRegistry::with_defaults();
    let resolver = TooltipResolver::new(&providers);
    let mut config = Config::default();
    config.set_from_str("containers/storage/compact", "true").unwrap();

    let node = resolver.resolve(&dispenser_with_duplicates(), &config).unwrap();
    let (slots, columns) = inventory_slots(&node);
    assert_eq!(slots.len(), 5);
    assert_eq!(slots[0], ItemStack::new("arrow", 32));
    assert_eq!(columns, 9);
    assert_eq!((node.width(), node.height()), (9 * 18, 18 + 3));
}

#[test]
fn test_food_with_effects_stacks_two_nodes() {
    let providers = ProviderRegistry::with_defaults();
    let resolver = TooltipResolver::new(&providers);
    let apple = InspectedItem::new(ItemStack::new("golden_apple", 1)).with_food(
        FoodProperties::new(4, 1.2)
            .with_effect(StatusEffect::new("regeneration", 100, 1))
            .with_effect(StatusEffect::new("absorption", 2400, 0)),
    );

    let node = resolver.resolve(&apple, &Config::default()).unwrap();
    let children = node.children().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(node.height(), children[0].height() + children[1].height());
    assert_eq!(node.height(), 11 + 2 * 20);

    let mut renderer = RecordingRenderer::default();
    node.render(&mut renderer, 4, 10);
    assert_eq!(
        renderer.drawn,
        [("food", 4, 10), ("status_effects", 4, 21)]
    );
}

#[test]
fn test_hidden_effects_on_food() {
    let providers = ProviderRegistry::with_defaults();
    let resolver = TooltipResolver::new(&providers);
    let stew = InspectedItem::new(ItemStack::new("suspicious_stew", 1).with_data(json!({
        "Effects": [{"EffectId": 16, "EffectDuration": 100}]
    })))
    .with_kind(ItemKind::SuspiciousStew)
    .with_food(FoodProperties::new(6, 0.6))
    .with_tag("hidden_effects");

    let node = resolver.resolve(&stew, &Config::default()).unwrap();
    let kinds: Vec<&str> = node
        .children()
        .unwrap()
        .iter()
        .map(|child| child.as_leaf().unwrap().payload().kind())
        .collect();
    assert_eq!(kinds, ["food", "hidden_effects"]);
}

#[test]
fn test_disabled_config_silences_everything() {
    let providers = ProviderRegistry::with_defaults();
    let resolver = TooltipResolver::new(&providers);
    let mut config = Config::default();
    config.food.hunger = false;
    config.food.saturation = SaturationTooltipMode::Disabled;
    config.effects.food = false;
    config.armor = false;
    config.containers.storage.enabled = false;

    let item = ContainerFixture::new("chest", BlockKind::Chest)
        .with_slot(0, "minecraft:apple", 1)
        .build()
        .with_food(FoodProperties::new(4, 0.3))
        .with_armor(3);
    assert!(resolver.resolve(&item, &config).is_none());
}

#[test]
fn test_custom_provider_for_modded_item() {
    let mut providers = ProviderRegistry::with_defaults();
    providers.register_for(
        ["mod:backpack"],
        |stack: &ItemStack, _: Option<&glance::config::StorageContainerConfig>| {
            let count = stack.data.root().int("stored")?;
            let slots = vec![ItemStack::new("minecraft:dirt", u32::try_from(count).ok()?)];
            Some(InventoryContext::new(slots).with_columns(1))
        },
    );
    let resolver = TooltipResolver::new(&providers);

    let backpack = InspectedItem::new(
        ItemStack::new("mod:backpack", 1).with_data(json!({"stored": 12})),
    )
    .with_block(BlockKind::Storage);

    let node = resolver.resolve(&backpack, &Config::default()).unwrap();
    assert_eq!((node.width(), node.height()), (18, 21));
}

#[test]
fn test_resolution_is_repeatable() {
    let providers = ProviderRegistry::with_defaults();
    let resolver = TooltipResolver::new(&providers);
    let config = Config::default();
    let item = dispenser_with_duplicates();

    let first = resolver.resolve(&item, &config);
    let second = resolver.resolve(&item, &config);
    assert_eq!(first, second);
}

#[test]
fn test_out_of_range_slots_do_not_size_the_grid() {
    let providers = ProviderRegistry::with_defaults();
    let resolver = TooltipResolver::new(&providers);

    let crate_item = InspectedItem::new(ItemStack::new("modded:crate", 1).with_data(json!({
        "BlockEntityTag": {"Items": [
            {"Slot": i64::MAX, "id": "minecraft:apple", "Count": 1},
            {"Slot": -3, "id": "minecraft:apple", "Count": 1},
            {"Slot": 1, "id": "minecraft:bread", "Count": 2}
        ]}
    })))
    .with_block(BlockKind::Other);

    let node = resolver.resolve(&crate_item, &Config::default()).unwrap();
    let (slots, columns) = inventory_slots(&node);
    assert_eq!((slots.len(), columns), (9, 9));
    assert_eq!((node.width(), node.height()), (162, 21));

    let runaway = InspectedItem::new(ItemStack::new("modded:crate", 1).with_data(json!({
        "BlockEntityTag": {"Items": [{"Slot": i64::MAX, "id": "minecraft:apple", "Count": 1}]}
    })))
    .with_block(BlockKind::Other);
    assert!(resolver.resolve(&runaway, &Config::default()).is_none());
}
