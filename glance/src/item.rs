//! Item model seen by the resolver.
//!
//! The game's own item model is an external collaborator; this module holds
//! the slice of it the rules need: the stack itself (identity, count and
//! attached data) plus what kind of item it is, whether it is food or armor,
//! and which item tags it carries.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::{AttachedData, DataRef};
use crate::effect::StatusEffect;
use crate::error::Result;

/// Identity of the empty item.
pub const AIR: &str = "minecraft:air";

/// Tag marking items whose effects must not be revealed.
pub const HIDDEN_EFFECTS_TAG: &str = "hidden_effects";

/// A namespaced item identifier such as `minecraft:chest`.
///
/// Identifiers without a namespace are placed in `minecraft`.
///
/// # Examples
///
/// ```
/// use glance::item::ItemId;
///
/// let id = ItemId::new("red_shulker_box");
/// assert_eq!(id.as_str(), "minecraft:red_shulker_box");
/// assert_eq!(id.path(), "red_shulker_box");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Creates an identifier, adding the default namespace when absent.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        if id.contains(':') {
            Self(id)
        } else {
            Self(format!("minecraft:{id}"))
        }
    }

    /// The full identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after the namespace.
    #[must_use]
    pub fn path(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(_, path)| path)
    }

    /// Returns `true` for the empty item.
    #[must_use]
    pub fn is_air(&self) -> bool {
        self.0 == AIR
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn one() -> u32 {
    1
}

/// A stack of items: identity, count and attached data.
///
/// # Examples
///
/// ```
/// use glance::item::ItemStack;
///
/// let stack = ItemStack::new("diamond", 3);
/// assert!(!stack.is_empty());
/// assert!(stack.can_combine(&ItemStack::new("minecraft:diamond", 10)));
/// assert!(ItemStack::empty().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item identity.
    pub id: ItemId,
    /// Number of items.
    #[serde(default = "one")]
    pub count: u32,
    /// Attached data.
    #[serde(default, skip_serializing_if = "AttachedData::is_empty")]
    pub data: AttachedData,
}

impl ItemStack {
    /// Creates a stack without attached data.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, count: u32) -> Self {
        Self {
            id: id.into(),
            count,
            data: AttachedData::empty(),
        }
    }

    /// The empty stack, used as a placeholder in inventories.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(AIR, 0)
    }

    /// Sets the attached data.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<AttachedData>) -> Self {
        self.data = data.into();
        self
    }

    /// Returns `true` if the stack holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.id.is_air()
    }

    /// Returns `true` if both stacks hold the same item with equal data, so
    /// their counts may be merged.
    #[must_use]
    pub fn can_combine(&self, other: &Self) -> bool {
        self.id == other.id && self.data == other.data
    }

    /// Reads a stack from a serialized inventory entry
    /// (`{"id": ..., "Count": ..., "tag": {...}}`).
    ///
    /// Returns `None` if the entry has no item id.
    #[must_use]
    pub fn from_entry(entry: DataRef<'_>) -> Option<Self> {
        let id = entry.string("id")?;
        let count = entry
            .int("Count")
            .map_or(1, |count| u32::try_from(count).unwrap_or(0));
        let data = entry
            .compound("tag")
            .map_or_else(AttachedData::empty, DataRef::to_owned_data);
        Some(Self::new(id, count).with_data(data))
    }
}

/// The block placed by a block item, as far as rules care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Chest or trapped chest.
    Chest,
    /// Barrel.
    Barrel,
    /// Dispenser or dropper.
    Dispenser,
    /// Hopper.
    Hopper,
    /// Any other block with an inventory.
    Storage,
    /// Shulker box of any color.
    ShulkerBox,
    /// Chiseled bookshelf.
    ChiseledBookshelf,
    /// Beacon.
    Beacon,
    /// Beehive or bee nest.
    Beehive,
    /// Campfire or soul campfire.
    Campfire,
    /// Jukebox.
    Jukebox,
    /// Any block without a preview of its own.
    Other,
}

/// What kind of item is being inspected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// An item without a dedicated preview.
    #[default]
    Generic,
    /// Drinkable, splash or lingering potion.
    Potion,
    /// Tipped arrow.
    TippedArrow,
    /// Spectral arrow.
    SpectralArrow,
    /// Suspicious stew.
    SuspiciousStew,
    /// A block item.
    Block {
        /// The placed block.
        block: BlockKind,
    },
    /// A bucket holding a mob.
    EntityBucket {
        /// Entity type id.
        entity: String,
    },
    /// A spawn egg.
    SpawnEgg {
        /// Entity type id the egg spawns by default.
        entity: String,
    },
    /// Armor stand item.
    ArmorStand,
    /// Filled map.
    FilledMap,
    /// Sign item.
    Sign,
    /// Banner pattern item.
    BannerPattern {
        /// Pattern tag the item unlocks.
        pattern: String,
    },
    /// Painting item.
    Painting,
}

/// Food properties of an edible item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodProperties {
    /// Hunger points restored.
    pub hunger: u32,
    /// Saturation modifier.
    pub saturation_modifier: f32,
    /// Effects granted when eaten.
    #[serde(default)]
    pub effects: Vec<StatusEffect>,
}

impl FoodProperties {
    /// Creates food properties without effects.
    #[must_use]
    pub fn new(hunger: u32, saturation_modifier: f32) -> Self {
        Self {
            hunger,
            saturation_modifier,
            effects: Vec::new(),
        }
    }

    /// Adds an effect granted when eaten.
    #[must_use]
    pub fn with_effect(mut self, effect: StatusEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Armor properties of a wearable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorProperties {
    /// Protection points.
    pub protection: u32,
}

/// An item as presented for inspection.
///
/// # Examples
///
/// ```
/// use glance::item::{FoodProperties, InspectedItem, ItemStack};
///
/// let apple = InspectedItem::new(ItemStack::new("apple", 1))
///     .with_food(FoodProperties::new(4, 0.3));
/// assert!(apple.food.is_some());
/// assert!(!apple.has_tag("hidden_effects"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectedItem {
    /// The stack being inspected.
    #[serde(flatten)]
    pub stack: ItemStack,
    /// Item kind.
    #[serde(default)]
    pub kind: ItemKind,
    /// Food properties, for edible items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<FoodProperties>,
    /// Armor properties, for wearable items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor: Option<ArmorProperties>,
    /// Item tags.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

impl InspectedItem {
    /// Wraps a stack as a generic item.
    #[must_use]
    pub fn new(stack: ItemStack) -> Self {
        Self {
            stack,
            kind: ItemKind::Generic,
            food: None,
            armor: None,
            tags: BTreeSet::new(),
        }
    }

    /// Parses an item description.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Json`] if `text` is not a valid description.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance::item::{InspectedItem, ItemKind};
    ///
    /// let item = InspectedItem::from_json(r#"{"id": "cod_bucket", "kind": {"type": "entity_bucket", "entity": "minecraft:cod"}}"#).unwrap();
    /// assert_eq!(item.stack.count, 1);
    /// assert_eq!(item.kind, ItemKind::EntityBucket { entity: "minecraft:cod".into() });
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Sets the item kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    /// Marks the item as a block item.
    #[must_use]
    pub fn with_block(self, block: BlockKind) -> Self {
        self.with_kind(ItemKind::Block { block })
    }

    /// Marks the item as food.
    #[must_use]
    pub fn with_food(mut self, food: FoodProperties) -> Self {
        self.food = Some(food);
        self
    }

    /// Marks the item as armor.
    #[must_use]
    pub fn with_armor(mut self, protection: u32) -> Self {
        self.armor = Some(ArmorProperties { protection });
        self
    }

    /// Adds an item tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Returns `true` if the item carries the tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// The attached data of the stack.
    #[must_use]
    pub const fn data(&self) -> &AttachedData {
        &self.stack.data
    }

    /// The placed block, for block items.
    #[must_use]
    pub const fn block(&self) -> Option<BlockKind> {
        match self.kind {
            ItemKind::Block { block } => Some(block),
            _ => None,
        }
    }
}
