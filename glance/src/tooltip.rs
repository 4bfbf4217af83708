//! Measured tooltip blocks and their composition.
//!
//! A [`TooltipNode`] is either a leaf with a fixed size and a payload for the
//! renderer, or a compound stacking its children vertically. Compound sizes
//! are computed from the children every time they are asked for, and
//! children cannot change once attached, so a compound is always exactly as
//! tall as its children together and as wide as the widest one.

use serde::Serialize;

use crate::config::{HiddenEffectMode, SaturationTooltipMode};
use crate::effect::StatusEffect;
use crate::item::ItemStack;

/// Measures rendered text width.
pub trait TextMeasure {
    /// Width of `text` in layout units.
    fn width(&self, text: &str) -> u32;
}

/// Text measurement with every glyph the same width.
///
/// # Examples
///
/// ```
/// use glance::tooltip::{FixedWidthText, TextMeasure};
///
/// assert_eq!(FixedWidthText::default().width("Speed"), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthText {
    glyph_width: u32,
}

impl FixedWidthText {
    /// Default glyph width in layout units.
    pub const DEFAULT_GLYPH_WIDTH: u32 = 6;

    /// Creates a measure with the given glyph width.
    #[must_use]
    pub const fn new(glyph_width: u32) -> Self {
        Self { glyph_width }
    }
}

impl Default for FixedWidthText {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GLYPH_WIDTH)
    }
}

impl TextMeasure for FixedWidthText {
    fn width(&self, text: &str) -> u32 {
        u32::try_from(text.chars().count())
            .unwrap_or(u32::MAX)
            .saturating_mul(self.glyph_width)
    }
}

/// Where an entity preview comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityHolder {
    /// A mob in a bucket.
    Bucket,
    /// A spawn egg.
    SpawnEgg,
    /// An armor stand item.
    ArmorStand,
}

/// An entity to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityPreview {
    /// Entity type id.
    pub entity: String,
    /// Custom name, when it should be shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    /// Puff state, for pufferfish.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puff_state: Option<u8>,
}

/// What a leaf draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TooltipPayload {
    /// A grid of item slots.
    Inventory {
        /// Slots in draw order.
        slots: Vec<ItemStack>,
        /// Grid width in slots.
        columns: u32,
        /// Tint for the grid background.
        color: Option<String>,
    },
    /// Hunger and saturation icons.
    Food {
        /// Hunger points.
        hunger: u32,
        /// Saturation modifier.
        saturation_modifier: f32,
        /// Draw hunger icons.
        show_hunger: bool,
        /// How saturation is drawn.
        saturation: SaturationTooltipMode,
    },
    /// Status effect icons with names and durations.
    StatusEffects {
        /// Effects in draw order.
        effects: Vec<StatusEffect>,
        /// Duration scale.
        multiplier: f32,
    },
    /// Effects that must stay secret.
    HiddenEffects {
        /// Glyph style.
        mode: HiddenEffectMode,
        /// Animate the glyphs.
        animated: bool,
    },
    /// Armor points.
    Armor {
        /// Protection points.
        protection: u32,
    },
    /// Campfire with its cooking slots.
    Campfire {
        /// The four cooking slots.
        slots: Vec<ItemStack>,
        /// Whether the fire is drawn.
        lit: bool,
    },
    /// Chiseled bookshelf drawn as a block.
    Bookshelf {
        /// The six book slots.
        slots: Vec<ItemStack>,
    },
    /// Bees inside a hive.
    Bees {
        /// One preview per bee.
        bees: Vec<EntityPreview>,
        /// Hive honey level, when shown.
        honey_level: Option<i64>,
    },
    /// The disc in a jukebox.
    Jukebox {
        /// Disc description.
        disc: String,
        /// Draw the disc beneath its name.
        fancy: bool,
    },
    /// A single entity.
    Entity {
        /// Item the entity comes from.
        holder: EntityHolder,
        /// The entity.
        entity: EntityPreview,
        /// Rotate the entity.
        spin: bool,
    },
    /// Sign text.
    Sign {
        /// Text lines.
        lines: Vec<String>,
        /// Text dye color.
        color: String,
        /// Glowing text.
        glowing: bool,
        /// Draw the sign board.
        fancy: bool,
    },
    /// A filled map.
    Map {
        /// Map id.
        map_id: i64,
        /// Draw the player marker.
        show_player_icon: bool,
    },
    /// A banner pattern preview.
    BannerPattern {
        /// Pattern tag.
        pattern: String,
    },
    /// A painting.
    Painting {
        /// Painting variant id.
        variant: String,
    },
}

impl TooltipPayload {
    /// Short name of the payload kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Inventory { .. } => "inventory",
            Self::Food { .. } => "food",
            Self::StatusEffects { .. } => "status_effects",
            Self::HiddenEffects { .. } => "hidden_effects",
            Self::Armor { .. } => "armor",
            Self::Campfire { .. } => "campfire",
            Self::Bookshelf { .. } => "bookshelf",
            Self::Bees { .. } => "bees",
            Self::Jukebox { .. } => "jukebox",
            Self::Entity { .. } => "entity",
            Self::Sign { .. } => "sign",
            Self::Map { .. } => "map",
            Self::BannerPattern { .. } => "banner_pattern",
            Self::Painting { .. } => "painting",
        }
    }
}

/// A measured block with a payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipLeaf {
    width: u32,
    height: u32,
    payload: TooltipPayload,
}

impl TooltipLeaf {
    /// Width in layout units.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in layout units.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// What the leaf draws.
    #[must_use]
    pub const fn payload(&self) -> &TooltipPayload {
        &self.payload
    }
}

/// Children stacked top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompoundTooltip {
    children: Vec<TooltipNode>,
}

impl CompoundTooltip {
    /// The children, top first.
    #[must_use]
    pub fn children(&self) -> &[TooltipNode] {
        &self.children
    }

    /// Widest child's width, 0 without children.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.children.iter().map(TooltipNode::width).max().unwrap_or(0)
    }

    /// Sum of the children's heights.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.children.iter().map(TooltipNode::height).sum()
    }
}

/// Draws tooltip leaves.
pub trait TooltipRenderer {
    /// Draws one leaf with its top-left corner at `(x, y)`.
    fn draw_leaf(&mut self, leaf: &TooltipLeaf, x: i32, y: i32);
}

/// A tooltip block: a measured leaf or a vertical stack of blocks.
///
/// # Examples
///
/// ```
/// use glance::tooltip::{TooltipNode, TooltipPayload};
///
/// let armor = TooltipNode::leaf(90, 11, TooltipPayload::Armor { protection: 20 });
/// let banner = TooltipNode::leaf(16, 32, TooltipPayload::BannerPattern {
///     pattern: "minecraft:pattern_item/globe".into(),
/// });
/// let stacked = TooltipNode::compound(vec![armor, banner]);
/// assert_eq!(stacked.width(), 90);
/// assert_eq!(stacked.height(), 43);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum TooltipNode {
    /// A single block.
    Leaf(TooltipLeaf),
    /// Blocks stacked vertically.
    Compound(CompoundTooltip),
}

impl TooltipNode {
    /// Creates a leaf.
    #[must_use]
    pub const fn leaf(width: u32, height: u32, payload: TooltipPayload) -> Self {
        Self::Leaf(TooltipLeaf {
            width,
            height,
            payload,
        })
    }

    /// Stacks nodes vertically, in the given order.
    #[must_use]
    pub fn compound(children: Vec<TooltipNode>) -> Self {
        Self::Compound(CompoundTooltip { children })
    }

    /// Folds collected nodes into one: nothing for none, the node itself for
    /// one, a compound otherwise.
    #[must_use]
    pub fn from_nodes(mut nodes: Vec<TooltipNode>) -> Option<Self> {
        match nodes.len() {
            0 => None,
            1 => nodes.pop(),
            _ => Some(Self::compound(nodes)),
        }
    }

    /// Width in layout units.
    #[must_use]
    pub fn width(&self) -> u32 {
        match self {
            Self::Leaf(leaf) => leaf.width,
            Self::Compound(compound) => compound.width(),
        }
    }

    /// Height in layout units.
    #[must_use]
    pub fn height(&self) -> u32 {
        match self {
            Self::Leaf(leaf) => leaf.height,
            Self::Compound(compound) => compound.height(),
        }
    }

    /// Returns the leaf, if this is one.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&TooltipLeaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Compound(_) => None,
        }
    }

    /// Returns the children, if this is a compound.
    #[must_use]
    pub fn children(&self) -> Option<&[TooltipNode]> {
        match self {
            Self::Leaf(_) => None,
            Self::Compound(compound) => Some(compound.children()),
        }
    }

    /// Walks the node, drawing each leaf below the previous one.
    pub fn render<R: TooltipRenderer + ?Sized>(&self, renderer: &mut R, x: i32, y: i32) {
        match self {
            Self::Leaf(leaf) => renderer.draw_leaf(leaf, x, y),
            Self::Compound(compound) => {
                let mut offset = y;
                for child in &compound.children {
                    child.render(renderer, x, offset);
                    offset = offset.saturating_add(i32::try_from(child.height()).unwrap_or(i32::MAX));
                }
            }
        }
    }
}

#[cfg(test)]
mod proptests;
