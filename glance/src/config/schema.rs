//! Configuration schema definitions.
//!
//! This module defines the complete option tree for glance: which tooltips
//! are shown, how containers are laid out, and how entities and status
//! effects are previewed. Every field has a compiled-in default; the loader
//! fills any field the document lacks from these defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::item::BlockKind;

/// Default puff state shown for pufferfish buckets (fully puffed).
pub const DEFAULT_PUFF_STATE: u8 = 2;

/// Highest puff state a pufferfish can have.
pub const MAX_PUFF_STATE: u8 = 2;

/// An option whose value is one of a fixed set of named modes.
///
/// Mode names are lowercase and are what the configuration document stores.
///
/// # Examples
///
/// ```
/// use glance::config::{OptionMode, SignTooltipMode};
///
/// assert_eq!(SignTooltipMode::parse("FAST"), Some(SignTooltipMode::Fast));
/// assert_eq!(SignTooltipMode::Fancy.next(), SignTooltipMode::Disabled);
/// ```
pub trait OptionMode: Copy + Eq + 'static {
    /// All modes, in cycling order.
    const VARIANTS: &'static [Self];

    /// The lowercase name of this mode.
    fn name(self) -> &'static str;

    /// Parses a mode from its name (case-insensitive).
    fn parse(name: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }

    /// The mode following this one, wrapping around.
    #[must_use]
    fn next(self) -> Self {
        let index = Self::VARIANTS
            .iter()
            .position(|&mode| mode == self)
            .unwrap_or(0);
        Self::VARIANTS[(index + 1) % Self::VARIANTS.len()]
    }

    /// Names of all modes, in cycling order.
    fn names() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|mode| mode.name()).collect()
    }
}

/// How jukebox contents are previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JukeboxTooltipMode {
    /// No preview.
    Disabled,
    /// Disc name only.
    Fast,
    /// Disc name with the disc drawn beneath.
    #[default]
    Fancy,
}

impl JukeboxTooltipMode {
    /// Returns `true` unless the mode is `Disabled`.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl OptionMode for JukeboxTooltipMode {
    const VARIANTS: &'static [Self] = &[Self::Disabled, Self::Fast, Self::Fancy];

    fn name(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Fast => "fast",
            Self::Fancy => "fancy",
        }
    }
}

impl fmt::Display for JukeboxTooltipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How sign text is previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignTooltipMode {
    /// No preview.
    Disabled,
    /// Text lines only.
    Fast,
    /// Text drawn on a sign board.
    #[default]
    Fancy,
}

impl SignTooltipMode {
    /// Returns `true` unless the mode is `Disabled`.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl OptionMode for SignTooltipMode {
    const VARIANTS: &'static [Self] = &[Self::Disabled, Self::Fast, Self::Fancy];

    fn name(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Fast => "fast",
            Self::Fancy => "fancy",
        }
    }
}

impl fmt::Display for SignTooltipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How food saturation is shown next to hunger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaturationTooltipMode {
    /// Saturation is not shown.
    Disabled,
    /// Saturation outlines drawn over the hunger row.
    #[default]
    Merged,
    /// Saturation drawn on its own row.
    Separated,
}

impl SaturationTooltipMode {
    /// Returns `true` unless the mode is `Disabled`.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl OptionMode for SaturationTooltipMode {
    const VARIANTS: &'static [Self] = &[Self::Disabled, Self::Merged, Self::Separated];

    fn name(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Merged => "merged",
            Self::Separated => "separated",
        }
    }
}

impl fmt::Display for SaturationTooltipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How effects of items tagged `hidden_effects` are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HiddenEffectMode {
    /// Scrambled glyphs.
    Obfuscated,
    /// Enchanting-table glyphs.
    #[default]
    Enchantment,
}

impl OptionMode for HiddenEffectMode {
    const VARIANTS: &'static [Self] = &[Self::Obfuscated, Self::Enchantment];

    fn name(self) -> &'static str {
        match self {
            Self::Obfuscated => "obfuscated",
            Self::Enchantment => "enchantment",
        }
    }
}

impl fmt::Display for HiddenEffectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete configuration tree.
///
/// # Examples
///
/// ```
/// use glance::config::{Config, SignTooltipMode};
///
/// let config = Config {
///     sign: SignTooltipMode::Fast,
///     ..Default::default()
/// };
/// assert!(config.armor);
/// assert!(config.sign.is_enabled());
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Show armor protection points.
    pub armor: bool,

    /// Show banner pattern previews.
    pub banner_pattern: bool,

    /// Show painting previews.
    pub painting: bool,

    /// Container previews.
    pub containers: ContainersConfig,

    /// Status effect previews.
    pub effects: EffectsConfig,

    /// Entity previews.
    pub entities: EntitiesConfig,

    /// Filled map previews.
    pub filled_map: FilledMapConfig,

    /// Food previews.
    pub food: FoodConfig,

    /// Jukebox preview mode.
    pub jukebox: JukeboxTooltipMode,

    /// Sign preview mode.
    pub sign: SignTooltipMode,

    /// Lines shown only with advanced tooltips on.
    pub advanced_tooltips: AdvancedTooltipsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            armor: true,
            banner_pattern: true,
            painting: true,
            containers: ContainersConfig::default(),
            effects: EffectsConfig::default(),
            entities: EntitiesConfig::default(),
            filled_map: FilledMapConfig::default(),
            food: FoodConfig::default(),
            jukebox: JukeboxTooltipMode::default(),
            sign: SignTooltipMode::default(),
            advanced_tooltips: AdvancedTooltipsConfig::default(),
        }
    }
}

/// Container preview settings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContainersConfig {
    /// Show campfire contents.
    pub campfire: bool,
    /// Chests, barrels, dispensers, hoppers and other plain storage.
    pub storage: StorageContainerConfig,
    /// Shulker boxes.
    pub shulker_box: ShulkerBoxConfig,
    /// Chiseled bookshelves.
    pub chiseled_bookshelf: ChiseledBookshelfConfig,
}

impl ContainersConfig {
    /// Returns the storage settings governing a block, if it has any.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance::config::ContainersConfig;
    /// use glance::item::BlockKind;
    ///
    /// let config = ContainersConfig::default();
    /// assert!(config.for_block(BlockKind::Chest).is_some());
    /// assert!(config.for_block(BlockKind::Jukebox).is_none());
    /// ```
    #[must_use]
    pub fn for_block(&self, block: BlockKind) -> Option<&StorageContainerConfig> {
        match block {
            BlockKind::Chest
            | BlockKind::Barrel
            | BlockKind::Dispenser
            | BlockKind::Hopper
            | BlockKind::Storage => Some(&self.storage),
            BlockKind::ShulkerBox => Some(&self.shulker_box.storage),
            BlockKind::ChiseledBookshelf => Some(&self.chiseled_bookshelf.storage),
            BlockKind::Beacon
            | BlockKind::Beehive
            | BlockKind::Campfire
            | BlockKind::Jukebox
            | BlockKind::Other => None,
        }
    }
}

impl Default for ContainersConfig {
    fn default() -> Self {
        Self {
            campfire: true,
            storage: StorageContainerConfig::default(),
            shulker_box: ShulkerBoxConfig::default(),
            chiseled_bookshelf: ChiseledBookshelfConfig::default(),
        }
    }
}

/// Settings shared by every storage container.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StorageContainerConfig {
    /// Show the contents.
    pub enabled: bool,
    /// Merge equal stacks and drop empty slots.
    pub compact: bool,
    /// Show the loot table of unopened containers.
    pub loot_table: bool,
}

impl Default for StorageContainerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            compact: false,
            loot_table: true,
        }
    }
}

/// Shulker box settings.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ShulkerBoxConfig {
    /// Common storage settings.
    #[serde(flatten)]
    pub storage: StorageContainerConfig,
    /// Tint the preview with the box's dye color.
    pub color: bool,
}

/// Chiseled bookshelf settings.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ChiseledBookshelfConfig {
    /// Common storage settings.
    #[serde(flatten)]
    pub storage: StorageContainerConfig,
    /// Draw the shelf as a block instead of an inventory grid.
    pub block_render: bool,
}

impl Default for ShulkerBoxConfig {
    fn default() -> Self {
        Self {
            storage: StorageContainerConfig::default(),
            color: true,
        }
    }
}

impl Default for ChiseledBookshelfConfig {
    fn default() -> Self {
        Self {
            storage: StorageContainerConfig::default(),
            block_render: true,
        }
    }
}

/// Status effect settings.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct EffectsConfig {
    /// Effects of potions.
    pub potions: bool,
    /// Effects of tipped arrows.
    pub tipped_arrows: bool,
    /// Glowing effect of spectral arrows.
    pub spectral_arrow: bool,
    /// Effects granted by food.
    pub food: bool,
    /// Animate hidden effect glyphs.
    pub hidden_motion: bool,
    /// Glyph style for hidden effects.
    pub hidden_effect_mode: HiddenEffectMode,
    /// Effects of beacons.
    pub beacon: bool,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            potions: true,
            tipped_arrows: true,
            spectral_arrow: true,
            food: true,
            hidden_motion: true,
            hidden_effect_mode: HiddenEffectMode::default(),
            beacon: true,
        }
    }
}

/// Settings shared by every entity preview.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct EntityConfig {
    /// Show the entity.
    pub enabled: bool,
    /// Show the custom name even when it would normally be hidden.
    pub always_show_name: bool,
    /// Rotate the entity.
    pub spin: bool,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            always_show_name: false,
            spin: true,
        }
    }
}

/// Bee settings.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BeeEntityConfig {
    /// Common entity settings.
    #[serde(flatten)]
    pub entity: EntityConfig,
    /// Show the hive's honey level.
    pub show_honey_level: bool,
}

impl Default for BeeEntityConfig {
    fn default() -> Self {
        Self {
            entity: EntityConfig::default(),
            show_honey_level: true,
        }
    }
}

/// Pufferfish puff state, always within `0..=2`.
///
/// # Examples
///
/// ```
/// use glance::config::PuffState;
///
/// assert_eq!(PuffState::new(7).get(), 2);
/// assert_eq!(PuffState::new(1).get(), 1);
/// ```
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PuffState(u8);

impl PuffState {
    /// Creates a puff state, clamping into range.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(0, i64::from(MAX_PUFF_STATE));
        Self(u8::try_from(clamped).unwrap_or(MAX_PUFF_STATE))
    }

    /// The puff state.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for PuffState {
    fn default() -> Self {
        Self(DEFAULT_PUFF_STATE)
    }
}

/// Entity preview settings.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct EntitiesConfig {
    /// Armor stands.
    pub armor_stand: EntityConfig,
    /// Bees in beehives and nests.
    pub bee: BeeEntityConfig,
    /// Fish and other bucketed mobs.
    pub fish_bucket: EntityConfig,
    /// Mob spawners.
    pub mob_spawner: EntityConfig,
    /// Spawn eggs.
    pub spawn_egg: EntityConfig,
    /// Puff state used for pufferfish.
    pub pufferfish_puff_state: PuffState,
}

/// Filled map settings.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FilledMapConfig {
    /// Show the map.
    pub enabled: bool,
    /// Draw the player marker.
    pub show_player_icon: bool,
}

impl Default for FilledMapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_player_icon: false,
        }
    }
}

/// Food settings.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FoodConfig {
    /// Show hunger points.
    pub hunger: bool,
    /// Saturation display mode.
    pub saturation: SaturationTooltipMode,
}

impl FoodConfig {
    /// Returns `true` if anything about food is shown.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.hunger || self.saturation.is_enabled()
    }
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            hunger: true,
            saturation: SaturationTooltipMode::default(),
        }
    }
}

/// Extra lines shown with advanced tooltips.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AdvancedTooltipsConfig {
    /// Anvil repair cost.
    pub repair_cost: bool,
    /// Lodestone compass target.
    pub lodestone_coords: bool,
}

impl Default for AdvancedTooltipsConfig {
    fn default() -> Self {
        Self {
            repair_cost: true,
            lodestone_coords: false,
        }
    }
}
