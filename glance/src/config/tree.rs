//! Path-addressed access to configuration leaves.
//!
//! Every leaf of [`Config`] has a slash-joined path such as
//! `containers/shulker_box/color`. The loader walks these paths to read a
//! document, and the control surface uses them to get and set single options.

use std::fmt;

use serde::Serialize;

use crate::config::schema::{
    Config, HiddenEffectMode, JukeboxTooltipMode, OptionMode, PuffState, SaturationTooltipMode,
    SignTooltipMode, MAX_PUFF_STATE,
};
use crate::error::{Error, Result};

/// The value of one configuration leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A flag.
    Bool(bool),
    /// A bounded integer.
    Int(i64),
    /// A named mode, lowercase.
    Mode(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Mode(name) => f.write_str(name),
        }
    }
}

/// What values a leaf accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    /// `true` or `false`.
    Bool,
    /// An integer, clamped into `min..=max`.
    Int {
        /// Smallest value.
        min: i64,
        /// Largest value.
        max: i64,
    },
    /// One of the listed mode names.
    Mode(Vec<&'static str>),
}

impl OptionKind {
    /// Parses a value of this kind from text.
    ///
    /// Integers are accepted out of range; clamping happens on assignment.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance::config::{OptionKind, OptionValue};
    ///
    /// assert_eq!(OptionKind::Bool.parse("false"), Some(OptionValue::Bool(false)));
    /// assert_eq!(OptionKind::Bool.parse("maybe"), None);
    /// ```
    #[must_use]
    pub fn parse(&self, raw: &str) -> Option<OptionValue> {
        let raw = raw.trim();
        match self {
            Self::Bool => raw.parse().ok().map(OptionValue::Bool),
            Self::Int { .. } => raw.parse().ok().map(OptionValue::Int),
            Self::Mode(names) => names
                .iter()
                .find(|name| name.eq_ignore_ascii_case(raw))
                .map(|name| OptionValue::Mode((*name).to_string())),
        }
    }

    /// Reads a value of this kind from a YAML node.
    ///
    /// Returns `None` when the node has the wrong type or names an unknown
    /// mode.
    #[must_use]
    pub fn from_yaml(&self, node: &serde_yaml::Value) -> Option<OptionValue> {
        match self {
            Self::Bool => node.as_bool().map(OptionValue::Bool),
            Self::Int { .. } => node.as_i64().map(OptionValue::Int),
            Self::Mode(_) => node.as_str().and_then(|name| self.parse(name)),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("true or false"),
            Self::Int { min, max } => write!(f, "an integer from {min} to {max}"),
            Self::Mode(names) => write!(f, "one of {}", names.join(", ")),
        }
    }
}

/// A single typed leaf of the configuration tree.
pub(crate) trait LeafValue {
    fn value(&self) -> OptionValue;

    fn kind(&self) -> OptionKind;

    /// Stores `value`; the error names what the leaf expects.
    fn assign(&mut self, value: &OptionValue) -> std::result::Result<(), OptionKind>;
}

impl LeafValue for bool {
    fn value(&self) -> OptionValue {
        OptionValue::Bool(*self)
    }

    fn kind(&self) -> OptionKind {
        OptionKind::Bool
    }

    fn assign(&mut self, value: &OptionValue) -> std::result::Result<(), OptionKind> {
        match value {
            OptionValue::Bool(value) => {
                *self = *value;
                Ok(())
            }
            _ => Err(self.kind()),
        }
    }
}

impl LeafValue for PuffState {
    fn value(&self) -> OptionValue {
        OptionValue::Int(i64::from(self.get()))
    }

    fn kind(&self) -> OptionKind {
        OptionKind::Int {
            min: 0,
            max: i64::from(MAX_PUFF_STATE),
        }
    }

    fn assign(&mut self, value: &OptionValue) -> std::result::Result<(), OptionKind> {
        match value {
            OptionValue::Int(value) => {
                *self = Self::new(*value);
                Ok(())
            }
            _ => Err(self.kind()),
        }
    }
}

macro_rules! mode_leaves {
    ($($mode:ty),+ $(,)?) => {
        $(
            impl LeafValue for $mode {
                fn value(&self) -> OptionValue {
                    OptionValue::Mode(self.name().to_string())
                }

                fn kind(&self) -> OptionKind {
                    OptionKind::Mode(<$mode>::names())
                }

                fn assign(&mut self, value: &OptionValue) -> std::result::Result<(), OptionKind> {
                    match value {
                        OptionValue::Mode(name) => {
                            *self = <$mode as OptionMode>::parse(name).ok_or_else(|| self.kind())?;
                            Ok(())
                        }
                        _ => Err(self.kind()),
                    }
                }
            }
        )+
    };
}

mode_leaves!(
    JukeboxTooltipMode,
    SignTooltipMode,
    SaturationTooltipMode,
    HiddenEffectMode,
);

macro_rules! option_leaves {
    ($($path:literal => $($field:ident).+;)+) => {
        /// Every leaf path, in document order.
        pub const LEAF_PATHS: &[&str] = &[$($path),+];

        impl Config {
            pub(crate) fn leaf(&self, path: &str) -> Option<&dyn LeafValue> {
                match path {
                    $($path => Some(&self.$($field).+ as &dyn LeafValue),)+
                    _ => None,
                }
            }

            pub(crate) fn leaf_mut(&mut self, path: &str) -> Option<&mut dyn LeafValue> {
                match path {
                    $($path => Some(&mut self.$($field).+ as &mut dyn LeafValue),)+
                    _ => None,
                }
            }
        }
    };
}

option_leaves! {
    "armor" => armor;
    "banner_pattern" => banner_pattern;
    "painting" => painting;
    "containers/campfire" => containers.campfire;
    "containers/storage/enabled" => containers.storage.enabled;
    "containers/storage/compact" => containers.storage.compact;
    "containers/storage/loot_table" => containers.storage.loot_table;
    "containers/shulker_box/enabled" => containers.shulker_box.storage.enabled;
    "containers/shulker_box/compact" => containers.shulker_box.storage.compact;
    "containers/shulker_box/loot_table" => containers.shulker_box.storage.loot_table;
    "containers/shulker_box/color" => containers.shulker_box.color;
    "containers/chiseled_bookshelf/enabled" => containers.chiseled_bookshelf.storage.enabled;
    "containers/chiseled_bookshelf/compact" => containers.chiseled_bookshelf.storage.compact;
    "containers/chiseled_bookshelf/loot_table" => containers.chiseled_bookshelf.storage.loot_table;
    "containers/chiseled_bookshelf/block_render" => containers.chiseled_bookshelf.block_render;
    "effects/potions" => effects.potions;
    "effects/tipped_arrows" => effects.tipped_arrows;
    "effects/spectral_arrow" => effects.spectral_arrow;
    "effects/food" => effects.food;
    "effects/hidden_motion" => effects.hidden_motion;
    "effects/hidden_effect_mode" => effects.hidden_effect_mode;
    "effects/beacon" => effects.beacon;
    "entities/armor_stand/enabled" => entities.armor_stand.enabled;
    "entities/armor_stand/always_show_name" => entities.armor_stand.always_show_name;
    "entities/armor_stand/spin" => entities.armor_stand.spin;
    "entities/bee/enabled" => entities.bee.entity.enabled;
    "entities/bee/always_show_name" => entities.bee.entity.always_show_name;
    "entities/bee/spin" => entities.bee.entity.spin;
    "entities/bee/show_honey_level" => entities.bee.show_honey_level;
    "entities/fish_bucket/enabled" => entities.fish_bucket.enabled;
    "entities/fish_bucket/always_show_name" => entities.fish_bucket.always_show_name;
    "entities/fish_bucket/spin" => entities.fish_bucket.spin;
    "entities/mob_spawner/enabled" => entities.mob_spawner.enabled;
    "entities/mob_spawner/always_show_name" => entities.mob_spawner.always_show_name;
    "entities/mob_spawner/spin" => entities.mob_spawner.spin;
    "entities/spawn_egg/enabled" => entities.spawn_egg.enabled;
    "entities/spawn_egg/always_show_name" => entities.spawn_egg.always_show_name;
    "entities/spawn_egg/spin" => entities.spawn_egg.spin;
    "entities/pufferfish_puff_state" => entities.pufferfish_puff_state;
    "filled_map/enabled" => filled_map.enabled;
    "filled_map/show_player_icon" => filled_map.show_player_icon;
    "food/hunger" => food.hunger;
    "food/saturation" => food.saturation;
    "jukebox" => jukebox;
    "sign" => sign;
    "advanced_tooltips/repair_cost" => advanced_tooltips.repair_cost;
    "advanced_tooltips/lodestone_coords" => advanced_tooltips.lodestone_coords;
}

impl Config {
    /// Every leaf path, in document order.
    #[must_use]
    pub const fn leaf_paths() -> &'static [&'static str] {
        LEAF_PATHS
    }

    /// Returns the value at `path`, or `None` for an unknown path.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance::config::{Config, OptionValue};
    ///
    /// let config = Config::default();
    /// assert_eq!(config.get("food/saturation"), Some(OptionValue::Mode("merged".into())));
    /// assert_eq!(config.get("food/flavor"), None);
    /// ```
    #[must_use]
    pub fn get(&self, path: &str) -> Option<OptionValue> {
        self.leaf(path).map(LeafValue::value)
    }

    /// Returns what the leaf at `path` accepts.
    #[must_use]
    pub fn kind_of(&self, path: &str) -> Option<OptionKind> {
        self.leaf(path).map(LeafValue::kind)
    }

    /// Every leaf with its current value, in document order.
    #[must_use]
    pub fn leaves(&self) -> Vec<(&'static str, OptionValue)> {
        LEAF_PATHS
            .iter()
            .filter_map(|&path| self.get(path).map(|value| (path, value)))
            .collect()
    }

    /// Sets the leaf at `path`. Integers are clamped into range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOption`] for an unknown path and
    /// [`Error::InvalidValue`] when the value has the wrong type or names an
    /// unknown mode.
    pub fn set(&mut self, path: &str, value: OptionValue) -> Result<()> {
        let leaf = self.leaf_mut(path).ok_or_else(|| Error::UnknownOption {
            path: path.to_string(),
        })?;
        leaf.assign(&value).map_err(|expected| Error::InvalidValue {
            path: path.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        })
    }

    /// Parses `raw` as the leaf's kind and sets it.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance::config::{Config, OptionValue};
    ///
    /// let mut config = Config::default();
    /// config.set_from_str("entities/pufferfish_puff_state", "9").unwrap();
    /// assert_eq!(config.get("entities/pufferfish_puff_state"), Some(OptionValue::Int(2)));
    /// assert!(config.set_from_str("armor", "sometimes").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOption`] for an unknown path and
    /// [`Error::InvalidValue`] when `raw` does not parse.
    pub fn set_from_str(&mut self, path: &str, raw: &str) -> Result<()> {
        let kind = self.kind_of(path).ok_or_else(|| Error::UnknownOption {
            path: path.to_string(),
        })?;
        let value = kind.parse(raw).ok_or_else(|| Error::InvalidValue {
            path: path.to_string(),
            value: raw.to_string(),
            expected: kind.to_string(),
        })?;
        self.set(path, value)
    }
}
