//! Status effects and how they read in a tooltip.

use serde::{Deserialize, Serialize};

use crate::data::DataRef;

/// Ticks per second.
pub const TICKS_PER_SECOND: i64 = 20;

/// Effect ids by legacy numeric id, starting at 1.
const EFFECTS_BY_RAW_ID: &[&str] = &[
    "speed",
    "slowness",
    "haste",
    "mining_fatigue",
    "strength",
    "instant_health",
    "instant_damage",
    "jump_boost",
    "nausea",
    "regeneration",
    "resistance",
    "fire_resistance",
    "water_breathing",
    "invisibility",
    "blindness",
    "night_vision",
    "hunger",
    "weakness",
    "poison",
    "wither",
    "health_boost",
    "absorption",
    "saturation",
    "glowing",
    "levitation",
    "luck",
    "unluck",
    "slow_falling",
    "conduit_power",
    "dolphins_grace",
    "bad_omen",
    "hero_of_the_village",
    "darkness",
];

/// Base potions: (potion, effect, duration in ticks, amplifier).
const POTIONS: &[(&str, &str, i32, u8)] = &[
    ("night_vision", "night_vision", 3600, 0),
    ("long_night_vision", "night_vision", 9600, 0),
    ("invisibility", "invisibility", 3600, 0),
    ("long_invisibility", "invisibility", 9600, 0),
    ("leaping", "jump_boost", 3600, 0),
    ("long_leaping", "jump_boost", 9600, 0),
    ("strong_leaping", "jump_boost", 1800, 1),
    ("fire_resistance", "fire_resistance", 3600, 0),
    ("long_fire_resistance", "fire_resistance", 9600, 0),
    ("swiftness", "speed", 3600, 0),
    ("long_swiftness", "speed", 9600, 0),
    ("strong_swiftness", "speed", 1800, 1),
    ("slowness", "slowness", 1800, 0),
    ("long_slowness", "slowness", 4800, 0),
    ("strong_slowness", "slowness", 400, 3),
    ("water_breathing", "water_breathing", 3600, 0),
    ("long_water_breathing", "water_breathing", 9600, 0),
    ("healing", "instant_health", 1, 0),
    ("strong_healing", "instant_health", 1, 1),
    ("harming", "instant_damage", 1, 0),
    ("strong_harming", "instant_damage", 1, 1),
    ("poison", "poison", 900, 0),
    ("long_poison", "poison", 1800, 0),
    ("strong_poison", "poison", 432, 1),
    ("regeneration", "regeneration", 900, 0),
    ("long_regeneration", "regeneration", 1800, 0),
    ("strong_regeneration", "regeneration", 450, 1),
    ("strength", "strength", 3600, 0),
    ("long_strength", "strength", 9600, 0),
    ("strong_strength", "strength", 1800, 1),
    ("weakness", "weakness", 1800, 0),
    ("long_weakness", "weakness", 4800, 0),
    ("luck", "luck", 6000, 0),
    ("slow_falling", "slow_falling", 1800, 0),
    ("long_slow_falling", "slow_falling", 4800, 0),
];

const ROMAN: &[&str] = &["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// One status effect instance.
///
/// `duration` is in ticks; a negative duration never runs out.
///
/// # Examples
///
/// ```
/// use glance::effect::StatusEffect;
///
/// let effect = StatusEffect::new("minecraft:night_vision", 3600, 1);
/// assert_eq!(effect.label(), "Night Vision II");
/// assert_eq!(effect.duration_text(1.0), "03:00");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    /// Effect id, e.g. `minecraft:speed`.
    pub id: String,
    /// Duration in ticks.
    #[serde(default)]
    pub duration: i32,
    /// Zero-based amplifier.
    #[serde(default)]
    pub amplifier: u8,
    /// Probability of being applied, for food effects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chance: Option<f32>,
}

impl StatusEffect {
    /// Creates an effect instance.
    #[must_use]
    pub fn new(id: impl Into<String>, duration: i32, amplifier: u8) -> Self {
        let id = id.into();
        let id = if id.contains(':') {
            id
        } else {
            format!("minecraft:{id}")
        };
        Self {
            id,
            duration,
            amplifier,
            chance: None,
        }
    }

    /// Sets the probability of being applied.
    #[must_use]
    pub fn with_chance(mut self, chance: f32) -> Self {
        self.chance = Some(chance);
        self
    }

    /// Looks up an effect by its legacy numeric id.
    #[must_use]
    pub fn id_from_raw(raw: i64) -> Option<&'static str> {
        let index = usize::try_from(raw.checked_sub(1)?).ok()?;
        EFFECTS_BY_RAW_ID.get(index).copied()
    }

    /// Reads a custom effect entry (`Id`, `Amplifier`, `Duration`).
    ///
    /// `Id` may be a legacy number or a string id.
    #[must_use]
    pub fn from_entry(entry: DataRef<'_>) -> Option<Self> {
        let id = match entry.string("Id") {
            Some(id) => id.to_string(),
            None => Self::id_from_raw(entry.int("Id")?)?.to_string(),
        };
        let amplifier = entry
            .int("Amplifier")
            .map_or(0, |a| u8::try_from(a).unwrap_or(0));
        let duration = entry
            .int("Duration")
            .map_or(0, |d| i32::try_from(d).unwrap_or(i32::MAX));
        Some(Self::new(id, duration, amplifier))
    }

    /// Effects of a base potion such as `minecraft:long_swiftness`.
    #[must_use]
    pub fn for_potion(potion: &str) -> Vec<Self> {
        let name = potion.split_once(':').map_or(potion, |(_, path)| path);
        if name == "turtle_master" || name == "long_turtle_master" || name == "strong_turtle_master" {
            let (duration, slow, resist) = match name {
                "long_turtle_master" => (800, 3, 2),
                "strong_turtle_master" => (400, 5, 3),
                _ => (400, 3, 2),
            };
            return vec![
                Self::new("slowness", duration, slow),
                Self::new("resistance", duration, resist),
            ];
        }
        POTIONS
            .iter()
            .filter(|(potion, ..)| *potion == name)
            .map(|&(_, effect, duration, amplifier)| Self::new(effect, duration, amplifier))
            .collect()
    }

    /// Human-readable effect name, e.g. `Night Vision`.
    #[must_use]
    pub fn display_name(&self) -> String {
        let path = self.id.split_once(':').map_or(self.id.as_str(), |(_, path)| path);
        path.split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Name with the level appended for amplifiers 1 through 9.
    #[must_use]
    pub fn label(&self) -> String {
        let name = self.display_name();
        match self.amplifier {
            1..=9 => format!("{name} {}", ROMAN[usize::from(self.amplifier)]),
            _ => name,
        }
    }

    /// Returns `true` if the effect shows a duration (more than one tick).
    #[must_use]
    pub const fn has_duration(&self) -> bool {
        self.duration > 1 || self.duration < 0
    }

    /// Remaining time as `mm:ss`, or `hh:mm:ss` past an hour, after scaling
    /// by `multiplier`. Effects that never run out read `**:**`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn duration_text(&self, multiplier: f32) -> String {
        if self.duration < 0 {
            return "**:**".to_string();
        }
        let ticks = (f64::from(self.duration) * f64::from(multiplier)).floor() as i64;
        let total_seconds = ticks / TICKS_PER_SECOND;
        let hours = total_seconds / 3600;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;
        if hours > 0 {
            format!("{hours:02}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes:02}:{seconds:02}")
        }
    }

    /// Chance as a whole percentage, when below 100%.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn chance_text(&self) -> Option<String> {
        self.chance
            .filter(|&chance| chance < 1.0)
            .map(|chance| format!("{}%", (chance * 100.0) as i32))
    }

    /// The second line of the effect entry: duration and chance.
    #[must_use]
    pub fn detail_text(&self, multiplier: f32) -> Option<String> {
        match (self.has_duration(), self.chance_text()) {
            (true, Some(chance)) => Some(format!("{} - {chance}", self.duration_text(multiplier))),
            (true, None) => Some(self.duration_text(multiplier)),
            (false, chance) => chance,
        }
    }
}
