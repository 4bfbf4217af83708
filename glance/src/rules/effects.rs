//! Status effect rules: potions, arrows, beacons and food effects.

use crate::config::Config;
use crate::data::{AttachedData, DataRef};
use crate::effect::StatusEffect;
use crate::item::{BlockKind, ItemKind, HIDDEN_EFFECTS_TAG};
use crate::rules::RuleContext;
use crate::tooltip::{TextMeasure, TooltipNode, TooltipPayload};

/// Width of the effect icon column plus padding.
const ICON_WIDTH: u32 = 26;

/// Narrowest effect list.
const MIN_WIDTH: u32 = 64;

/// Height of one effect entry.
const ROW_HEIGHT: u32 = 20;

/// Glyphs shown in place of hidden effects.
const HIDDEN_GLYPHS: usize = 8;

/// Duration scale for tipped arrows.
pub const TIPPED_ARROW_MULTIPLIER: f32 = 0.125;

/// Duration of spectral arrow glowing, in ticks.
pub const SPECTRAL_GLOWING_TICKS: i32 = 200;

/// Duration shown for beacon effects, in ticks.
pub const BEACON_EFFECT_TICKS: i32 = 200;

/// Default duration of suspicious stew effects, in ticks.
pub const STEW_EFFECT_TICKS: i32 = 160;

/// Builds a status effect list node; `None` for an empty list.
///
/// # Examples
///
/// ```
/// use glance::effect::StatusEffect;
/// use glance::rules::effects::effects_node;
/// use glance::tooltip::FixedWidthText;
///
/// let node = effects_node(
///     vec![StatusEffect::new("speed", 3600, 0), StatusEffect::new("fire_resistance", 3600, 0)],
///     1.0,
///     &FixedWidthText::default(),
/// )
/// .unwrap();
/// assert_eq!(node.height(), 40);
/// assert_eq!(node.width(), 26 + 6 * "Fire Resistance".len() as u32);
/// ```
#[must_use]
pub fn effects_node(
    effects: Vec<StatusEffect>,
    multiplier: f32,
    text: &dyn TextMeasure,
) -> Option<TooltipNode> {
    if effects.is_empty() {
        return None;
    }

    let width = effects
        .iter()
        .flat_map(|effect| {
            let label = text.width(&effect.label());
            let detail = effect
                .detail_text(multiplier)
                .map_or(0, |detail| text.width(&detail));
            [label, detail]
        })
        .map(|line| ICON_WIDTH + line)
        .fold(MIN_WIDTH, u32::max);
    let height = ROW_HEIGHT * u32::try_from(effects.len()).unwrap_or(u32::MAX);

    Some(TooltipNode::leaf(
        width,
        height,
        TooltipPayload::StatusEffects {
            effects,
            multiplier,
        },
    ))
}

/// Builds the node shown in place of effects that must stay secret.
#[must_use]
pub fn hidden_node(config: &Config, text: &dyn TextMeasure) -> TooltipNode {
    TooltipNode::leaf(
        ICON_WIDTH + text.width(&"?".repeat(HIDDEN_GLYPHS)),
        ROW_HEIGHT,
        TooltipPayload::HiddenEffects {
            mode: config.effects.hidden_effect_mode,
            animated: config.effects.hidden_motion,
        },
    )
}

/// Effects stored on a potion-like item: its base `Potion`, then any
/// `CustomPotionEffects`.
#[must_use]
pub fn potion_effects(data: &AttachedData) -> Vec<StatusEffect> {
    let root = data.root();
    let mut effects = root
        .string("Potion")
        .map(StatusEffect::for_potion)
        .unwrap_or_default();
    if let Some(custom) = root.list("CustomPotionEffects") {
        effects.extend(custom.into_iter().filter_map(StatusEffect::from_entry));
    }
    effects
}

fn potion_like(ctx: &RuleContext<'_>, multiplier: f32) -> Option<TooltipNode> {
    if ctx.item.has_tag(HIDDEN_EFFECTS_TAG) {
        return Some(hidden_node(ctx.config, ctx.text));
    }
    effects_node(potion_effects(ctx.item.data()), multiplier, ctx.text)
}

/// Potions list their effects.
pub fn potion(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    if ctx.item.kind != ItemKind::Potion || !ctx.config.effects.potions {
        return None;
    }
    potion_like(ctx, 1.0)
}

/// Tipped arrows list their potion's effects at an eighth of the duration.
pub fn tipped_arrow(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    if ctx.item.kind != ItemKind::TippedArrow || !ctx.config.effects.tipped_arrows {
        return None;
    }
    potion_like(ctx, TIPPED_ARROW_MULTIPLIER)
}

/// Spectral arrows show the glowing they inflict.
pub fn spectral_arrow(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    if ctx.item.kind != ItemKind::SpectralArrow || !ctx.config.effects.spectral_arrow {
        return None;
    }
    effects_node(
        vec![StatusEffect::new("glowing", SPECTRAL_GLOWING_TICKS, 0)],
        1.0,
        ctx.text,
    )
}

fn beacon_effect(block_entity: DataRef<'_>, key: &str) -> Option<StatusEffect> {
    let id = StatusEffect::id_from_raw(block_entity.int(key)?)?;
    Some(StatusEffect::new(id, BEACON_EFFECT_TICKS, 0))
}

/// Beacons show their primary and secondary powers. The same power in both
/// slots reads as one effect at level II.
pub fn beacon(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    if ctx.item.block() != Some(BlockKind::Beacon) || !ctx.config.effects.beacon {
        return None;
    }
    let block_entity = ctx.item.data().block_entity()?;
    let mut primary = beacon_effect(block_entity, "Primary");
    let mut secondary = beacon_effect(block_entity, "Secondary");

    if let (Some(first), Some(second)) = (&primary, &secondary) {
        if first.id == second.id {
            primary = Some(StatusEffect::new(first.id.clone(), BEACON_EFFECT_TICKS, 1));
            secondary = None;
        }
    }

    effects_node(primary.into_iter().chain(secondary).collect(), 1.0, ctx.text)
}

fn stew_effects(data: &AttachedData) -> Option<Vec<StatusEffect>> {
    let entries = data.root().list("Effects")?;
    Some(
        entries
            .into_iter()
            .filter_map(|entry| {
                let id = StatusEffect::id_from_raw(entry.int("EffectId")?)?;
                let duration = entry
                    .int("EffectDuration")
                    .and_then(|d| i32::try_from(d).ok())
                    .unwrap_or(STEW_EFFECT_TICKS);
                Some(StatusEffect::new(id, duration, 0))
            })
            .collect(),
    )
}

/// Food lists the effects eating it grants.
///
/// Items tagged `hidden_effects` show a placeholder. Otherwise the food's
/// own effects are used, then a suspicious stew's `Effects` list, then any
/// potion effects stored on the item.
pub fn food_effects(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    let food = ctx.item.food.as_ref()?;
    if !ctx.config.effects.food {
        return None;
    }
    if ctx.item.has_tag(HIDDEN_EFFECTS_TAG) {
        return Some(hidden_node(ctx.config, ctx.text));
    }

    let effects = if !food.effects.is_empty() {
        food.effects.clone()
    } else if ctx.item.kind == ItemKind::SuspiciousStew {
        stew_effects(ctx.item.data())?
    } else {
        potion_effects(ctx.item.data())
    };
    effects_node(effects, 1.0, ctx.text)
}
