//! Hunger, saturation and armor bars.

use crate::config::SaturationTooltipMode;
use crate::rules::RuleContext;
use crate::tooltip::{TooltipNode, TooltipPayload};

/// Width of one hunger, saturation or armor icon.
const ICON_WIDTH: u32 = 9;

/// Height of one icon row.
const ROW_HEIGHT: u32 = 11;

/// Icon row width for `points`, two points per icon.
const fn bar_width(points: u32) -> u32 {
    points / 2 * ICON_WIDTH
}

/// Width of the saturation bar: `hunger * modifier` points, nine units each,
/// truncated.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn saturation_width(hunger: u32, saturation_modifier: f32) -> u32 {
    let width = (hunger as f32 * saturation_modifier * ICON_WIDTH as f32).trunc();
    if width.is_finite() && width > 0.0 {
        width as u32
    } else {
        0
    }
}

/// Food shows hunger and saturation icons.
pub fn food(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    let config = &ctx.config.food;
    let food = ctx.item.food.as_ref()?;
    if !config.is_enabled() {
        return None;
    }

    let height = if config.hunger && config.saturation == SaturationTooltipMode::Separated {
        ROW_HEIGHT * 2
    } else {
        ROW_HEIGHT
    };
    let width = bar_width(food.hunger).max(saturation_width(food.hunger, food.saturation_modifier));

    Some(TooltipNode::leaf(
        width,
        height,
        TooltipPayload::Food {
            hunger: food.hunger,
            saturation_modifier: food.saturation_modifier,
            show_hunger: config.hunger,
            saturation: config.saturation,
        },
    ))
}

/// Armor shows its protection points.
pub fn armor(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    if !ctx.config.armor {
        return None;
    }
    let protection = ctx.item.armor?.protection;
    if protection == 0 {
        return None;
    }

    Some(TooltipNode::leaf(
        bar_width(protection),
        ROW_HEIGHT,
        TooltipPayload::Armor { protection },
    ))
}
