//! Rules for items that show a picture or a bit of text: jukeboxes, signs,
//! filled maps, banner patterns and paintings.

use serde_json::Value;

use crate::config::{JukeboxTooltipMode, SignTooltipMode};
use crate::item::{BlockKind, ItemId, ItemKind};
use crate::rules::RuleContext;
use crate::tooltip::{TooltipNode, TooltipPayload};

const JUKEBOX_TEXT_HEIGHT: u32 = 10;
const JUKEBOX_DISC_HEIGHT: u32 = 20;

const SIGN_WIDTH: u32 = 94;
const SIGN_HEIGHT: u32 = 52;
const SIGN_LINE_HEIGHT: u32 = 10;
const SIGN_LINES: u32 = 4;
const DEFAULT_SIGN_COLOR: &str = "black";

const MAP_WIDTH: u32 = 128;
const MAP_HEIGHT: u32 = 130;

const BANNER_PATTERN_WIDTH: u32 = 16;
const BANNER_PATTERN_HEIGHT: u32 = 32;

/// Pixels per painting block.
const PAINTING_BLOCK: u32 = 16;

const DISC_PREFIX: &str = "music_disc_";

/// Artist and title of the vanilla discs, keyed by the part of the id after
/// `music_disc_`.
const DISCS: &[(&str, &str)] = &[
    ("13", "C418 - 13"),
    ("cat", "C418 - cat"),
    ("blocks", "C418 - blocks"),
    ("chirp", "C418 - chirp"),
    ("far", "C418 - far"),
    ("mall", "C418 - mall"),
    ("mellohi", "C418 - mellohi"),
    ("stal", "C418 - stal"),
    ("strad", "C418 - strad"),
    ("ward", "C418 - ward"),
    ("11", "C418 - 11"),
    ("wait", "C418 - wait"),
    ("pigstep", "Lena Raine - Pigstep"),
    ("otherside", "Lena Raine - otherside"),
    ("5", "Samuel Åberg - 5"),
    ("relic", "Aaron Cherof - Relic"),
];

/// Painting sizes in blocks.
const PAINTINGS: &[(&str, u32, u32)] = &[
    ("kebab", 1, 1),
    ("aztec", 1, 1),
    ("alban", 1, 1),
    ("aztec2", 1, 1),
    ("bomb", 1, 1),
    ("plant", 1, 1),
    ("wasteland", 1, 1),
    ("pool", 2, 1),
    ("courbet", 2, 1),
    ("sea", 2, 1),
    ("sunset", 2, 1),
    ("creebet", 2, 1),
    ("wanderer", 1, 2),
    ("graham", 1, 2),
    ("match", 2, 2),
    ("bust", 2, 2),
    ("stage", 2, 2),
    ("void", 2, 2),
    ("skull_and_roses", 2, 2),
    ("wither", 2, 2),
    ("earth", 2, 2),
    ("wind", 2, 2),
    ("water", 2, 2),
    ("fire", 2, 2),
    ("fighters", 4, 2),
    ("pointer", 4, 4),
    ("pigscene", 4, 4),
    ("burning_skull", 4, 4),
    ("skeleton", 4, 3),
    ("donkey_kong", 4, 3),
];

/// Extracts the visible text of a text component.
///
/// Accepts `{"text": ...}` objects and JSON string literals; anything else
/// is returned as written.
///
/// # Examples
///
/// ```
/// use glance::rules::display::plain_text;
///
/// assert_eq!(plain_text(r#"{"text":"Hello"}"#), "Hello");
/// assert_eq!(plain_text(r#""quoted""#), "quoted");
/// assert_eq!(plain_text("raw"), "raw");
/// ```
#[must_use]
pub fn plain_text(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::String(text)) => text,
        Ok(Value::Object(component)) => component
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
        _ => raw.to_owned(),
    }
}

/// Describes a music disc: artist and title for known discs, otherwise the
/// title-cased id.
///
/// # Examples
///
/// ```
/// use glance::rules::display::disc_description;
///
/// assert_eq!(disc_description("minecraft:music_disc_cat"), Some("C418 - cat".into()));
/// assert_eq!(disc_description("mod:music_disc_lost_tune"), Some("Lost Tune".into()));
/// assert_eq!(disc_description("minecraft:stone"), None);
/// ```
#[must_use]
pub fn disc_description(id: &str) -> Option<String> {
    let id = ItemId::new(id);
    let name = id.path().strip_prefix(DISC_PREFIX)?;
    if let Some((_, description)) = DISCS.iter().find(|(disc, _)| *disc == name) {
        return Some((*description).to_owned());
    }
    Some(title_case(name))
}

fn title_case(name: &str) -> String {
    name.split('_')
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

/// Size of a painting variant in pixels, or `None` for unknown variants.
#[must_use]
pub fn painting_size(variant: &str) -> Option<(u32, u32)> {
    let id = ItemId::new(variant);
    PAINTINGS
        .iter()
        .find(|(name, _, _)| *name == id.path())
        .map(|(_, width, height)| (width * PAINTING_BLOCK, height * PAINTING_BLOCK))
}

/// Jukeboxes show the disc they hold.
pub fn jukebox(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    let mode = ctx.config.jukebox;
    if ctx.item.block() != Some(BlockKind::Jukebox) || !mode.is_enabled() {
        return None;
    }
    let record = ctx.item.data().block_entity()?.compound("RecordItem")?;
    let disc = disc_description(record.string("id")?)?;

    let fancy = mode == JukeboxTooltipMode::Fancy;
    let height = if fancy {
        JUKEBOX_TEXT_HEIGHT + JUKEBOX_DISC_HEIGHT
    } else {
        JUKEBOX_TEXT_HEIGHT
    };
    Some(TooltipNode::leaf(
        ctx.text.width(&disc),
        height,
        TooltipPayload::Jukebox { disc, fancy },
    ))
}

/// Signs show their text, on the board in fancy mode or as plain lines.
pub fn sign(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    let mode = ctx.config.sign;
    if ctx.item.kind != ItemKind::Sign || !mode.is_enabled() {
        return None;
    }
    let tag = ctx.item.data().block_entity()?;

    let lines: Vec<String> = (1..=SIGN_LINES)
        .map(|line| tag.string(&format!("Text{line}")).map(plain_text).unwrap_or_default())
        .collect();
    let color = tag.string("Color").unwrap_or(DEFAULT_SIGN_COLOR).to_owned();
    let glowing = tag.bool("GlowingText").unwrap_or(false);
    let fancy = mode == SignTooltipMode::Fancy;

    let (width, height) = if fancy {
        (SIGN_WIDTH, SIGN_HEIGHT)
    } else {
        let widest = lines.iter().map(|line| ctx.text.width(line)).max().unwrap_or(0);
        (widest, SIGN_LINE_HEIGHT * SIGN_LINES)
    };

    Some(TooltipNode::leaf(
        width,
        height,
        TooltipPayload::Sign {
            lines,
            color,
            glowing,
            fancy,
        },
    ))
}

/// Filled maps show the map picture.
pub fn filled_map(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    let config = &ctx.config.filled_map;
    if ctx.item.kind != ItemKind::FilledMap || !config.enabled {
        return None;
    }
    let map_id = ctx.item.data().root().int("map")?;

    Some(TooltipNode::leaf(
        MAP_WIDTH,
        MAP_HEIGHT,
        TooltipPayload::Map {
            map_id,
            show_player_icon: config.show_player_icon,
        },
    ))
}

/// Banner patterns show the pattern they unlock.
pub fn banner_pattern(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    let ItemKind::BannerPattern { pattern } = &ctx.item.kind else {
        return None;
    };
    if !ctx.config.banner_pattern {
        return None;
    }

    Some(TooltipNode::leaf(
        BANNER_PATTERN_WIDTH,
        BANNER_PATTERN_HEIGHT,
        TooltipPayload::BannerPattern {
            pattern: pattern.clone(),
        },
    ))
}

/// Painting items with a fixed variant show the painting.
pub fn painting(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    if ctx.item.kind != ItemKind::Painting || !ctx.config.painting {
        return None;
    }
    let variant = ctx.item.data().entity()?.string("variant")?;
    let (width, height) = painting_size(variant)?;

    Some(TooltipNode::leaf(
        width,
        height,
        TooltipPayload::Painting {
            variant: variant.to_owned(),
        },
    ))
}
