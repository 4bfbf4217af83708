//! Container rules: storage blocks, campfires and chiseled bookshelves.

use crate::data::BLOCK_STATE_TAG;
use crate::inventory::InventoryContext;
use crate::item::BlockKind;
use crate::provider::read_block_entity_items;
use crate::rules::{inventory_node, RuleContext, SLOT_SIZE};
use crate::tooltip::{TooltipNode, TooltipPayload};

/// Cooking slots on a campfire.
pub const CAMPFIRE_SLOTS: usize = 4;

/// Book slots on a chiseled bookshelf.
pub const BOOKSHELF_SLOTS: usize = 6;

/// Side of a campfire preview.
const CAMPFIRE_SIZE: u32 = 3 * SLOT_SIZE + 2;

/// Side of a chiseled bookshelf drawn as a block.
const BOOKSHELF_BLOCK_SIZE: u32 = 24;

/// Campfires show what is cooking on them.
pub fn campfire(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    if ctx.item.block() != Some(BlockKind::Campfire) || !ctx.config.containers.campfire {
        return None;
    }
    let slots = read_block_entity_items(ctx.item.data(), CAMPFIRE_SLOTS)?;
    if slots.iter().all(|slot| slot.is_empty()) {
        return None;
    }
    let lit = ctx
        .item
        .data()
        .root()
        .compound(BLOCK_STATE_TAG)
        .and_then(|state| state.bool("lit"))
        .unwrap_or(true);

    Some(TooltipNode::leaf(
        CAMPFIRE_SIZE,
        CAMPFIRE_SIZE,
        TooltipPayload::Campfire { slots, lit },
    ))
}

/// Chiseled bookshelves show their books, drawn on the block or as a grid.
pub fn chiseled_bookshelf(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    let config = &ctx.config.containers.chiseled_bookshelf;
    if ctx.item.block() != Some(BlockKind::ChiseledBookshelf) || !config.storage.enabled {
        return None;
    }
    let slots = read_block_entity_items(ctx.item.data(), BOOKSHELF_SLOTS)?;

    if config.block_render {
        if slots.iter().all(|slot| slot.is_empty()) {
            return None;
        }
        return Some(TooltipNode::leaf(
            BOOKSHELF_BLOCK_SIZE,
            BOOKSHELF_BLOCK_SIZE,
            TooltipPayload::Bookshelf { slots },
        ));
    }
    inventory_node(
        InventoryContext::new(slots).with_columns(3),
        config.storage.compact,
    )
}

/// Storage blocks show their inventory as found by the provider registry.
pub fn container(ctx: &RuleContext<'_>) -> Option<TooltipNode> {
    let block = ctx.item.block()?;
    if matches!(
        block,
        BlockKind::Campfire
            | BlockKind::ChiseledBookshelf
            | BlockKind::Beacon
            | BlockKind::Beehive
            | BlockKind::Jukebox
    ) {
        return None;
    }

    let containers = &ctx.config.containers;
    let config = containers.for_block(block).unwrap_or(&containers.storage);
    if !config.enabled {
        return None;
    }

    let mut context = ctx.providers.resolve(&ctx.item.stack, Some(config))?;
    if block == BlockKind::ShulkerBox && !containers.shulker_box.color {
        context.color = None;
    }
    inventory_node(context, config.compact)
}
