//! Tooltip rules.
//!
//! Each rule looks at one kind of item and either produces a single
//! [`TooltipNode`] or abstains. Rules are independent of each other: every
//! one checks its own configuration leaf and reads only the attached data it
//! needs, so a missing key makes that rule abstain and nothing else.
//!
//! [`RULES`] fixes the evaluation order. Item-kind rules come first, then the
//! rules any item can satisfy (food, food effects, armor).

use std::fmt;

use crate::config::Config;
use crate::inventory::{self, InventoryContext, MAX_COLUMNS};
use crate::item::InspectedItem;
use crate::provider::ProviderRegistry;
use crate::tooltip::{TextMeasure, TooltipNode, TooltipPayload};

pub mod containers;
pub mod display;
pub mod effects;
pub mod entities;
pub mod food;

/// Size of one inventory slot, in layout units.
pub const SLOT_SIZE: u32 = 18;

/// Everything a rule may consult.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    /// The item being inspected.
    pub item: &'a InspectedItem,
    /// The configuration snapshot.
    pub config: &'a Config,
    /// Inventory providers.
    pub providers: &'a ProviderRegistry,
    /// Text measurement.
    pub text: &'a dyn TextMeasure,
}

/// A named rule.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short name, for diagnostics.
    pub name: &'static str,
    /// Produces the rule's node, or `None` to abstain.
    pub apply: fn(&RuleContext<'_>) -> Option<TooltipNode>,
}

impl Rule {
    const fn new(name: &'static str, apply: fn(&RuleContext<'_>) -> Option<TooltipNode>) -> Self {
        Self { name, apply }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Every rule, in evaluation order.
pub const RULES: &[Rule] = &[
    Rule::new("potion", effects::potion),
    Rule::new("tipped_arrow", effects::tipped_arrow),
    Rule::new("spectral_arrow", effects::spectral_arrow),
    Rule::new("beacon", effects::beacon),
    Rule::new("beehive", entities::beehive),
    Rule::new("campfire", containers::campfire),
    Rule::new("jukebox", display::jukebox),
    Rule::new("chiseled_bookshelf", containers::chiseled_bookshelf),
    Rule::new("container", containers::container),
    Rule::new("entity_bucket", entities::entity_bucket),
    Rule::new("spawn_egg", entities::spawn_egg),
    Rule::new("armor_stand", entities::armor_stand),
    Rule::new("sign", display::sign),
    Rule::new("filled_map", display::filled_map),
    Rule::new("banner_pattern", display::banner_pattern),
    Rule::new("painting", display::painting),
    Rule::new("food", food::food),
    Rule::new("food_effects", effects::food_effects),
    Rule::new("armor", food::armor),
];

/// Builds an inventory grid node.
///
/// Returns `None` when no slot holds anything. With `compact` set, equal
/// stacks are merged, empty slots dropped and the grid is nine wide.
/// Otherwise the context's column hint is used, capped at nine, with 0
/// deriving the width from the slot count.
///
/// # Examples
///
/// ```
/// use glance::inventory::InventoryContext;
/// use glance::item::ItemStack;
/// use glance::rules::inventory_node;
///
/// let mut slots = vec![ItemStack::empty(); 27];
/// slots[0] = ItemStack::new("apple", 1);
/// let node = inventory_node(InventoryContext::new(slots).with_columns(9), false).unwrap();
/// assert_eq!((node.width(), node.height()), (162, 57));
/// ```
#[must_use]
pub fn inventory_node(context: InventoryContext, compact: bool) -> Option<TooltipNode> {
    if !context.has_items() {
        return None;
    }

    let (slots, columns) = if compact {
        (inventory::compact(&context.slots), MAX_COLUMNS)
    } else if context.columns == 0 {
        let columns = context.derived_columns();
        (context.slots, columns)
    } else {
        (context.slots, context.columns.min(MAX_COLUMNS))
    };

    let count = u32::try_from(slots.len()).unwrap_or(u32::MAX);
    let rows = count.div_ceil(columns);
    Some(TooltipNode::leaf(
        columns * SLOT_SIZE,
        SLOT_SIZE * rows + 3,
        TooltipPayload::Inventory {
            slots,
            columns,
            color: context.color,
        },
    ))
}

/// Runs one rule against an item with the default providers.
#[cfg(test)]
pub(crate) fn apply_rule(
    apply: fn(&RuleContext<'_>) -> Option<TooltipNode>,
    item: &InspectedItem,
    config: &Config,
) -> Option<TooltipNode> {
    let providers = ProviderRegistry::with_defaults();
    let text = crate::tooltip::FixedWidthText::default();
    apply(&RuleContext {
        item,
        config,
        providers: &providers,
        text: &text,
    })
}
