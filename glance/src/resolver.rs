//! Tooltip resolution.
//!
//! [`TooltipResolver`] runs the rule table against an item and a configuration
//! snapshot, and folds whatever the rules produce into one node. It also
//! produces the plain text lines added to advanced tooltips.

use log::debug;

use crate::config::Config;
use crate::item::InspectedItem;
use crate::provider::ProviderRegistry;
use crate::rules::{Rule, RuleContext, RULES};
use crate::tooltip::{FixedWidthText, TextMeasure, TooltipNode};

static DEFAULT_TEXT: FixedWidthText = FixedWidthText::new(FixedWidthText::DEFAULT_GLYPH_WIDTH);

/// Resolves items to tooltip nodes.
///
/// Resolution only reads its inputs, so one resolver can serve any number of
/// callers.
///
/// # Examples
///
/// ```
/// use glance::config::Config;
/// use glance::item::{FoodProperties, InspectedItem, ItemStack};
/// use glance::provider::ProviderRegistry;
/// use glance::resolver::TooltipResolver;
///
/// let providers = ProviderRegistry::with_defaults();
/// let resolver = TooltipResolver::new(&providers);
///
/// let bread = InspectedItem::new(ItemStack::new("bread", 1))
///     .with_food(FoodProperties::new(5, 0.6));
/// let node = resolver.resolve(&bread, &Config::default()).unwrap();
/// assert_eq!(node.height(), 11);
///
/// let stone = InspectedItem::new(ItemStack::new("stone", 1));
/// assert!(resolver.resolve(&stone, &Config::default()).is_none());
/// ```
#[derive(Clone, Copy)]
pub struct TooltipResolver<'r> {
    providers: &'r ProviderRegistry,
    text: &'r dyn TextMeasure,
    rules: &'static [Rule],
}

impl<'r> TooltipResolver<'r> {
    /// Creates a resolver using the full rule table and fixed-width text.
    #[must_use]
    pub fn new(providers: &'r ProviderRegistry) -> Self {
        Self {
            providers,
            text: &DEFAULT_TEXT,
            rules: RULES,
        }
    }

    /// Uses `text` to measure text.
    #[must_use]
    pub fn with_text(mut self, text: &'r dyn TextMeasure) -> Self {
        self.text = text;
        self
    }

    /// Uses a different rule table, in the given order.
    #[must_use]
    pub const fn with_rules(mut self, rules: &'static [Rule]) -> Self {
        self.rules = rules;
        self
    }

    /// The rules in evaluation order.
    #[must_use]
    pub const fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Runs every rule and returns the nodes produced, tagged with the rule
    /// that produced them, in rule order.
    #[must_use]
    pub fn resolve_named(&self, item: &InspectedItem, config: &Config) -> Vec<(&'static str, TooltipNode)> {
        let context = RuleContext {
            item,
            config,
            providers: self.providers,
            text: self.text,
        };

        self.rules
            .iter()
            .filter_map(|rule| {
                let node = (rule.apply)(&context)?;
                debug!(
                    "rule {} produced {}x{} for {}",
                    rule.name,
                    node.width(),
                    node.height(),
                    item.stack.id
                );
                Some((rule.name, node))
            })
            .collect()
    }

    /// Resolves an item to a single node.
    ///
    /// Returns `None` when every rule abstains, the node itself when exactly
    /// one rule applies, and a compound of all nodes in rule order otherwise.
    #[must_use]
    pub fn resolve(&self, item: &InspectedItem, config: &Config) -> Option<TooltipNode> {
        let nodes = self
            .resolve_named(item, config)
            .into_iter()
            .map(|(_, node)| node)
            .collect();
        TooltipNode::from_nodes(nodes)
    }

    /// Text lines appended below the tooltip.
    ///
    /// The loot table line is shown whenever the container's leaf allows it.
    /// Lodestone coordinates and repair cost need `advanced` as well.
    #[must_use]
    pub fn extra_lines(&self, item: &InspectedItem, config: &Config, advanced: bool) -> Vec<String> {
        let mut lines = Vec::new();
        let root = item.data().root();

        let loot_table = item
            .block()
            .and_then(|block| config.containers.for_block(block))
            .filter(|leaf| leaf.loot_table)
            .and_then(|_| item.data().block_entity()?.string("LootTable"));
        if let Some(table) = loot_table {
            lines.push(format!("Loot table: {table}"));
        }

        if !advanced {
            return lines;
        }

        let advanced_config = &config.advanced_tooltips;
        if advanced_config.lodestone_coords {
            if let Some(pos) = root.compound("LodestonePos") {
                if let (Some(x), Some(y), Some(z)) = (pos.int("X"), pos.int("Y"), pos.int("Z")) {
                    lines.push(format!("Lodestone: X: {x}, Y: {y}, Z: {z}"));
                    if let Some(dimension) = root.string("LodestoneDimension") {
                        lines.push(format!("Dimension: {dimension}"));
                    }
                }
            }
        }

        if advanced_config.repair_cost {
            if let Some(cost) = root.int("RepairCost").filter(|cost| *cost > 0) {
                lines.push(format!("Repair cost: {cost}"));
            }
        }

        lines
    }
}

impl std::fmt::Debug for TooltipResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TooltipResolver")
            .field("providers", self.providers)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}
