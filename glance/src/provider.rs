//! Inventory providers and their registry.
//!
//! A provider reconstructs the inventory stored in an item, usually from the
//! `BlockEntityTag.Items` list of a container block item. Providers are
//! either mapped to specific item identities or generic, in which case they
//! are consulted for every item without a mapped answer.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::StorageContainerConfig;
use crate::data::{AttachedData, DataRef, ITEMS};
use crate::inventory::{InventoryContext, MAX_COLUMNS};
use crate::item::{ItemId, ItemStack};

/// The sixteen dye colors, as used in item identities.
pub const DYE_COLORS: &[&str] = &[
    "white",
    "orange",
    "magenta",
    "light_blue",
    "yellow",
    "lime",
    "pink",
    "gray",
    "light_gray",
    "cyan",
    "purple",
    "blue",
    "brown",
    "green",
    "red",
    "black",
];

/// Reconstructs the inventory held by an item.
///
/// Any `Fn(&ItemStack, Option<&StorageContainerConfig>) -> Option<InventoryContext>`
/// closure is a provider.
///
/// # Examples
///
/// ```
/// use glance::config::StorageContainerConfig;
/// use glance::inventory::InventoryContext;
/// use glance::item::ItemStack;
/// use glance::provider::ProviderRegistry;
///
/// let mut registry = ProviderRegistry::new();
/// registry.register_for(["minecraft:bundle"], |_: &ItemStack, _: Option<&StorageContainerConfig>| {
///     Some(InventoryContext::new(vec![ItemStack::new("apple", 3)]))
/// });
///
/// let context = registry.resolve(&ItemStack::new("bundle", 1), None).unwrap();
/// assert_eq!(context.len(), 1);
/// ```
pub trait InventoryProvider: Send + Sync {
    /// Returns the inventory of `stack`, or `None` if it has none.
    fn inventory_context(
        &self,
        stack: &ItemStack,
        config: Option<&StorageContainerConfig>,
    ) -> Option<InventoryContext>;
}

impl<F> InventoryProvider for F
where
    F: Fn(&ItemStack, Option<&StorageContainerConfig>) -> Option<InventoryContext> + Send + Sync,
{
    fn inventory_context(
        &self,
        stack: &ItemStack,
        config: Option<&StorageContainerConfig>,
    ) -> Option<InventoryContext> {
        self(stack, config)
    }
}

/// Number of addressable slots; a stored `Slot` is a single byte.
pub const MAX_SLOTS: usize = 256;

fn slot_index(entry: &DataRef<'_>) -> Option<usize> {
    entry
        .int("Slot")
        .and_then(|slot| usize::try_from(slot).ok())
        .filter(|&slot| slot < MAX_SLOTS)
}

/// Reads the `BlockEntityTag.Items` list into `size` slots.
///
/// Entries without a valid `Slot` inside the inventory are skipped. `size`
/// is capped at [`MAX_SLOTS`]. Returns `None` when the item has no item list
/// at all.
#[must_use]
pub fn read_block_entity_items(data: &AttachedData, size: usize) -> Option<Vec<ItemStack>> {
    let entries = data.block_entity()?.list(ITEMS)?;
    let mut slots = vec![ItemStack::empty(); size.min(MAX_SLOTS)];

    for entry in entries {
        let Some(slot) = slot_index(&entry) else {
            continue;
        };
        if let (Some(target), Some(stack)) = (slots.get_mut(slot), ItemStack::from_entry(entry)) {
            *target = stack;
        }
    }

    Some(slots)
}

/// A container with a fixed number of slots, laid out in a fixed grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedInventoryProvider {
    size: usize,
    columns: u32,
    color: Option<String>,
}

impl FixedInventoryProvider {
    /// A container of `size` slots in rows of `columns`.
    #[must_use]
    pub const fn new(size: usize, columns: u32) -> Self {
        Self {
            size,
            columns,
            color: None,
        }
    }

    /// Tints the preview.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl InventoryProvider for FixedInventoryProvider {
    fn inventory_context(
        &self,
        stack: &ItemStack,
        _config: Option<&StorageContainerConfig>,
    ) -> Option<InventoryContext> {
        let slots = read_block_entity_items(&stack.data, self.size)?;
        let context = InventoryContext::new(slots).with_columns(self.columns);
        Some(match &self.color {
            Some(color) => context.with_color(color.clone()),
            None => context,
        })
    }
}

/// Any block entity with an item list, sized from the highest slot used.
///
/// The size is rounded up to whole rows of nine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotListProvider;

impl InventoryProvider for SlotListProvider {
    fn inventory_context(
        &self,
        stack: &ItemStack,
        _config: Option<&StorageContainerConfig>,
    ) -> Option<InventoryContext> {
        let entries = stack.data.block_entity()?.list(ITEMS)?;
        let highest = entries.iter().filter_map(slot_index).max()?;
        let row = MAX_COLUMNS as usize;
        let size = (highest + 1).div_ceil(row) * row;

        let slots = read_block_entity_items(&stack.data, size)?;
        Some(InventoryContext::new(slots).with_columns(MAX_COLUMNS))
    }
}

/// Providers keyed by item identity, plus generic providers tried in order.
///
/// Registration takes `&mut self` and happens before resolution; resolution
/// only reads.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    mapped: HashMap<ItemId, Arc<dyn InventoryProvider>>,
    generic: Vec<Arc<dyn InventoryProvider>>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with providers for the vanilla containers.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance::item::ItemStack;
    /// use glance::provider::ProviderRegistry;
    /// use serde_json::json;
    ///
    /// let registry = ProviderRegistry::with_defaults();
    /// let chest = ItemStack::new("chest", 1).with_data(json!({
    ///     "BlockEntityTag": {"Items": [{"Slot": 4, "id": "minecraft:apple", "Count": 2}]}
    /// }));
    /// let context = registry.resolve(&chest, None).unwrap();
    /// assert_eq!(context.len(), 27);
    /// assert_eq!(context.slots[4].count, 2);
    /// ```
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register_for(
            ["chest", "trapped_chest", "barrel"],
            FixedInventoryProvider::new(27, 9),
        );
        registry.register_for(["dispenser", "dropper"], FixedInventoryProvider::new(9, 3));
        registry.register_for(["hopper"], FixedInventoryProvider::new(5, 5));
        registry.register_for(["shulker_box"], FixedInventoryProvider::new(27, 9));
        for color in DYE_COLORS {
            registry.register_for(
                [format!("{color}_shulker_box")],
                FixedInventoryProvider::new(27, 9).with_color(*color),
            );
        }

        registry.register(SlotListProvider);
        registry
    }

    /// Maps `provider` to each identity in `items`, replacing earlier
    /// mappings.
    pub fn register_for<I, P>(&mut self, items: I, provider: P)
    where
        I: IntoIterator,
        I::Item: Into<ItemId>,
        P: InventoryProvider + 'static,
    {
        let provider: Arc<dyn InventoryProvider> = Arc::new(provider);
        for item in items {
            let id = item.into();
            if self.mapped.insert(id.clone(), Arc::clone(&provider)).is_some() {
                log::debug!("replaced inventory provider for {id}");
            }
        }
    }

    /// Adds a generic provider after the ones already registered.
    pub fn register<P>(&mut self, provider: P)
    where
        P: InventoryProvider + 'static,
    {
        self.generic.push(Arc::new(provider));
    }

    /// Number of identities with a mapped provider.
    #[must_use]
    pub fn mapped_len(&self) -> usize {
        self.mapped.len()
    }

    /// Number of generic providers.
    #[must_use]
    pub fn generic_len(&self) -> usize {
        self.generic.len()
    }

    /// Finds the inventory of `stack`.
    ///
    /// A mapped provider returning slots wins outright. Otherwise the generic
    /// provider returning the most slots wins, the earliest registered on a
    /// tie. Contexts without slots count as no answer.
    #[must_use]
    pub fn resolve(
        &self,
        stack: &ItemStack,
        config: Option<&StorageContainerConfig>,
    ) -> Option<InventoryContext> {
        if let Some(provider) = self.mapped.get(&stack.id) {
            if let Some(context) = provider
                .inventory_context(stack, config)
                .filter(|context| !context.is_empty())
            {
                return Some(context);
            }
        }

        // Largest inventory wins
        let mut best: Option<InventoryContext> = None;
        for provider in &self.generic {
            let Some(context) = provider
                .inventory_context(stack, config)
                .filter(|context| !context.is_empty())
            else {
                continue;
            };
            if best.as_ref().map_or(true, |current| context.len() > current.len()) {
                best = Some(context);
            }
        }
        best
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut mapped: Vec<&str> = self.mapped.keys().map(ItemId::as_str).collect();
        mapped.sort_unstable();
        f.debug_struct("ProviderRegistry")
            .field("mapped", &mapped)
            .field("generic", &self.generic.len())
            .finish()
    }
}
