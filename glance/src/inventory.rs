//! Inventory contexts and stack compaction.

use serde::Serialize;

use crate::item::ItemStack;

/// Widest inventory grid, in columns.
pub const MAX_COLUMNS: u32 = 9;

/// The inventory of an item, as reconstructed by a provider.
///
/// # Examples
///
/// ```
/// use glance::inventory::InventoryContext;
/// use glance::item::ItemStack;
///
/// let context = InventoryContext::new(vec![ItemStack::empty(); 27]);
/// assert_eq!(context.len(), 27);
/// assert_eq!(context.derived_columns(), 9);
/// assert!(!context.has_items());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryContext {
    /// Slots in inventory order; empty stacks hold their position.
    pub slots: Vec<ItemStack>,
    /// Layout hint; 0 derives the column count from the slot count.
    pub columns: u32,
    /// Optional tint for the preview.
    pub color: Option<String>,
}

impl InventoryContext {
    /// Creates a context with derived columns and no tint.
    #[must_use]
    pub fn new(slots: Vec<ItemStack>) -> Self {
        Self {
            slots,
            columns: 0,
            color: None,
        }
    }

    /// Sets the column hint.
    #[must_use]
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the tint.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Number of slots, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the context has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if at least one slot holds something.
    #[must_use]
    pub fn has_items(&self) -> bool {
        self.slots.iter().any(|slot| !slot.is_empty())
    }

    /// Columns derived from the slot count: a third of it, at least one.
    #[must_use]
    pub fn derived_columns(&self) -> u32 {
        u32::try_from(self.slots.len() / 3).unwrap_or(u32::MAX).max(1)
    }
}

/// Merges equal stacks and drops empty slots.
///
/// Stacks merge when they hold the same item with equal attached data; the
/// merged entry keeps the position of the first one seen.
///
/// # Examples
///
/// ```
/// use glance::inventory::compact;
/// use glance::item::ItemStack;
///
/// let slots = vec![
///     ItemStack::new("apple", 1),
///     ItemStack::empty(),
///     ItemStack::new("bread", 2),
///     ItemStack::new("apple", 3),
/// ];
/// let compacted = compact(&slots);
/// assert_eq!(compacted, vec![ItemStack::new("apple", 4), ItemStack::new("bread", 2)]);
/// ```
#[must_use]
pub fn compact(slots: &[ItemStack]) -> Vec<ItemStack> {
    let mut merged: Vec<ItemStack> = Vec::new();

    for slot in slots.iter().filter(|slot| !slot.is_empty()) {
        match merged.iter_mut().find(|entry| entry.can_combine(slot)) {
            Some(entry) => entry.count = entry.count.saturating_add(slot.count),
            None => merged.push(slot.clone()),
        }
    }

    merged
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
