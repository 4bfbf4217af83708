//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the glance library.

use std::env;

use glance::item::BlockKind;
use glance::{InspectedItem, ItemStack};
use serde_json::{json, Value};

/// RAII guard for setting and restoring environment variables.
///
/// Tests using it must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `key` to `value` until the guard is dropped.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}

/// Builder for block items carrying a `BlockEntityTag.Items` list.
///
/// # Examples
///
/// ```no_run
/// # use common::ContainerFixture;
/// let chest = ContainerFixture::new("chest", BlockKind::Chest)
///     .with_slot(0, "minecraft:apple", 3)
///     .build();
/// ```
#[allow(dead_code)]
pub struct ContainerFixture {
    id: String,
    block: BlockKind,
    items: Vec<Value>,
}

#[allow(dead_code)]
impl ContainerFixture {
    /// Creates an empty container of the given block.
    pub fn new(id: &str, block: BlockKind) -> Self {
        Self {
            id: id.to_string(),
            block,
            items: Vec::new(),
        }
    }

    /// Puts `count` of `item` in `slot`.
    pub fn with_slot(mut self, slot: u32, item: &str, count: u32) -> Self {
        self.items
            .push(json!({"Slot": slot, "id": item, "Count": count}));
        self
    }

    /// Builds the inspected item.
    pub fn build(self) -> InspectedItem {
        let data = json!({"BlockEntityTag": {"Items": self.items}});
        InspectedItem::new(ItemStack::new(self.id, 1).with_data(data)).with_block(self.block)
    }
}
