#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # glance
//!
//! A library for resolving item tooltips and managing their configuration.
//!
//! Given an item, its attached data and a configuration snapshot, glance
//! decides which previews to show (inventories, status effects, food bars,
//! entities, signs, maps and more) and measures them, producing one
//! [`TooltipNode`] for an external renderer to draw.
//!
//! ## Core Types
//!
//! - [`Config`] and [`ConfigStore`]: the option tree and its YAML persistence
//! - [`ProviderRegistry`]: reconstructs inventories held by items
//! - [`TooltipResolver`]: runs the rule table and aggregates the results
//! - [`TooltipNode`]: measured leaf or vertically stacked compound
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use glance::{Config, InspectedItem, ItemStack, ProviderRegistry, TooltipResolver};
//! use glance::item::BlockKind;
//! use serde_json::json;
//!
//! let providers = ProviderRegistry::with_defaults();
//! let resolver = TooltipResolver::new(&providers);
//!
//! let chest = InspectedItem::new(ItemStack::new("chest", 1).with_data(json!({
//!     "BlockEntityTag": {"Items": [{"Slot": 0, "id": "minecraft:apple", "Count": 3}]}
//! })))
//! .with_block(BlockKind::Chest);
//!
//! let node = resolver.resolve(&chest, &Config::default()).unwrap();
//! assert_eq!((node.width(), node.height()), (162, 57));
//! ```

pub mod config;
pub mod data;
pub mod effect;
pub mod error;
pub mod inventory;
pub mod item;
pub mod logging;
pub mod provider;
pub mod resolver;
pub mod rules;
pub mod tooltip;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigLoader, ConfigPaths, ConfigStore, LoadReport, OptionValue};
pub use data::AttachedData;
pub use effect::StatusEffect;
pub use error::{Error, Result};
pub use inventory::InventoryContext;
pub use item::{InspectedItem, ItemId, ItemKind, ItemStack};
pub use logging::{init_logger, LogLevel, Logger};
pub use provider::{InventoryProvider, ProviderRegistry};
pub use resolver::TooltipResolver;
pub use tooltip::{CompoundTooltip, TextMeasure, TooltipLeaf, TooltipNode, TooltipPayload};
