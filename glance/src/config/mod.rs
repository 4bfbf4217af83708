//! Configuration system for glance.
//!
//! The configuration is a fixed tree of options: flags, named modes and one
//! bounded integer. It provides:
//! - A typed schema with compiled-in defaults ([`Config`])
//! - Path-addressed access to every leaf (`containers/shulker_box/color`)
//! - A YAML document that repairs itself when leaves are missing or malformed
//! - A store that swaps whole snapshots on reload
//!
//! # Examples
//!
//! Reading and changing options by path:
//!
//! ```
//! use glance::config::{Config, OptionValue};
//!
//! let mut config = Config::default();
//! config.set_from_str("containers/storage/compact", "true").unwrap();
//! assert!(config.containers.storage.compact);
//! assert_eq!(config.get("jukebox"), Some(OptionValue::Mode("fancy".into())));
//! ```
//!
//! Loading from the default location:
//!
//! ```no_run
//! use glance::config::{ConfigPaths, ConfigStore};
//!
//! let paths = ConfigPaths::default_location().unwrap();
//! let (store, report) = ConfigStore::open(paths);
//! for miss in &report.misses {
//!     println!("defaulted {miss}");
//! }
//! let config = store.snapshot();
//! println!("armor tooltips: {}", config.armor);
//! ```

pub mod loader;
pub mod schema;
pub mod store;
pub mod tree;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use loader::{
    default_config_dir, ConfigLoader, ConfigPaths, LoadReport, LoadState, ValidationMiss,
    CONFIG_DIR_ENV, CONFIG_FILE_NAME,
};
pub use schema::{
    AdvancedTooltipsConfig, BeeEntityConfig, ChiseledBookshelfConfig, Config, ContainersConfig,
    EffectsConfig, EntitiesConfig, EntityConfig, FilledMapConfig, FoodConfig, HiddenEffectMode,
    JukeboxTooltipMode, OptionMode, PuffState, SaturationTooltipMode, ShulkerBoxConfig,
    SignTooltipMode, StorageContainerConfig,
};
pub use store::ConfigStore;
pub use tree::{OptionKind, OptionValue, LEAF_PATHS};
pub use validator::{ConfigValidator, ValidationReport};
