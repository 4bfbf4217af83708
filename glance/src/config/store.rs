//! The live configuration and its file.
//!
//! [`ConfigStore`] holds the one configuration instance the process reads.
//! Readers take an [`Arc`] snapshot that never changes under them; reloads
//! and updates build a new configuration and swap it in whole.

use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwap;

use crate::config::loader::{ConfigLoader, ConfigPaths, LoadReport};
use crate::config::schema::Config;
use crate::config::tree::OptionValue;
use crate::error::Result;

/// Owns the current configuration and where it is persisted.
///
/// # Examples
///
/// ```
/// use glance::config::{ConfigPaths, ConfigStore, OptionValue};
///
/// let dir = tempfile::tempdir().unwrap();
/// let (store, report) = ConfigStore::open(ConfigPaths::in_dir(dir.path()));
/// assert!(report.saved);
///
/// let before = store.snapshot();
/// store.update("armor", OptionValue::Bool(false)).unwrap();
/// assert!(before.armor);
/// assert!(!store.snapshot().armor);
/// ```
#[derive(Debug)]
pub struct ConfigStore {
    paths: ConfigPaths,
    current: ArcSwap<Config>,
    // One writer of the file at a time
    save_lock: Mutex<()>,
}

impl ConfigStore {
    /// Loads the configuration at `paths`, repairing the file if needed.
    #[must_use]
    pub fn open(paths: ConfigPaths) -> (Self, LoadReport) {
        let (config, report) = ConfigLoader::load(&paths);
        let store = Self {
            paths,
            current: ArcSwap::from(Arc::new(config)),
            save_lock: Mutex::new(()),
        };
        (store, report)
    }

    /// Creates a store around a configuration without touching the disk.
    #[must_use]
    pub fn with_config(paths: ConfigPaths, config: Config) -> Self {
        Self {
            paths,
            current: ArcSwap::from(Arc::new(config)),
            save_lock: Mutex::new(()),
        }
    }

    /// Where the configuration is persisted.
    #[must_use]
    pub const fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// The current configuration. Later swaps do not affect the snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Config> {
        self.current.load_full()
    }

    /// Reloads from disk and swaps the result in.
    pub fn reload(&self) -> LoadReport {
        let (config, report) = ConfigLoader::load(&self.paths);
        self.current.store(Arc::new(config));
        log::info!("configuration reloaded ({})", report.state);
        report
    }

    /// Swaps in a configuration without saving it.
    pub fn replace(&self, config: Config) {
        self.current.store(Arc::new(config));
    }

    /// Writes the current configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written. The in-memory configuration is unaffected.
    pub fn save(&self) -> Result<()> {
        let _guard = self.save_lock.lock().unwrap_or_else(PoisonError::into_inner);
        ConfigLoader::save(&self.paths, &self.snapshot())
    }

    /// Sets one option, swaps the result in and saves it.
    ///
    /// # Errors
    ///
    /// Returns an error if the path or value is invalid, in which case
    /// nothing changes, or if saving fails, in which case the new value
    /// stays in effect in memory.
    pub fn update(&self, path: &str, value: OptionValue) -> Result<()> {
        self.modify(|config| config.set(path, value.clone()))
    }

    /// Like [`update`](Self::update), parsing the value from text.
    ///
    /// # Errors
    ///
    /// As for [`update`](Self::update).
    pub fn update_from_str(&self, path: &str, raw: &str) -> Result<()> {
        self.modify(|config| config.set_from_str(path, raw))
    }

    // `change` may run more than once when writers race; each run starts
    // from the latest configuration.
    fn modify<F>(&self, change: F) -> Result<()>
    where
        F: Fn(&mut Config) -> Result<()>,
    {
        let mut outcome = Ok(());
        self.current.rcu(|current| {
            let mut next = Config::clone(current);
            outcome = change(&mut next);
            if outcome.is_ok() {
                Arc::new(next)
            } else {
                Arc::clone(current)
            }
        });
        outcome?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::LoadState;
    use crate::config::schema::SignTooltipMode;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    fn open(temp_dir: &TempDir) -> ConfigStore {
        ConfigStore::open(ConfigPaths::in_dir(temp_dir.path())).0
    }

    #[test]
    fn test_update_persists() {
        let temp_dir = TempDir::new().unwrap();
        let store = open(&temp_dir);

        store.update_from_str("sign", "fast").unwrap();
        assert_eq!(store.snapshot().sign, SignTooltipMode::Fast);

        let (reopened, report) = ConfigStore::open(ConfigPaths::in_dir(temp_dir.path()));
        assert_eq!(report.state, LoadState::ParsedClean);
        assert_eq!(reopened.snapshot().sign, SignTooltipMode::Fast);
    }

    #[test]
    fn test_invalid_update_changes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let store = open(&temp_dir);
        let before = fs::read_to_string(&store.paths().config_file).unwrap();

        assert!(matches!(
            store.update("armor", OptionValue::Mode("fast".into())),
            Err(Error::InvalidValue { .. })
        ));
        assert!(store.snapshot().armor);
        assert_eq!(fs::read_to_string(&store.paths().config_file).unwrap(), before);
    }

    #[test]
    fn test_snapshot_survives_reload() {
        let temp_dir = TempDir::new().unwrap();
        let store = open(&temp_dir);
        let snapshot = store.snapshot();

        fs::write(&store.paths().config_file, "armor: false\n").unwrap();
        let report = store.reload();

        assert_eq!(report.state, LoadState::ParsedWithDefaults);
        assert!(snapshot.armor);
        assert!(!store.snapshot().armor);
    }

    #[test]
    fn test_concurrent_updates_are_not_lost() {
        let temp_dir = TempDir::new().unwrap();
        let store = open(&temp_dir);
        let paths = [
            "armor",
            "painting",
            "banner_pattern",
            "food/hunger",
            "effects/beacon",
            "containers/campfire",
            "entities/bee/enabled",
            "filled_map/enabled",
        ];

        std::thread::scope(|scope| {
            for path in paths {
                let store = &store;
                scope.spawn(move || store.update(path, OptionValue::Bool(false)).unwrap());
            }
        });

        let config = store.snapshot();
        for path in paths {
            assert_eq!(config.get(path), Some(OptionValue::Bool(false)), "{path}");
        }
        let (reopened, _) = ConfigStore::open(ConfigPaths::in_dir(temp_dir.path()));
        assert_eq!(*reopened.snapshot(), *config);
    }

    #[test]
    fn test_replace_then_save() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::with_config(ConfigPaths::in_dir(temp_dir.path()), Config::default());
        assert!(!store.paths().config_file.exists());

        let mut config = Config::default();
        config.painting = false;
        store.replace(config);
        store.save().unwrap();

        let (reopened, _) = ConfigStore::open(ConfigPaths::in_dir(temp_dir.path()));
        assert!(!reopened.snapshot().painting);
    }
}
