//! Configuration file loading, saving and backup.
//!
//! The configuration lives in a single YAML document. Loading never fails:
//! each leaf that is missing or malformed falls back to its default and is
//! recorded as a [`ValidationMiss`], and a document that cannot be parsed at
//! all yields the defaults. Either way the file on disk is then backed up and
//! rewritten so it holds a complete, valid configuration again.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::config::schema::Config;
use crate::config::tree::LEAF_PATHS;
use crate::error::{Error, Result};

/// File name of the configuration document.
pub const CONFIG_FILE_NAME: &str = "glance.yaml";

/// Directory, inside the configuration directory, holding the backup.
pub const BACKUP_DIR_NAME: &str = "backup";

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "GLANCE_CONFIG_DIR";

/// Returns the default configuration directory, `~/.glance`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_config_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".glance"))
}

/// Where the configuration document and its backup live.
///
/// # Examples
///
/// ```
/// use glance::config::ConfigPaths;
/// use std::path::Path;
///
/// let paths = ConfigPaths::in_dir("/tmp/glance");
/// assert_eq!(paths.config_file, Path::new("/tmp/glance/glance.yaml"));
/// assert_eq!(paths.backup_file, Path::new("/tmp/glance/backup/glance.yaml"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// The configuration directory.
    pub dir: PathBuf,
    /// The configuration document.
    pub config_file: PathBuf,
    /// Where the previous document is copied before being rewritten.
    pub backup_file: PathBuf,
}

impl ConfigPaths {
    /// Paths for a configuration directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            config_file: dir.join(CONFIG_FILE_NAME),
            backup_file: dir.join(BACKUP_DIR_NAME).join(CONFIG_FILE_NAME),
            dir,
        }
    }

    /// Paths for `$GLANCE_CONFIG_DIR` if set, `~/.glance` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset and the home directory
    /// cannot be determined.
    pub fn default_location() -> Result<Self> {
        match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => Ok(Self::in_dir(dir)),
            _ => Ok(Self::in_dir(default_config_dir()?)),
        }
    }
}

/// A leaf that was missing or malformed and fell back to its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMiss {
    /// Path of the leaf.
    pub path: String,
    /// What was wrong with it.
    pub reason: String,
}

impl fmt::Display for ValidationMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// How a load went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No document existed; defaults were applied.
    NotFound,
    /// Every leaf was present and valid.
    ParsedClean,
    /// The document parsed but some leaves fell back to defaults.
    ParsedWithDefaults,
    /// The document could not be read or parsed; defaults were applied.
    ParseFailed,
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotFound => "not found",
            Self::ParsedClean => "parsed cleanly",
            Self::ParsedWithDefaults => "parsed with defaults",
            Self::ParseFailed => "parse failed",
        };
        f.write_str(name)
    }
}

/// The outcome of [`ConfigLoader::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// How parsing went.
    pub state: LoadState,
    /// Leaves that fell back to defaults.
    pub misses: Vec<ValidationMiss>,
    /// Whether the previous document was copied to the backup path.
    pub backed_up: bool,
    /// Whether the document was rewritten.
    pub saved: bool,
    /// Why the document could not be parsed, or why it could not be saved.
    pub error: Option<String>,
}

impl LoadReport {
    fn new(state: LoadState) -> Self {
        Self {
            state,
            misses: Vec::new(),
            backed_up: false,
            saved: false,
            error: None,
        }
    }

    /// Returns `true` if the document on disk did not match the loaded
    /// configuration and had to be repaired.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        matches!(
            self.state,
            LoadState::ParsedWithDefaults | LoadState::ParseFailed
        )
    }
}

/// Reads and writes configuration documents.
///
/// # Examples
///
/// ```
/// use glance::config::ConfigLoader;
///
/// let (config, misses) = ConfigLoader::parse_str("armor: false\n").unwrap();
/// assert!(!config.armor);
/// // Everything else fell back to defaults.
/// assert!(misses.iter().any(|miss| miss.path == "painting"));
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parses a document, filling missing or malformed leaves from defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not YAML or its root is not a mapping.
    pub fn parse_str(text: &str) -> Result<(Config, Vec<ValidationMiss>)> {
        let document: Value = serde_yaml::from_str(text)?;
        Self::from_document(&document)
    }

    /// Reads every leaf from a parsed document.
    ///
    /// Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is not a mapping.
    pub fn from_document(document: &Value) -> Result<(Config, Vec<ValidationMiss>)> {
        if !document.is_mapping() {
            return Err(Error::Validation {
                field: "<root>".into(),
                message: "configuration document must be a mapping".into(),
            });
        }

        let mut config = Config::default();
        let mut misses = Vec::new();

        for &path in LEAF_PATHS {
            if let Some(miss) = Self::read_leaf(document, path, &mut config) {
                log::warn!("config option {miss}; using default");
                misses.push(miss);
            }
        }

        Ok((config, misses))
    }

    pub(crate) fn read_leaf(
        document: &Value,
        path: &str,
        config: &mut Config,
    ) -> Option<ValidationMiss> {
        let miss = |reason: String| ValidationMiss {
            path: path.to_string(),
            reason,
        };

        let Some(node) = lookup(document, path) else {
            return Some(miss("missing".to_string()));
        };
        let kind = config.kind_of(path)?;
        let Some(value) = kind.from_yaml(node) else {
            return Some(miss(format!("expected {kind}")));
        };
        config
            .set(path, value)
            .err()
            .map(|e| miss(e.to_string()))
    }

    /// Serializes a configuration to its canonical document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_document(config: &Config) -> Result<String> {
        Ok(serde_yaml::to_string(config)?)
    }

    /// Loads the configuration, repairing the document on disk if needed.
    ///
    /// This never fails. A missing document is created from defaults; a
    /// document with missing or malformed leaves is backed up and rewritten.
    pub fn load(paths: &ConfigPaths) -> (Config, LoadReport) {
        let text = match fs::read_to_string(&paths.config_file) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!(
                    "no configuration at {}; writing defaults",
                    paths.config_file.display()
                );
                let config = Config::default();
                let mut report = LoadReport::new(LoadState::NotFound);
                Self::record_save(paths, &config, &mut report);
                return (config, report);
            }
            Err(e) => {
                log::warn!(
                    "failed to read configuration {}: {e}",
                    paths.config_file.display()
                );
                return Self::recover(paths, e.to_string());
            }
        };

        match Self::parse_str(&text) {
            Ok((config, misses)) if misses.is_empty() => {
                log::debug!("loaded configuration from {}", paths.config_file.display());
                (config, LoadReport::new(LoadState::ParsedClean))
            }
            Ok((config, misses)) => {
                let mut report = LoadReport::new(LoadState::ParsedWithDefaults);
                report.misses = misses;
                report.backed_up = Self::backup(paths);
                Self::record_save(paths, &config, &mut report);
                (config, report)
            }
            Err(e) => {
                log::warn!(
                    "failed to parse configuration {}: {e}",
                    paths.config_file.display()
                );
                Self::recover(paths, e.to_string())
            }
        }
    }

    fn recover(paths: &ConfigPaths, error: String) -> (Config, LoadReport) {
        let config = Config::default();
        let mut report = LoadReport::new(LoadState::ParseFailed);
        report.error = Some(error);
        report.backed_up = Self::backup(paths);
        Self::record_save(paths, &config, &mut report);
        (config, report)
    }

    fn record_save(paths: &ConfigPaths, config: &Config, report: &mut LoadReport) {
        match Self::save(paths, config) {
            Ok(()) => report.saved = true,
            Err(e) => {
                if report.error.is_none() {
                    report.error = Some(e.to_string());
                }
            }
        }
    }

    /// Copies the document to the backup path, overwriting any older backup.
    ///
    /// Returns `true` on success. Failures are logged, not returned.
    pub fn backup(paths: &ConfigPaths) -> bool {
        if let Some(dir) = paths.backup_file.parent() {
            if let Err(e) = fs::create_dir_all(dir) {
                log::warn!("failed to create backup directory {}: {e}", dir.display());
                return false;
            }
        }
        match fs::copy(&paths.config_file, &paths.backup_file) {
            Ok(_) => {
                log::info!(
                    "backed up configuration to {}",
                    paths.backup_file.display()
                );
                true
            }
            Err(e) => {
                log::warn!(
                    "failed to back up configuration {}: {e}",
                    paths.config_file.display()
                );
                false
            }
        }
    }

    /// Backs up the document, then saves `config` over it.
    ///
    /// A failed backup is logged and the save proceeds.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails.
    pub fn backup_and_restore(paths: &ConfigPaths, config: &Config) -> Result<()> {
        Self::backup(paths);
        Self::save(paths, config)
    }

    /// Writes `config` as the document, creating the directory if needed.
    ///
    /// The document is written to a temporary file first and renamed into
    /// place, so readers never see a partial document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryCreation`] if the directory cannot be
    /// created, or an I/O error if the document cannot be written.
    pub fn save(paths: &ConfigPaths, config: &Config) -> Result<()> {
        let dir = paths
            .config_file
            .parent()
            .map_or_else(|| paths.dir.clone(), Path::to_path_buf);
        fs::create_dir_all(&dir).map_err(|source| {
            log::warn!(
                "failed to create configuration directory {}: {source}",
                dir.display()
            );
            Error::DirectoryCreation {
                path: dir.clone(),
                source,
            }
        })?;

        let document = Self::to_document(config)?;
        let temp_path = paths.config_file.with_extension("yaml.tmp");
        if let Err(e) = fs::write(&temp_path, document)
            .and_then(|()| fs::rename(&temp_path, &paths.config_file))
        {
            // No partial document is left behind
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        log::debug!("saved configuration to {}", paths.config_file.display());
        Ok(())
    }
}

/// Finds the node at a slash-joined path.
pub(crate) fn lookup<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('/')
        .try_fold(document, |node, segment| node.get(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{SaturationTooltipMode, SignTooltipMode};
    use tempfile::TempDir;

    fn paths(temp_dir: &TempDir) -> ConfigPaths {
        ConfigPaths::in_dir(temp_dir.path().join("config"))
    }

    #[test]
    fn test_parse_full_document_is_clean() {
        let document = ConfigLoader::to_document(&Config::default()).unwrap();
        let (config, misses) = ConfigLoader::parse_str(&document).unwrap();
        assert!(misses.is_empty(), "unexpected misses: {misses:?}");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_round_trip_modified() {
        let mut config = Config::default();
        config.sign = SignTooltipMode::Fast;
        config.containers.shulker_box.color = false;
        config.entities.bee.show_honey_level = false;
        config.food.saturation = SaturationTooltipMode::Separated;

        let document = ConfigLoader::to_document(&config).unwrap();
        let (parsed, misses) = ConfigLoader::parse_str(&document).unwrap();
        assert!(misses.is_empty());
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_flattened_document_shape() {
        let document = ConfigLoader::to_document(&Config::default()).unwrap();
        let value: Value = serde_yaml::from_str(&document).unwrap();
        assert_eq!(
            lookup(&value, "containers/shulker_box/compact"),
            Some(&Value::Bool(false))
        );
        assert!(lookup(&value, "containers/shulker_box/storage").is_none());
    }

    #[test]
    fn test_malformed_leaf_falls_back() {
        let text = "armor: false\nsign: sparkly\nentities:\n  pufferfish_puff_state: many\n";
        let (config, misses) = ConfigLoader::parse_str(text).unwrap();

        assert!(!config.armor);
        assert_eq!(config.sign, SignTooltipMode::Fancy);
        assert_eq!(config.entities.pufferfish_puff_state.get(), 2);

        let sign = misses.iter().find(|m| m.path == "sign").unwrap();
        assert_eq!(sign.reason, "expected one of disabled, fast, fancy");
        assert!(misses
            .iter()
            .any(|m| m.path == "entities/pufferfish_puff_state"));
        assert!(!misses.iter().any(|m| m.path == "armor"));
    }

    #[test]
    fn test_int_leaf_clamped_without_miss() {
        let mut document: Value =
            serde_yaml::from_str(&ConfigLoader::to_document(&Config::default()).unwrap()).unwrap();
        document["entities"]["pufferfish_puff_state"] = Value::from(40);

        let (config, misses) = ConfigLoader::from_document(&document).unwrap();
        assert!(misses.is_empty());
        assert_eq!(config.entities.pufferfish_puff_state.get(), 2);
    }

    #[test]
    fn test_non_mapping_root_rejected() {
        assert!(ConfigLoader::parse_str("- just\n- a list\n").is_err());
        assert!(ConfigLoader::parse_str("").is_err());
        assert!(ConfigLoader::parse_str("armor: [unclosed").is_err());
    }

    #[test]
    fn test_load_missing_file_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths(&temp_dir);

        let (config, report) = ConfigLoader::load(&paths);
        assert_eq!(config, Config::default());
        assert_eq!(report.state, LoadState::NotFound);
        assert!(!report.is_dirty());
        assert!(report.saved);
        assert!(!report.backed_up);
        assert!(paths.config_file.exists());
        assert!(!paths.backup_file.exists());
    }

    #[test]
    fn test_load_clean_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths(&temp_dir);
        ConfigLoader::save(&paths, &Config::default()).unwrap();

        let (_, report) = ConfigLoader::load(&paths);
        assert_eq!(report.state, LoadState::ParsedClean);
        assert!(!report.saved);
        assert!(!paths.backup_file.exists());
    }

    #[test]
    fn test_load_partial_corruption() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths(&temp_dir);
        fs::create_dir_all(&paths.dir).unwrap();
        let original = "armor: false\nfood:\n  hunger: 3\n";
        fs::write(&paths.config_file, original).unwrap();

        let (config, report) = ConfigLoader::load(&paths);
        assert!(!config.armor);
        assert!(config.food.hunger);
        assert_eq!(report.state, LoadState::ParsedWithDefaults);
        assert!(report.is_dirty());
        assert!(report.misses.iter().any(|m| m.path == "food/hunger"));
        assert!(report.backed_up);
        assert!(report.saved);

        assert_eq!(fs::read_to_string(&paths.backup_file).unwrap(), original);
        let (reloaded, report) = ConfigLoader::load(&paths);
        assert_eq!(report.state, LoadState::ParsedClean);
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_load_unparseable_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths(&temp_dir);
        fs::create_dir_all(&paths.dir).unwrap();
        fs::write(&paths.config_file, "{{{ not yaml").unwrap();

        let (config, report) = ConfigLoader::load(&paths);
        assert_eq!(config, Config::default());
        assert_eq!(report.state, LoadState::ParseFailed);
        assert!(report.error.is_some());
        assert!(report.backed_up);
        assert!(report.saved);
        assert_eq!(
            fs::read_to_string(&paths.backup_file).unwrap(),
            "{{{ not yaml"
        );
    }

    #[test]
    fn test_save_fails_when_directory_cannot_be_created() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();
        let paths = ConfigPaths::in_dir(blocker.join("config"));

        let err = ConfigLoader::save(&paths, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::DirectoryCreation { .. }));
    }

    #[test]
    fn test_failed_save_removes_temporary_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::in_dir(temp_dir.path());
        // A non-empty directory where the document belongs blocks the rename
        fs::create_dir_all(&paths.config_file).unwrap();
        fs::write(paths.config_file.join("keep"), "x").unwrap();

        let err = ConfigLoader::save(&paths, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!paths.config_file.with_extension("yaml.tmp").exists());
        assert!(paths.config_file.join("keep").exists());
    }

    #[test]
    fn test_load_with_uncreatable_directory_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();
        let paths = ConfigPaths::in_dir(blocker.join("config"));

        let (config, report) = ConfigLoader::load(&paths);
        assert_eq!(config, Config::default());
        assert!(!report.saved);
        assert!(report.error.is_some());
    }

    #[test]
    fn test_backup_and_restore_overwrites_backup() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths(&temp_dir);
        fs::create_dir_all(paths.backup_file.parent().unwrap()).unwrap();
        fs::write(&paths.backup_file, "old backup").unwrap();
        fs::write(&paths.config_file, "armor: false\n").unwrap();

        ConfigLoader::backup_and_restore(&paths, &Config::default()).unwrap();
        assert_eq!(
            fs::read_to_string(&paths.backup_file).unwrap(),
            "armor: false\n"
        );
        let (config, _) = ConfigLoader::parse_str(&fs::read_to_string(&paths.config_file).unwrap()).unwrap();
        assert!(config.armor);
    }

    #[test]
    fn test_backup_without_document_still_saves() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths(&temp_dir);

        assert!(!ConfigLoader::backup(&paths));
        ConfigLoader::backup_and_restore(&paths, &Config::default()).unwrap();
        assert!(paths.config_file.exists());
    }

    #[test]
    fn test_lookup() {
        let value: Value = serde_yaml::from_str("a:\n  b:\n    c: 1\n").unwrap();
        assert_eq!(lookup(&value, "a/b/c"), Some(&Value::from(1)));
        assert!(lookup(&value, "a/x").is_none());
        assert!(lookup(&value, "a/b/c/d").is_none());
    }
}
