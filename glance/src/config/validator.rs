//! Configuration document validation.
//!
//! Loading repairs a document silently; validation reports what is wrong
//! with one without changing anything. Besides the leaves that would fall
//! back to defaults it lists keys that no option reads, which the loader
//! ignores and which are usually typos.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::config::loader::{ConfigLoader, ValidationMiss};
use crate::config::schema::Config;
use crate::config::tree::LEAF_PATHS;
use crate::error::{Error, Result};

/// What validation found in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Leaves that are missing or malformed.
    pub misses: Vec<ValidationMiss>,
    /// Keys that no option reads, as slash-joined paths.
    pub unknown_keys: Vec<String>,
}

impl ValidationReport {
    /// Returns `true` if the document is complete and every key is known.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.misses.is_empty() && self.unknown_keys.is_empty()
    }
}

/// Validates configuration documents.
///
/// # Examples
///
/// ```
/// use glance::config::{Config, ConfigLoader, ConfigValidator};
///
/// let document = ConfigLoader::to_document(&Config::default()).unwrap();
/// assert!(ConfigValidator::validate_str(&document).unwrap().is_clean());
///
/// let report = ConfigValidator::validate_str("armour: true\n").unwrap();
/// assert_eq!(report.unknown_keys, vec!["armour".to_string()]);
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a document given as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not YAML or its root is not a mapping.
    pub fn validate_str(text: &str) -> Result<ValidationReport> {
        let document: Value = serde_yaml::from_str(text)?;
        Self::validate_document(&document)
    }

    /// Validates the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn validate_file(path: &Path) -> Result<ValidationReport> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;
        Self::validate_str(&contents)
    }

    /// Validates a parsed document.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is not a mapping.
    pub fn validate_document(document: &Value) -> Result<ValidationReport> {
        let Value::Mapping(root) = document else {
            return Err(Error::Validation {
                field: "<root>".into(),
                message: "configuration document must be a mapping".into(),
            });
        };

        let mut scratch = Config::default();
        let misses = LEAF_PATHS
            .iter()
            .filter_map(|path| ConfigLoader::read_leaf(document, path, &mut scratch))
            .collect();

        let mut unknown_keys = Vec::new();
        Self::collect_unknown("", root, &mut unknown_keys);

        Ok(ValidationReport {
            misses,
            unknown_keys,
        })
    }

    fn collect_unknown(prefix: &str, mapping: &serde_yaml::Mapping, unknown: &mut Vec<String>) {
        for (key, value) in mapping {
            let name = match key {
                Value::String(name) => name.clone(),
                other => serde_yaml::to_string(other)
                    .map_or_else(|_| "?".to_string(), |s| s.trim().to_string()),
            };
            let path = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            };

            if Self::is_leaf(&path) {
                continue;
            }
            match value {
                Value::Mapping(children) if Self::is_group(&path) => {
                    Self::collect_unknown(&path, children, unknown);
                }
                _ => unknown.push(path),
            }
        }
    }

    fn is_leaf(path: &str) -> bool {
        LEAF_PATHS.contains(&path)
    }

    fn is_group(path: &str) -> bool {
        LEAF_PATHS.iter().any(|leaf| {
            leaf.strip_prefix(path)
                .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn full_document() -> Value {
        serde_yaml::from_str(&ConfigLoader::to_document(&Config::default()).unwrap()).unwrap()
    }

    #[test]
    fn test_default_document_is_clean() {
        let report = ConfigValidator::validate_document(&full_document()).unwrap();
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn test_nested_unknown_key() {
        let mut document = full_document();
        document["containers"]["shulker_box"]["colour"] = Value::Bool(true);
        document["entities"]["bee"]["wings"] = Value::Bool(true);

        let report = ConfigValidator::validate_document(&document).unwrap();
        assert!(report.misses.is_empty());
        assert_eq!(
            report.unknown_keys,
            vec![
                "containers/shulker_box/colour".to_string(),
                "entities/bee/wings".to_string()
            ]
        );
    }

    #[test]
    fn test_group_given_as_scalar() {
        let mut document = full_document();
        document["food"] = Value::Bool(false);

        let report = ConfigValidator::validate_document(&document).unwrap();
        assert_eq!(report.unknown_keys, vec!["food".to_string()]);
        let paths: Vec<&str> = report.misses.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, vec!["food/hunger", "food/saturation"]);
    }

    #[test]
    fn test_prefix_is_not_a_group() {
        assert!(ConfigValidator::is_group("containers"));
        assert!(ConfigValidator::is_group("entities/bee"));
        assert!(!ConfigValidator::is_group("entities/be"));
        assert!(!ConfigValidator::is_group("armor"));
    }

    #[test]
    fn test_wrong_types_reported() {
        let mut document = full_document();
        document["armor"] = Value::String("yes".into());
        document["food"]["saturation"] = Value::String("both".into());

        let report = ConfigValidator::validate_document(&document).unwrap();
        let paths: Vec<&str> = report.misses.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, vec!["armor", "food/saturation"]);
        assert!(report.unknown_keys.is_empty());
    }

    #[test]
    fn test_non_mapping_root() {
        assert!(matches!(
            ConfigValidator::validate_str("42"),
            Err(Error::Validation { .. })
        ));
    }

    #[test]
    fn test_validate_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = ConfigValidator::validate_file(&temp_dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_validate_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("glance.yaml");
        fs::write(&path, "sign: fast\n").unwrap();

        let report = ConfigValidator::validate_file(&path).unwrap();
        assert!(!report.is_clean());
        assert!(!report.misses.iter().any(|m| m.path == "sign"));
    }
}
