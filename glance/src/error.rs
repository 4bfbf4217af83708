//! Error types for the glance library.
//!
//! This module provides the error hierarchy for configuration handling and
//! item inspection, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a glance error.
///
/// # Examples
///
/// ```
/// use glance::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the glance library.
///
/// Resolution never fails; these errors come from the configuration file
/// layer and from the control surface addressing options by path.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration document could not be parsed or written.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An item description could not be parsed.
    #[error("item data error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// No configuration option exists at the given path.
    #[error("unknown option: {path}")]
    UnknownOption {
        /// The path that was looked up.
        path: String,
    },

    /// A value of the wrong shape was supplied for an option.
    #[error("invalid value '{value}' for '{path}': expected {expected}")]
    InvalidValue {
        /// The option path.
        path: String,
        /// The rejected value, as given.
        value: String,
        /// What the option accepts.
        expected: String,
    },

    /// The configuration directory could not be created.
    #[error("cannot create configuration directory {}: {source}", path.display())]
    DirectoryCreation {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}
