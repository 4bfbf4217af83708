//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `config`: Read and change configuration options
//! - `validate`: Validate a configuration file
//! - `inspect`: Resolve the tooltip of an item
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod config;
pub mod inspect;
pub mod validate;

pub use completions::CompletionsCommand;
pub use config::ConfigCommand;
pub use inspect::InspectCommand;
pub use validate::ValidateCommand;
