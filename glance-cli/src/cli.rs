//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ConfigCommand, InspectCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting item tooltips and editing their configuration.
#[derive(Parser)]
#[command(name = "glance")]
#[command(version, about = "Inspect item tooltips and edit their configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the configuration directory location
    #[arg(long, value_name = "PATH", global = true, env = "GLANCE_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Read and change configuration options
    Config(ConfigCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Resolve the tooltip of an item described in a JSON file
    Inspect(InspectCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
