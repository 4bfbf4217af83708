//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! locating the configuration directory, opening the configuration store
//! and reporting how the document was loaded.

use crate::error::CliError;
use glance::config::{ConfigPaths, ConfigStore, LoadReport, LoadState};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the configuration directory location.
    pub config_dir: Option<PathBuf>,
}

/// Resolve configuration paths from global options.
///
/// Priority: `--config-dir` (or `GLANCE_CONFIG_DIR`, via clap) > `~/.glance`.
pub fn resolve_config_paths(global: &GlobalOptions) -> Result<ConfigPaths, CliError> {
    match &global.config_dir {
        Some(dir) => Ok(ConfigPaths::in_dir(dir)),
        None => ConfigPaths::default_location().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Open the configuration store, repairing the document if needed.
///
/// Repairs are reported on stderr unless `--quiet` is set.
pub fn open_store(global: &GlobalOptions) -> Result<ConfigStore, CliError> {
    let paths = resolve_config_paths(global)?;
    let (store, report) = ConfigStore::open(paths);
    print_load_report(&report, store.paths(), global);
    Ok(store)
}

/// Describe a load report on stderr.
pub fn print_load_report(report: &LoadReport, paths: &ConfigPaths, global: &GlobalOptions) {
    if global.quiet {
        return;
    }

    match report.state {
        LoadState::ParsedClean => {}
        LoadState::NotFound => {
            if report.saved {
                eprintln!(
                    "Created default configuration at {}",
                    paths.config_file.display()
                );
            }
        }
        LoadState::ParsedWithDefaults => {
            eprintln!(
                "Repaired {} option(s) in {}",
                report.misses.len(),
                paths.config_file.display()
            );
            if global.verbose {
                for miss in &report.misses {
                    eprintln!("  {miss}");
                }
            }
        }
        LoadState::ParseFailed => {
            eprintln!(
                "Could not parse {}; using defaults",
                paths.config_file.display()
            );
        }
    }

    if report.backed_up {
        eprintln!("Previous file saved to {}", paths.backup_file.display());
    }
    if let Some(error) = &report.error {
        if report.state != LoadState::ParseFailed || global.verbose {
            eprintln!("Warning: {error}");
        }
    }
}
