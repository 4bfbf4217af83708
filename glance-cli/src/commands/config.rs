//! Config command implementation.
//!
//! This module implements the `config` command and its subcommands, which
//! read and change options by their slash-separated path, mirroring the
//! nesting of the configuration file.

use crate::error::CliError;
use crate::utils::{open_store, resolve_config_paths, GlobalOptions};
use clap::{Args, Subcommand, ValueEnum};
use glance::config::ConfigLoader;
use glance::Config;
use std::collections::BTreeMap;

/// Read and change configuration options.
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the value of an option
    Get {
        /// Option path, e.g. containers/shulker_box/color
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Change an option and save the configuration
    Set {
        /// Option path, e.g. containers/shulker_box/color
        #[arg(value_name = "PATH")]
        path: String,

        /// New value
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// List every option with its value
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "table", ignore_case = true)]
        format: ListFormat,

        /// Also show what each option accepts
        #[arg(long)]
        show_kinds: bool,
    },

    /// Re-read the configuration file and report how it loaded
    Reload,

    /// Rewrite the configuration file in canonical form
    Save,

    /// Back up the configuration file and replace it with defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Output format for `config list`.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ListFormat {
    /// Tab-separated `path value` lines
    Table,
    /// JSON object keyed by path
    Json,
    /// The YAML document as it is saved
    Yaml,
}

impl ConfigCommand {
    /// Execute the config command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self.action {
            ConfigAction::Get { path } => {
                let store = open_store(global)?;
                let value = store.snapshot().get(&path).ok_or_else(|| {
                    CliError::InvalidArguments(format!("Unknown option: {path}"))
                })?;
                println!("{value}");
                Ok(())
            }
            ConfigAction::Set { path, value } => {
                let store = open_store(global)?;
                store.update_from_str(&path, &value)?;
                if !global.quiet {
                    eprintln!("Set {path} to {value}");
                }
                Ok(())
            }
            ConfigAction::List { format, show_kinds } => {
                let store = open_store(global)?;
                print_options(&store.snapshot(), format, show_kinds)
            }
            ConfigAction::Reload => {
                let store = open_store(global)?;
                let report = store.reload();
                println!("{}", report.state);
                for miss in &report.misses {
                    println!("  defaulted {miss}");
                }
                Ok(())
            }
            ConfigAction::Save => {
                let store = open_store(global)?;
                store.save()?;
                if !global.quiet {
                    eprintln!("Saved {}", store.paths().config_file.display());
                }
                Ok(())
            }
            ConfigAction::Reset => {
                let paths = resolve_config_paths(global)?;
                ConfigLoader::backup_and_restore(&paths, &Config::default())?;
                if !global.quiet {
                    eprintln!(
                        "Restored defaults in {} (previous file in {})",
                        paths.config_file.display(),
                        paths.backup_file.display()
                    );
                }
                Ok(())
            }
            ConfigAction::Path => {
                let paths = resolve_config_paths(global)?;
                println!("{}", paths.config_file.display());
                Ok(())
            }
        }
    }
}

fn print_options(config: &Config, format: ListFormat, show_kinds: bool) -> Result<(), CliError> {
    match format {
        ListFormat::Table => {
            for (path, value) in config.leaves() {
                if show_kinds {
                    let kind = config
                        .kind_of(path)
                        .map(|kind| kind.to_string())
                        .unwrap_or_default();
                    println!("{path}\t{value}\t{kind}");
                } else {
                    println!("{path}\t{value}");
                }
            }
        }
        ListFormat::Json => {
            let map: BTreeMap<&str, _> = config.leaves().into_iter().collect();
            let json = serde_json::to_string_pretty(&map).map_err(std::io::Error::from)?;
            println!("{json}");
        }
        ListFormat::Yaml => {
            print!("{}", ConfigLoader::to_document(config)?);
        }
    }
    Ok(())
}
