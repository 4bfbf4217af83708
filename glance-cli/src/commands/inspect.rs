//! Inspect command implementation.
//!
//! This module implements the `inspect` command, which reads an item
//! description, resolves its tooltip against the current configuration and
//! prints the resulting node tree.

use crate::error::CliError;
use crate::utils::{open_store, GlobalOptions};
use clap::{Args, ValueEnum};
use glance::{InspectedItem, ProviderRegistry, TooltipNode, TooltipResolver};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

/// Resolve the tooltip of an item.
#[derive(Args)]
pub struct InspectCommand {
    /// Item description (JSON); `-` reads standard input
    #[arg(value_name = "ITEM_PATH")]
    pub item_path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "tree", ignore_case = true)]
    pub format: InspectFormat,

    /// Include the lines shown with advanced tooltips
    #[arg(long)]
    pub advanced: bool,

    /// Override an option for this run only (PATH=VALUE, repeatable)
    #[arg(long = "set", value_name = "PATH=VALUE")]
    pub overrides: Vec<String>,
}

/// Output format for the inspect command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum InspectFormat {
    /// Indented node tree with sizes (human-readable)
    Tree,
    /// JSON format
    Json,
}

/// JSON output of the inspect command.
#[derive(Serialize)]
struct InspectOutput<'a> {
    rules: Vec<&'static str>,
    tooltip: Option<&'a TooltipNode>,
    lines: Vec<String>,
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Read the item
        let text = if self.item_path.as_os_str() == "-" {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            std::fs::read_to_string(&self.item_path)?
        };
        let item = InspectedItem::from_json(&text)?;

        // 2. Load configuration and apply overrides
        let store = open_store(global)?;
        let mut config = glance::Config::clone(&store.snapshot());
        for entry in &self.overrides {
            let (path, value) = entry.split_once('=').ok_or_else(|| {
                CliError::InvalidArguments(format!("Expected PATH=VALUE, got '{entry}'"))
            })?;
            config.set_from_str(path.trim(), value.trim())?;
        }

        // 3. Resolve
        let providers = ProviderRegistry::with_defaults();
        let resolver = TooltipResolver::new(&providers);
        let (rules, nodes): (Vec<&'static str>, Vec<TooltipNode>) =
            resolver.resolve_named(&item, &config).into_iter().unzip();
        let tooltip = TooltipNode::from_nodes(nodes);
        let lines = resolver.extra_lines(&item, &config, self.advanced);

        // 4. Print
        match self.format {
            InspectFormat::Json => {
                let output = InspectOutput {
                    rules,
                    tooltip: tooltip.as_ref(),
                    lines,
                };
                let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::from)?;
                println!("{json}");
            }
            InspectFormat::Tree => {
                match &tooltip {
                    Some(node) => {
                        if global.verbose {
                            eprintln!("Rules applied: {}", rules.join(", "));
                        }
                        print_tree(node, 0);
                    }
                    None => {
                        if !global.quiet {
                            println!("(no tooltip)");
                        }
                    }
                }
                for line in &lines {
                    println!("{line}");
                }
            }
        }

        Ok(())
    }
}

fn print_tree(node: &TooltipNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        TooltipNode::Leaf(leaf) => {
            println!(
                "{indent}{} {}x{}",
                leaf.payload().kind(),
                leaf.width(),
                leaf.height()
            );
        }
        TooltipNode::Compound(compound) => {
            println!(
                "{indent}compound {}x{}",
                compound.width(),
                compound.height()
            );
            for child in compound.children() {
                print_tree(child, depth + 1);
            }
        }
    }
}
