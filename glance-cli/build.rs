//! Build script for glance-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("glance")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect item tooltips and edit their configuration")
        .long_about(
            "Command-line tool for resolving item tooltips and editing the glance configuration file",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the configuration directory location")
                .value_name("PATH")
                .global(true)
                .env("GLANCE_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("config")
                .about("Read and change configuration options")
                .long_about("Get, set and list options by path, reload or rewrite the file, reset to defaults, or print the file location")
                .subcommands(vec![
                    Command::new("get").about("Print the value of an option"),
                    Command::new("set").about("Change an option and save the configuration"),
                    Command::new("list").about("List every option with its value"),
                    Command::new("reload")
                        .about("Re-read the configuration file and report how it loaded"),
                    Command::new("save").about("Rewrite the configuration file in canonical form"),
                    Command::new("reset")
                        .about("Back up the configuration file and replace it with defaults"),
                    Command::new("path").about("Print the configuration file path"),
                ]),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Report options that would fall back to defaults and unknown keys"),
            Command::new("inspect")
                .about("Resolve the tooltip of an item described in a JSON file")
                .long_about("Run every tooltip rule against an item and print the resulting node tree"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("glance.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
