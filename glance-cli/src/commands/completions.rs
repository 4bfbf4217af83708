//! Shell completion generation command.
//!
//! Completion scripts go to stdout; installation hints go to stderr so the
//! output can be redirected straight into a completions file.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "glance";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Where the script for `shell` is usually installed.
fn install_hint(shell: Shell) -> &'static [&'static str] {
    match shell {
        Shell::Bash => &[
            "glance completions bash > ~/.local/share/bash-completion/completions/glance",
            "or add to ~/.bashrc: eval \"$(glance completions bash)\"",
        ],
        Shell::Zsh => &[
            "glance completions zsh > ~/.zsh/completions/_glance",
            "with ~/.zsh/completions in your $fpath",
        ],
        Shell::Fish => &["glance completions fish > ~/.config/fish/completions/glance.fish"],
        Shell::PowerShell => &["glance completions powershell | Out-String | Invoke-Expression"],
        _ => &[],
    }
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            for hint in install_hint(self.shell) {
                eprintln!("# {hint}");
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
