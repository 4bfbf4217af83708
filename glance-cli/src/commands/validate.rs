//! Command to validate a glance configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use glance::config::ConfigValidator;
use std::path::PathBuf;

/// Validate a glance configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,

    /// Treat unknown keys as errors
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        // 2. Parse and check every leaf
        let report = match ConfigValidator::validate_file(&self.config_path) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        // 3. Report
        for miss in &report.misses {
            eprintln!("Would be defaulted: {miss}");
        }
        for key in &report.unknown_keys {
            eprintln!("Unknown key: {key}");
        }

        let failed = !report.misses.is_empty() || (self.strict && !report.unknown_keys.is_empty());
        if failed {
            return Err(CliError::SemanticFailure(
                "Configuration validation failed".to_string(),
            ));
        }

        if !global.quiet {
            println!("Configuration is valid");
        }
        Ok(())
    }
}
