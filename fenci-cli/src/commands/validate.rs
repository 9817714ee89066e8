//! Validate command implementation

use crate::config::CliConfig;
use crate::output::OutputFormat;
use anyhow::{anyhow, Result};
use clap::{Args, ValueEnum};
use fenci_core::SegmentationMode;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match Self::check(&self.config) {
            Ok((mode, format)) => {
                println!("✓ Configuration is valid!");
                println!("  Mode: {mode}");
                println!("  Output format: {format:?}");
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow!("Validation failed: {}", e))
            }
        }
    }

    fn check(path: &std::path::Path) -> Result<(SegmentationMode, OutputFormat)> {
        let config = CliConfig::load(path)?;
        let mode: SegmentationMode = config.analysis.mode.parse()?;
        let format = OutputFormat::from_str(&config.output.default_format, true)
            .map_err(|_| anyhow!("unknown output format '{}'", config.output.default_format))?;

        for dict in &config.analysis.user_dict {
            if !dict.exists() {
                return Err(anyhow!("user dictionary not found: {}", dict.display()));
            }
        }

        Ok((mode, format))
    }
}
