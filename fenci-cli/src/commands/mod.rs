//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use fenci_core::SegmentationMode;

pub mod generate_config;
pub mod tokenize;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment text into a positioned token stream
    Tokenize(tokenize::TokenizeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tokenize(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List segmentation modes
    Modes,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the listing to stdout
    pub fn execute(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }

    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Modes => {
                let mut lines = vec!["Segmentation modes:".to_string()];
                lines.extend(
                    SegmentationMode::ALL
                        .iter()
                        .map(|mode| format!("  {:<8} {}", mode.name(), mode.description())),
                );
                lines
            }
            ListCommands::Formats => {
                let mut lines = vec!["Output formats:".to_string()];
                lines.extend(OutputFormat::value_variants().iter().filter_map(|format| {
                    let value = format.to_possible_value()?;
                    let help = value.get_help().map(|h| h.to_string()).unwrap_or_default();
                    Some(format!("  {:<8} {}", value.get_name(), help))
                }));
                lines
            }
        }
    }
}
