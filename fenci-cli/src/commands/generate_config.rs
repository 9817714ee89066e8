//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to pick a mode or add dictionaries");
        println!("2. Validate your configuration:");
        println!("   fenci validate -c {}", self.output.display());
        println!("3. Use it for tokenizing:");
        println!("   fenci tokenize -i input.txt -c {}", self.output.display());

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        r#"# fenci configuration

[analysis]
# Segmentation mode: "index" (single best path) or "search" (adds sub-words)
mode = "index"

# Discover words missing from the dictionary
hmm = true

# Extra dictionaries, one "word [freq] [tag]" entry per line
user_dict = [
    # "dicts/finance.txt",
]

[output]
# text, json or markdown
default_format = "text"

# Pretty print JSON output
pretty_json = true
"#
    }
}
