//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use genetag_core::DEFAULT_FILTER_PATTERN;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "genetag.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Point [input] at your documents and [chunker] at a gene lexicon");
        println!("2. Run the evaluation:");
        println!("   genetag run --config {}", self.output.display());

        Ok(())
    }
}

/// Template configuration content
pub fn generate_template() -> String {
    format!(
        r#"# genetag configuration

[input]
# Directory holding the documents; each line is "<id> <sentence>"
directory = "data"
# Descend into subdirectories
recursive = false
# Glob matched against file names
file_pattern = "*.in"
# Any label known to the WHATWG Encoding Standard
encoding = "utf-8"
# Language tag attached to every document (optional)
# language = "en"

[chunker]
# Gene lexicon: one entry per line, '#' starts a comment
lexicon = "genes.txt"
case_sensitive = true

[filter]
# Annotations whose name matches this regex are dropped
pattern = '{DEFAULT_FILTER_PATTERN}'

[evaluation]
# Gold standard: one "<id>|<begin> <end>|<name>" entry per line
gold_file = "data/sample.out"
# Report file; one block is appended per document
output_file = "out/report.txt"
"#
    )
}
