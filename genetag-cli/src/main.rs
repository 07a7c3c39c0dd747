//! genetag command-line entry point

use clap::Parser;
use genetag_cli::commands::Commands;

/// Gene name annotation and gold-standard scoring
#[derive(Debug, Parser)]
#[command(name = "genetag", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
