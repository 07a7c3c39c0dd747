//! CLI command implementations

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use genetag_core::DictionaryChunker;
use std::path::PathBuf;

pub mod annotate;
pub mod generate_config;
pub mod run;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Annotate every document, score it against the gold file and write reports
    Run(run::RunArgs),

    /// Print reconciled annotations without scoring them
    Annotate(annotate::AnnotateArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Run(args) => args.execute(),
            Commands::Annotate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Options shared by the commands that read a document collection
///
/// Flags given here take precedence over the configuration file.
#[derive(Debug, Default, Args)]
pub struct CollectionArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "GENETAG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of documents
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Glob matched against document file names
    #[arg(short, long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Document encoding label
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Language tag attached to every document
    #[arg(long, value_name = "TAG")]
    pub language: Option<String>,

    /// Gene lexicon, one entry per line
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Match lexicon entries regardless of case
    #[arg(long)]
    pub ignore_case: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CollectionArgs {
    /// Configuration file values with command-line overrides applied
    pub fn resolve(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load(self.config.as_deref())?;

        if let Some(dir) = &self.input {
            config.input.directory = dir.clone();
        }
        if let Some(pattern) = &self.pattern {
            config.input.file_pattern = pattern.clone();
        }
        if self.recursive {
            config.input.recursive = true;
        }
        if let Some(encoding) = &self.encoding {
            config.input.encoding = encoding.clone();
        }
        if let Some(language) = &self.language {
            config.input.language = Some(language.clone());
        }
        if let Some(lexicon) = &self.lexicon {
            config.chunker.lexicon = lexicon.clone();
        }
        if self.ignore_case {
            config.chunker.case_sensitive = false;
        }

        Ok(config)
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Load the configured lexicon; failure ends the run
pub fn load_chunker(config: &CliConfig) -> Result<DictionaryChunker> {
    let chunker =
        DictionaryChunker::from_file(&config.chunker.lexicon, config.chunker.case_sensitive)
            .context("Failed to load the gene chunker")?;
    log::info!(
        "Loaded {} lexicon entries from {}",
        chunker.len(),
        config.chunker.lexicon.display()
    );
    Ok(chunker)
}
