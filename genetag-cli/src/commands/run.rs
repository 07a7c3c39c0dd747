//! Run command implementation

use super::{load_chunker, CollectionArgs};
use crate::error::CliError;
use crate::input::CollectionReader;
use crate::output::{self, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use genetag_core::{AnnotationFilter, Pipeline, ReportWriter};
use std::io;
use std::path::PathBuf;

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub collection: CollectionArgs,

    /// Gold standard file
    #[arg(short, long, value_name = "FILE")]
    pub gold: Option<PathBuf>,

    /// Report file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Summary format on stdout
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self) -> Result<()> {
        self.collection.init_logging();

        let mut config = self.collection.resolve()?;
        if let Some(gold) = &self.gold {
            config.evaluation.gold_file = gold.clone();
        }
        if let Some(output) = &self.output {
            config.evaluation.output_file = output.clone();
        }
        log::debug!("Configuration: {:?}", config);

        let collection = CollectionReader::from_config(&config.input)?;
        let chunker = load_chunker(&config)?;
        let filter = AnnotationFilter::new(&config.filter.pattern)?;
        let report = ReportWriter::open(&config.evaluation.output_file)?;
        let mut pipeline = Pipeline::new(Box::new(chunker), &config.evaluation.gold_file)
            .with_filter(filter)
            .with_report(report);

        let files = collection.files()?;
        if files.is_empty() {
            log::warn!(
                "No documents matching {} in {}",
                config.input.file_pattern,
                collection.directory().display()
            );
        }
        log::info!("Processing {} document(s)", files.len());

        let mut progress = ProgressReporter::new(self.collection.quiet);
        progress.init_documents(files.len() as u64);

        let stdout = io::stdout();
        let mut formatter = output::formatter(self.format, stdout.lock());
        let mut failed = 0;

        for path in &files {
            let outcome = collection
                .read(path)
                .and_then(|document| Ok(pipeline.process(&document)?));
            match outcome {
                Ok(outcome) => formatter.format_outcome(&outcome)?,
                Err(e) => {
                    log::error!("Skipping {}: {:#}", path.display(), e);
                    failed += 1;
                }
            }
            progress.document_completed(&path.display().to_string());
        }

        progress.finish();
        formatter.finish()?;
        pipeline.finish();

        if failed > 0 {
            return Err(CliError::DocumentsFailed(failed).into());
        }
        Ok(())
    }
}
