//! Annotate command implementation

use super::{load_chunker, CollectionArgs};
use crate::error::CliError;
use crate::input::CollectionReader;
use crate::output::{self, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use genetag_core::{Annotation, AnnotationFilter, Document, SpanReconciler};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the annotate command
#[derive(Debug, Args)]
pub struct AnnotateArgs {
    #[command(flatten)]
    pub collection: CollectionArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Keep single lowercase letters and bare numbers
    #[arg(long)]
    pub no_filter: bool,
}

impl AnnotateArgs {
    /// Execute the annotate command
    pub fn execute(&self) -> Result<()> {
        self.collection.init_logging();

        let config = self.collection.resolve()?;
        let collection = CollectionReader::from_config(&config.input)?;
        let chunker = load_chunker(&config)?;
        let filter = if self.no_filter {
            None
        } else {
            Some(AnnotationFilter::new(&config.filter.pattern)?)
        };
        let reconciler = SpanReconciler::new();

        let annotate = |document: &Document| -> Result<Vec<Annotation>> {
            let annotations = reconciler.reconcile(document, &chunker)?;
            Ok(match &filter {
                Some(filter) => filter.apply(annotations),
                None => annotations,
            })
        };

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter = output::formatter(self.format, writer);

        let files = collection.files()?;
        let mut progress = ProgressReporter::new(self.collection.quiet);
        progress.init_documents(files.len() as u64);
        let mut failed = 0;

        for path in &files {
            let annotations = collection
                .read(path)
                .and_then(|document| annotate(&document));
            match annotations {
                Ok(annotations) => {
                    formatter.format_annotations(&path.display().to_string(), &annotations)?
                }
                Err(e) => {
                    log::error!("Skipping {}: {:#}", path.display(), e);
                    failed += 1;
                }
            }
            progress.document_completed(&path.display().to_string());
        }

        progress.finish();
        formatter.finish()?;

        if failed > 0 {
            return Err(CliError::DocumentsFailed(failed).into());
        }
        Ok(())
    }
}
