//! Output formatting module

use anyhow::Result;
use genetag_core::{Annotation, DocumentOutcome};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Output the scored result of one document
    fn format_outcome(&mut self, outcome: &DocumentOutcome) -> Result<()>;

    /// Output the annotations of one document
    fn format_annotations(&mut self, document: &str, annotations: &[Annotation]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON array of records
    Json,
}

/// Formatter for `format` writing to `writer`
pub fn formatter<'w, W: std::io::Write + 'w>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}
