//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use genetag_core::{Annotation, DocumentOutcome};
use std::io::Write;

/// Plain text formatter
///
/// Outcomes are printed as a `==> name <==` header followed by the
/// evaluation report; annotations as one gold-format key per line.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_outcome(&mut self, outcome: &DocumentOutcome) -> Result<()> {
        writeln!(self.writer, "==> {} <==", outcome.document)?;
        if outcome.filtered > 0 {
            writeln!(self.writer, "Filtered annotations: {}", outcome.filtered)?;
        }
        write!(self.writer, "{}", outcome.evaluation)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_annotations(&mut self, _document: &str, annotations: &[Annotation]) -> Result<()> {
        for annotation in annotations {
            writeln!(self.writer, "{annotation}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
