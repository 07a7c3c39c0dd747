//! Projection of line-local chunker spans into document coordinates
//!
//! The chunker sees one trimmed sentence at a time. Its offsets follow a
//! tokenized convention that runs ahead of raw character offsets by one for
//! every space before the boundary, so each boundary is shifted back by the
//! number of spaces preceding it. The end boundary is additionally moved one
//! character to the left; gold files are written against exactly this
//! convention and scoring depends on it.
//!
//! Finally every offset is shifted by the running `correction`, the total
//! length of all earlier trimmed sentences in the document.

use crate::annotation::{Annotation, Span};
use crate::chunker::Chunker;
use crate::document::{Document, DocumentLine};
use crate::error::{CoreError, Result};

/// Converts chunker output into [`Annotation`] records
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanReconciler;

impl SpanReconciler {
    /// Create a new reconciler
    pub fn new() -> Self {
        Self
    }

    /// Run `chunker` over every line of `document` and reconcile the spans
    ///
    /// A malformed line or an out-of-range span aborts the whole document.
    pub fn reconcile<C>(&self, document: &Document, chunker: &C) -> Result<Vec<Annotation>>
    where
        C: Chunker + ?Sized,
    {
        let lines = document.lines()?;
        let mut annotations = Vec::new();
        let mut correction: i64 = 0;

        for line in &lines {
            let spans = chunker.chunk(line.sentence);
            annotations.extend(self.reconcile_line(line, &spans, correction)?);
            correction += line.sentence.chars().count() as i64;
        }

        log::debug!(
            "Reconciled {} spans over {} lines of {}",
            annotations.len(),
            lines.len(),
            document.display_name()
        );
        Ok(annotations)
    }

    /// Reconcile the spans found in a single line
    ///
    /// `correction` is the number of characters consumed by the trimmed
    /// sentences of all earlier lines.
    pub fn reconcile_line(
        &self,
        line: &DocumentLine<'_>,
        spans: &[Span],
        correction: i64,
    ) -> Result<Vec<Annotation>> {
        let chars: Vec<char> = line.sentence.chars().collect();

        spans
            .iter()
            .map(|span| {
                if span.start > span.end || span.end > chars.len() {
                    return Err(CoreError::SpanOutOfBounds {
                        line_number: line.line_number,
                        start: span.start,
                        end: span.end,
                        len: chars.len(),
                    });
                }

                let start_indent = spaces_through(&chars, span.start + 1);
                let end_indent = spaces_through(&chars, span.end);

                Ok(Annotation {
                    id: line.id.to_string(),
                    name: chars[span.start..span.end].iter().collect(),
                    begin: span.start as i64 - start_indent + correction,
                    end: span.end as i64 - end_indent - 1 + correction,
                    correction,
                })
            })
            .collect()
    }
}

/// Count the spaces among the first `prefix_len` characters
fn spaces_through(chars: &[char], prefix_len: usize) -> i64 {
    chars
        .iter()
        .take(prefix_len)
        .filter(|&&c| c == ' ')
        .count() as i64
}
