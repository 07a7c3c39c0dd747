//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use genetag_core::{Annotation, DocumentOutcome};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - buffers records and writes them as one array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<serde_json::Value>,
}

/// Annotations of one document
#[derive(Debug, Serialize)]
pub struct AnnotationRecord<'a> {
    pub document: &'a str,
    pub annotations: &'a [Annotation],
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_outcome(&mut self, outcome: &DocumentOutcome) -> Result<()> {
        self.records.push(serde_json::to_value(outcome)?);
        Ok(())
    }

    fn format_annotations(&mut self, document: &str, annotations: &[Annotation]) -> Result<()> {
        let record = AnnotationRecord {
            document,
            annotations,
        };
        self.records.push(serde_json::to_value(record)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genetag_core::Evaluation;
    use serde_json::Value;

    #[test]
    fn test_annotation_records() {
        let mut formatter = JsonFormatter::new(Vec::new());
        let annotations = vec![Annotation {
            id: "s2".to_string(),
            name: "TP53".to_string(),
            begin: 32,
            end: 35,
            correction: 26,
        }];
        formatter.format_annotations("doc.in", &annotations).unwrap();
        formatter.finish().unwrap();

        let value: Value = serde_json::from_slice(&formatter.into_inner()).unwrap();
        assert_eq!(value[0]["document"], "doc.in");
        assert_eq!(value[0]["annotations"][0]["name"], "TP53");
        assert_eq!(value[0]["annotations"][0]["correction"], 26);
    }

    #[test]
    fn test_outcome_records() {
        let outcome = DocumentOutcome {
            document: "hw1.in".to_string(),
            language: None,
            annotations: Vec::new(),
            filtered: 0,
            evaluation: Evaluation::from_counts(4, 2, 1),
        };
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.format_outcome(&outcome).unwrap();
        formatter.format_outcome(&outcome).unwrap();
        formatter.finish().unwrap();

        let value: Value = serde_json::from_slice(&formatter.into_inner()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["evaluation"]["total_rel"], 4);
        assert_eq!(value[0]["evaluation"]["precision"], 0.5);
        assert!(value[0].get("language").is_none());
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.finish().unwrap();
        assert_eq!(formatter.into_inner(), b"[]\n");
    }
}
