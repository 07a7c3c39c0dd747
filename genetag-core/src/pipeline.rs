//! Per-document orchestration: reconcile, filter, evaluate, report

use crate::annotation::Annotation;
use crate::chunker::Chunker;
use crate::document::Document;
use crate::error::Result;
use crate::evaluator::{Evaluation, Evaluator, GoldStandard};
use crate::filter::AnnotationFilter;
use crate::reconciler::SpanReconciler;
use crate::report::ReportWriter;
use serde::Serialize;
use std::path::PathBuf;

/// What happened to one document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutcome {
    /// Name of the document (its path, if it came from a file)
    pub document: String,
    /// Language tag of the document, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Annotations that survived the filter
    pub annotations: Vec<Annotation>,
    /// Number of annotations removed by the filter
    pub filtered: usize,
    /// Scores against the gold file
    pub evaluation: Evaluation,
}

/// Runs documents through the reconciler, the filter and the evaluator
///
/// The gold file is read again for every document so that each evaluation
/// stands on its own; a missing gold file only degrades the metrics.
pub struct Pipeline {
    chunker: Box<dyn Chunker>,
    reconciler: SpanReconciler,
    filter: AnnotationFilter,
    gold_path: PathBuf,
    report: Option<ReportWriter>,
}

impl Pipeline {
    /// Create a pipeline with the default filter and no report file
    pub fn new<P: Into<PathBuf>>(chunker: Box<dyn Chunker>, gold_path: P) -> Self {
        Self {
            chunker,
            reconciler: SpanReconciler::new(),
            filter: AnnotationFilter::default(),
            gold_path: gold_path.into(),
            report: None,
        }
    }

    /// Replace the annotation filter
    pub fn with_filter(mut self, filter: AnnotationFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Append every evaluation to `report`
    pub fn with_report(mut self, report: ReportWriter) -> Self {
        self.report = Some(report);
        self
    }

    /// The report writer, if any
    pub fn report_mut(&mut self) -> Option<&mut ReportWriter> {
        self.report.as_mut()
    }

    /// Reconcile and filter a document without scoring it
    pub fn annotate(&self, document: &Document) -> Result<(Vec<Annotation>, usize)> {
        let annotations = self.reconciler.reconcile(document, &self.chunker)?;
        let found = annotations.len();
        let surviving = self.filter.apply(annotations);
        let filtered = found - surviving.len();
        Ok((surviving, filtered))
    }

    /// Process one document end to end
    ///
    /// Format errors abort this document only. A failed report write is
    /// logged and does not discard the evaluation.
    pub fn process(&mut self, document: &Document) -> Result<DocumentOutcome> {
        let (annotations, filtered) = self.annotate(document)?;

        let gold = GoldStandard::load_or_empty(&self.gold_path);
        let evaluation = Evaluator::new(&gold).evaluate(&annotations);
        log::info!(
            "{}: {} of {} annotations correct",
            document.display_name(),
            evaluation.rel_retrieve,
            evaluation.total_retrieve
        );

        if let Some(report) = self.report.as_mut() {
            if let Err(e) = report.write_evaluation(&evaluation) {
                log::warn!(
                    "Failed to write report for {} to {}: {}",
                    document.display_name(),
                    report.path().display(),
                    e
                );
            }
        }

        Ok(DocumentOutcome {
            document: document.display_name(),
            language: document.language().map(str::to_string),
            annotations,
            filtered,
            evaluation,
        })
    }

    /// Close the report file
    pub fn finish(self) {
        if let Some(report) = self.report {
            report.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Span;
    use crate::chunker::StaticChunker;
    use std::fs;
    use tempfile::TempDir;

    fn chunker() -> Box<dyn Chunker> {
        Box::new(
            StaticChunker::new()
                .with_spans(
                    "The BRCA1 gene is studied.",
                    [Span::new(4, 9), Span::new(0, 1)],
                )
                .with_spans("Levels of p53 rose 12 fold.", [Span::new(10, 13), Span::new(19, 21)]),
        )
    }

    #[test]
    fn test_process_scores_and_reports() {
        let temp_dir = TempDir::new().unwrap();
        let gold_path = temp_dir.path().join("gold.out");
        // Second line: correction is 26, p53 sits at local 10..13 with two
        // preceding spaces
        fs::write(&gold_path, "doc1|3 7|BRCA1\ndoc2|8 10|p53\n").unwrap();
        let report_path = temp_dir.path().join("out/report.txt");

        let mut pipeline = Pipeline::new(chunker(), &gold_path)
            .with_report(ReportWriter::open(&report_path).unwrap());
        let document =
            Document::new("doc1 The BRCA1 gene is studied.\ndoc2 Levels of p53 rose 12 fold.\n");

        let outcome = pipeline.process(&document).unwrap();
        pipeline.finish();

        // "T" survives (uppercase), "12" does not
        assert_eq!(outcome.filtered, 1);
        assert_eq!(outcome.annotations.len(), 3);
        assert_eq!(outcome.evaluation.total_rel, 2);
        assert_eq!(outcome.evaluation.rel_retrieve, 2);

        let report = fs::read_to_string(&report_path).unwrap();
        assert!(report.starts_with("Evaluation Result\n"));
        assert!(report.contains("Recall: 1.0\n"));
    }

    #[test]
    fn test_outcome_carries_language_tag() {
        let mut pipeline = Pipeline::new(chunker(), "/nonexistent/gold.out");

        let tagged = Document::new("doc1 The BRCA1 gene is studied.").with_language("en");
        let outcome = pipeline.process(&tagged).unwrap();
        assert_eq!(outcome.language.as_deref(), Some("en"));

        let untagged = pipeline
            .process(&Document::new("doc1 The BRCA1 gene is studied."))
            .unwrap();
        assert_eq!(untagged.language, None);
    }

    #[test]
    fn test_missing_gold_file_degrades_metrics() {
        let mut pipeline = Pipeline::new(chunker(), "/nonexistent/gold.out");
        let outcome = pipeline
            .process(&Document::new("doc1 The BRCA1 gene is studied."))
            .unwrap();

        assert_eq!(outcome.evaluation.total_rel, 0);
        assert_eq!(outcome.evaluation.precision, 0.0);
        assert!(outcome.evaluation.recall.is_nan());
    }

    #[test]
    fn test_malformed_document_does_not_poison_the_next() {
        let mut pipeline = Pipeline::new(chunker(), "/nonexistent/gold.out");

        assert!(pipeline.process(&Document::new("broken")).is_err());
        let outcome = pipeline
            .process(&Document::new("doc1 The BRCA1 gene is studied."))
            .unwrap();
        assert_eq!(outcome.evaluation.total_retrieve, 2);
    }

    #[test]
    fn test_custom_filter() {
        let pipeline = Pipeline::new(chunker(), "gold.out")
            .with_filter(AnnotationFilter::new("^[A-Z]$").unwrap());
        let (annotations, filtered) = pipeline
            .annotate(&Document::new("doc1 The BRCA1 gene is studied."))
            .unwrap();

        assert_eq!(filtered, 1);
        assert_eq!(annotations[0].name, "BRCA1");
    }
}
