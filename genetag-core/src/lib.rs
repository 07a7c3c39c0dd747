//! Span reconciliation and gold-standard scoring for gene name annotation
//!
//! Documents are sequences of `"<id> <sentence>"` lines. A [`Chunker`] finds
//! candidate gene name spans in each trimmed sentence; the [`SpanReconciler`]
//! projects those line-local spans into document coordinates, the
//! [`AnnotationFilter`] drops obviously wrong detections, and the
//! [`Evaluator`] scores what is left against a gold file.
//!
//! # Example
//!
//! ```rust
//! use genetag_core::{
//!     AnnotationFilter, Document, Evaluator, GoldStandard, Span, SpanReconciler, StaticChunker,
//! };
//!
//! let document = Document::new("doc1 The BRCA1 gene is studied.");
//! let chunker = StaticChunker::new().with_spans("The BRCA1 gene is studied.", [Span::new(4, 9)]);
//!
//! let annotations = SpanReconciler::new().reconcile(&document, &chunker).unwrap();
//! let annotations = AnnotationFilter::default().apply(annotations);
//!
//! let gold = GoldStandard::from_lines(["doc1|3 7|BRCA1"]);
//! let evaluation = Evaluator::new(&gold).evaluate(&annotations);
//!
//! assert_eq!(evaluation.rel_retrieve, 1);
//! assert_eq!(evaluation.precision, 1.0);
//! assert_eq!(evaluation.recall, 1.0);
//! assert_eq!(evaluation.f_measure, 1.0);
//! ```

#![warn(missing_docs)]

pub mod annotation;
pub mod chunker;
pub mod document;
pub mod error;
pub mod evaluator;
pub mod filter;
pub mod pipeline;
pub mod reconciler;
pub mod report;

// Re-export key types
pub use annotation::{Annotation, Span};
pub use chunker::{Chunker, DictionaryChunker, StaticChunker};
pub use document::{Document, DocumentLine};
pub use error::{CoreError, Result};
pub use evaluator::{Evaluation, Evaluator, GoldStandard};
pub use filter::{AnnotationFilter, DEFAULT_FILTER_PATTERN};
pub use pipeline::{DocumentOutcome, Pipeline};
pub use reconciler::SpanReconciler;
pub use report::ReportWriter;
