//! Error types for reconciliation, chunker loading and report output

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the annotation pipeline
#[derive(Error, Debug)]
pub enum CoreError {
    /// A document line has no space between the id and the sentence
    #[error("line {line_number}: expected \"<id> <sentence>\", found {line:?}")]
    MalformedLine {
        /// 1-based line number within the document
        line_number: usize,
        /// The offending line
        line: String,
    },

    /// The sentence part of a line is empty once trimmed
    #[error("line {line_number}: empty sentence for id {id:?}")]
    EmptySentence {
        /// 1-based line number within the document
        line_number: usize,
        /// The id token that was found
        id: String,
    },

    /// The chunker returned a span outside the sentence it was given
    #[error("line {line_number}: span [{start}, {end}) is outside a sentence of {len} characters")]
    SpanOutOfBounds {
        /// 1-based line number within the document
        line_number: usize,
        /// Span start
        start: usize,
        /// Span end
        end: usize,
        /// Sentence length in characters
        len: usize,
    },

    /// The chunker model or lexicon could not be loaded
    #[error("failed to load chunker from {}: {reason}", path.display())]
    ChunkerLoad {
        /// Location of the model or lexicon
        path: PathBuf,
        /// Why loading failed
        reason: String,
    },

    /// Invalid regular expression
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The report file could not be prepared
    #[error("cannot open report file {}: {source}", path.display())]
    ReportInit {
        /// Requested report location
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_line_display() {
        let error = CoreError::MalformedLine {
            line_number: 3,
            line: "nospace".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "line 3: expected \"<id> <sentence>\", found \"nospace\""
        );
    }

    #[test]
    fn test_chunker_load_display() {
        let error = CoreError::ChunkerLoad {
            path: PathBuf::from("genes.txt"),
            reason: "lexicon is empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "failed to load chunker from genes.txt: lexicon is empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: CoreError = io.into();
        assert!(matches!(error, CoreError::Io(_)));
        assert!(error.to_string().contains("gone"));
    }
}
