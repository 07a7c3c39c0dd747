//! Annotation records produced by the reconciler

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open character range `[start, end)` reported by a chunker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// First character of the span
    pub start: usize,
    /// One past the last character of the span
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no characters
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A detected gene name projected into document coordinates
///
/// `begin` and `end` include `correction`, the number of characters consumed
/// by all earlier (trimmed) sentences of the document. Subtracting it again
/// yields the line-local offsets that gold files are written against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    /// Record identifier, the first token of the source line
    pub id: String,
    /// Surface text of the detection
    pub name: String,
    /// Corrected start offset in document space
    pub begin: i64,
    /// Corrected end offset in document space
    pub end: i64,
    /// Offset correction in effect when the annotation was created
    pub correction: i64,
}

impl Annotation {
    /// Start offset relative to the annotation's own line
    pub fn local_begin(&self) -> i64 {
        self.begin - self.correction
    }

    /// End offset relative to the annotation's own line
    pub fn local_end(&self) -> i64 {
        self.end - self.correction
    }

    /// Key in gold-file format: `<id>|<begin> <end>|<name>`
    pub fn gold_key(&self) -> String {
        format!(
            "{}|{} {}|{}",
            self.id,
            self.local_begin(),
            self.local_end(),
            self.name
        )
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.gold_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Annotation {
        Annotation {
            id: "P00001606T0076".to_string(),
            name: "BRCA1".to_string(),
            begin: 45,
            end: 49,
            correction: 42,
        }
    }

    #[test]
    fn test_local_offsets_undo_correction() {
        let annotation = sample();
        assert_eq!(annotation.local_begin(), 3);
        assert_eq!(annotation.local_end(), 7);
    }

    #[test]
    fn test_gold_key_format() {
        assert_eq!(sample().gold_key(), "P00001606T0076|3 7|BRCA1");
        assert_eq!(sample().to_string(), sample().gold_key());
    }

    #[test]
    fn test_negative_local_end() {
        let annotation = Annotation {
            id: "d".to_string(),
            name: String::new(),
            begin: 0,
            end: -1,
            correction: 0,
        };
        assert_eq!(annotation.gold_key(), "d|0 -1|");
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(4, 9).len(), 5);
        assert!(Span::new(3, 3).is_empty());
    }
}
