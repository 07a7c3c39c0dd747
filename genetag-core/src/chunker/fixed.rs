use super::Chunker;
use crate::annotation::Span;
use std::collections::HashMap;

/// Deterministic chunker returning pre-registered spans per sentence
///
/// Sentences that were never registered produce no spans.
#[derive(Debug, Clone, Default)]
pub struct StaticChunker {
    spans: HashMap<String, Vec<Span>>,
}

impl StaticChunker {
    /// Create an empty chunker
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the spans returned for `sentence`
    pub fn with_spans<S, I>(mut self, sentence: S, spans: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Span>,
    {
        self.insert(sentence, spans);
        self
    }

    /// Register additional spans for `sentence`
    pub fn insert<S, I>(&mut self, sentence: S, spans: I)
    where
        S: Into<String>,
        I: IntoIterator<Item = Span>,
    {
        self.spans.entry(sentence.into()).or_default().extend(spans);
    }
}

impl Chunker for StaticChunker {
    fn chunk(&self, text: &str) -> Vec<Span> {
        self.spans.get(text).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_sentence() {
        let chunker = StaticChunker::new().with_spans("abc def", [Span::new(0, 3)]);
        assert_eq!(chunker.chunk("abc def"), vec![Span::new(0, 3)]);
    }

    #[test]
    fn test_unknown_sentence() {
        let chunker = StaticChunker::new();
        assert!(chunker.chunk("anything").is_empty());
    }

    #[test]
    fn test_insert_accumulates() {
        let mut chunker = StaticChunker::new();
        chunker.insert("x y", [Span::new(0, 1)]);
        chunker.insert("x y", [Span::new(2, 3), Span::new(2, 3)]);
        assert_eq!(chunker.chunk("x y").len(), 3);
    }
}
