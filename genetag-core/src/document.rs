//! Documents and their `"<id> <sentence>"` lines

use crate::error::{CoreError, Result};
use std::path::{Path, PathBuf};

/// A multi-line input document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
    source: Option<PathBuf>,
    language: Option<String>,
}

/// One parsed line of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentLine<'a> {
    /// 1-based position of the line in the document
    pub line_number: usize,
    /// Record identifier
    pub id: &'a str,
    /// Trimmed sentence text handed to the chunker
    pub sentence: &'a str,
}

impl Document {
    /// Create a document from raw text
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            source: None,
            language: None,
        }
    }

    /// Record the file the document was read from
    pub fn with_source<P: Into<PathBuf>>(mut self, source: P) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Tag the document with a language
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Raw document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Source path, if the document came from a file
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Language tag, if one was configured
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Human readable name for logs
    pub fn display_name(&self) -> String {
        match &self.source {
            Some(path) => path.display().to_string(),
            None => "<memory>".to_string(),
        }
    }

    /// Parse every line of the document
    ///
    /// Trailing blank lines are ignored; any other line must split into an
    /// id and a non-empty sentence.
    pub fn lines(&self) -> Result<Vec<DocumentLine<'_>>> {
        let mut raw: Vec<&str> = self.text.split('\n').collect();
        while raw.last().is_some_and(|line| line.trim().is_empty()) {
            raw.pop();
        }

        raw.into_iter()
            .enumerate()
            .map(|(index, line)| split_line(index + 1, line))
            .collect()
    }
}

/// Split a raw line into its id and trimmed sentence
pub fn split_line(line_number: usize, line: &str) -> Result<DocumentLine<'_>> {
    let (id, rest) = line
        .trim_start()
        .split_once(' ')
        .ok_or_else(|| CoreError::MalformedLine {
            line_number,
            line: line.to_string(),
        })?;

    let sentence = rest.trim();
    if sentence.is_empty() {
        return Err(CoreError::EmptySentence {
            line_number,
            id: id.to_string(),
        });
    }

    Ok(DocumentLine {
        line_number,
        id,
        sentence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_line() {
        let line = split_line(1, "doc1 The BRCA1 gene is studied.").unwrap();
        assert_eq!(line.id, "doc1");
        assert_eq!(line.sentence, "The BRCA1 gene is studied.");
    }

    #[test]
    fn test_split_line_trims_sentence() {
        let line = split_line(1, "  doc1   padded sentence \r").unwrap();
        assert_eq!(line.id, "doc1");
        assert_eq!(line.sentence, "padded sentence");
    }

    #[test]
    fn test_split_line_without_separator() {
        match split_line(7, "lonely") {
            Err(CoreError::MalformedLine { line_number, line }) => {
                assert_eq!(line_number, 7);
                assert_eq!(line, "lonely");
            }
            other => panic!("Expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_split_line_empty_sentence() {
        match split_line(2, "doc1 \t\r") {
            Err(CoreError::EmptySentence { line_number, id }) => {
                assert_eq!(line_number, 2);
                assert_eq!(id, "doc1");
            }
            other => panic!("Expected EmptySentence, got {other:?}"),
        }
    }

    #[test]
    fn test_split_line_tab_is_not_a_separator() {
        assert!(matches!(
            split_line(1, "doc1\tsentence"),
            Err(CoreError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_lines_ignores_trailing_newlines() {
        let document = Document::new("a first\nb second\n\n");
        let lines = document.lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].line_number, 2);
        assert_eq!(lines[1].sentence, "second");
    }

    #[test]
    fn test_blank_line_in_the_middle_is_malformed() {
        let document = Document::new("a first\n\nb second");
        assert!(matches!(
            document.lines(),
            Err(CoreError::MalformedLine { line_number: 2, .. })
        ));
    }

    #[test]
    fn test_empty_document_has_no_lines() {
        assert!(Document::new("").lines().unwrap().is_empty());
    }

    #[test]
    fn test_metadata() {
        let document = Document::new("a b")
            .with_source("data/hw1.in")
            .with_language("en");
        assert_eq!(document.language(), Some("en"));
        assert_eq!(document.display_name(), "data/hw1.in");
        assert_eq!(Document::new("a b").display_name(), "<memory>");
    }
}
