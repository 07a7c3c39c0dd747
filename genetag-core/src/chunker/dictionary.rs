use super::Chunker;
use crate::annotation::Span;
use crate::error::{CoreError, Result};
use regex::{Regex, RegexBuilder};
use std::fs;
use std::path::Path;

const REGEX_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Lexicon-driven chunker
///
/// Every lexicon entry is matched literally. Entries that begin or end with
/// a word character only match on word boundaries at that side; longer
/// entries win over their prefixes.
#[derive(Debug, Clone)]
pub struct DictionaryChunker {
    matcher: Regex,
    entries: usize,
}

impl DictionaryChunker {
    /// Load a lexicon file with one entry per line
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_file(path: &Path, case_sensitive: bool) -> Result<Self> {
        let load_error = |reason: String| CoreError::ChunkerLoad {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        let chunker =
            Self::from_entries(entries, case_sensitive).map_err(|e| load_error(e.to_string()))?;
        log::debug!(
            "Loaded {} lexicon entries from {}",
            chunker.entries,
            path.display()
        );
        Ok(chunker)
    }

    /// Build a chunker from in-memory entries
    pub fn from_entries<I, S>(entries: I, case_sensitive: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = entries
            .into_iter()
            .map(|entry| entry.as_ref().to_string())
            .filter(|entry| !entry.is_empty())
            .collect();
        if entries.is_empty() {
            return Err(CoreError::ChunkerLoad {
                path: "<lexicon>".into(),
                reason: "lexicon is empty".to_string(),
            });
        }

        // Leftmost-first alternation: put longer entries first
        entries.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        entries.dedup();

        let alternatives: Vec<String> = entries.iter().map(|e| bounded(e)).collect();
        let matcher = RegexBuilder::new(&alternatives.join("|"))
            .case_insensitive(!case_sensitive)
            .size_limit(REGEX_SIZE_LIMIT)
            .build()?;

        Ok(Self {
            matcher,
            entries: entries.len(),
        })
    }

    /// Number of distinct lexicon entries
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Whether the lexicon has no entries (never true once built)
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}

impl Chunker for DictionaryChunker {
    fn chunk(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        // Matches arrive in increasing byte order, so char offsets are
        // counted incrementally.
        let mut byte_cursor = 0;
        let mut char_cursor = 0;
        for m in self.matcher.find_iter(text) {
            if m.start() == m.end() {
                continue;
            }
            char_cursor += text[byte_cursor..m.start()].chars().count();
            let start = char_cursor;
            char_cursor += m.as_str().chars().count();
            byte_cursor = m.end();
            spans.push(Span::new(start, char_cursor));
        }
        spans
    }
}

fn bounded(entry: &str) -> String {
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let left = if is_word(entry.chars().next()) { r"\b" } else { "" };
    let right = if is_word(entry.chars().last()) { r"\b" } else { "" };
    format!("{left}{}{right}", regex::escape(entry))
}
