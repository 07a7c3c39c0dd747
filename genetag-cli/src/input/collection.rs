//! Document collection discovery

use super::FileReader;
use crate::config::InputConfig;
use crate::error::CliError;
use anyhow::{Context, Result};
use genetag_core::Document;
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists and decodes the documents of an input directory
#[derive(Debug)]
pub struct CollectionReader {
    directory: PathBuf,
    recursive: bool,
    pattern: Pattern,
    reader: FileReader,
    language: Option<String>,
}

impl CollectionReader {
    /// Build a reader from the `[input]` configuration
    ///
    /// The directory must exist; the pattern and encoding must be valid.
    pub fn from_config(config: &InputConfig) -> Result<Self> {
        if !config.directory.is_dir() {
            return Err(CliError::DirectoryNotFound(config.directory.display().to_string()).into());
        }
        let pattern = Pattern::new(&config.file_pattern)
            .map_err(|e| CliError::InvalidPattern(format!("{}: {}", config.file_pattern, e)))?;

        Ok(Self {
            directory: config.directory.clone(),
            recursive: config.recursive,
            pattern,
            reader: FileReader::for_label(&config.encoding)?,
            language: config.language.clone(),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Matching files in sorted path order
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        self.collect(&self.directory, &mut files)?;
        files.sort();
        log::debug!(
            "{} file(s) in {} match {}",
            files.len(),
            self.directory.display(),
            self.pattern.as_str()
        );
        Ok(files)
    }

    fn collect(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to list directory: {}", dir.display()))?;

        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to list directory: {}", dir.display()))?
                .path();
            if path.is_dir() {
                if self.recursive {
                    self.collect(&path, files)?;
                }
            } else if path.is_file() && self.matches(&path) {
                files.push(path);
            }
        }
        Ok(())
    }

    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.pattern.matches(name))
    }

    /// Decode one file into a document
    pub fn read(&self, path: &Path) -> Result<Document> {
        let text = self.reader.read_text(path)?;
        let document = Document::new(text).with_source(path);
        Ok(match &self.language {
            Some(language) => document.with_language(language.clone()),
            None => document,
        })
    }
}
