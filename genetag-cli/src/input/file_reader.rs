//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use encoding_rs::Encoding;
use std::fs;
use std::path::Path;

/// Reads documents in a configured character encoding
#[derive(Debug, Clone, Copy)]
pub struct FileReader {
    encoding: &'static Encoding,
}

impl FileReader {
    /// Reader for an encoding label such as `utf-8` or `latin1`
    pub fn for_label(label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| CliError::ConfigError(format!("unknown encoding: {label}")))?;
        Ok(Self { encoding })
    }

    /// Canonical name of the encoding in use
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Read and decode a whole file
    ///
    /// A byte order mark overrides the configured encoding. Malformed
    /// sequences are replaced with U+FFFD and logged.
    pub fn read_text(&self, path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        let (text, used, had_errors) = self.encoding.decode(&bytes);
        if had_errors {
            log::warn!(
                "{}: malformed {} sequences replaced",
                path.display(),
                used.name()
            );
        }
        Ok(text.into_owned())
    }
}

impl Default for FileReader {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::UTF_8,
        }
    }
}
