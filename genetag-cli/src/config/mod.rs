//! Configuration module

use anyhow::{Context, Result};
use genetag_core::DEFAULT_FILTER_PATTERN;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Document collection
    #[serde(default)]
    pub input: InputConfig,

    /// Candidate gene-name detection
    #[serde(default)]
    pub chunker: ChunkerConfig,

    /// Post-reconciliation filtering
    #[serde(default)]
    pub filter: FilterConfig,

    /// Scoring and report output
    #[serde(default)]
    pub evaluation: EvaluationConfig,
}

/// Where documents come from
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Directory holding the documents
    pub directory: PathBuf,

    /// Descend into subdirectories
    pub recursive: bool,

    /// Glob matched against file names
    pub file_pattern: String,

    /// Encoding label understood by `encoding_rs`
    pub encoding: String,

    /// Language tag attached to every document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data"),
            recursive: false,
            file_pattern: "*.in".to_string(),
            encoding: "utf-8".to_string(),
            language: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Gene lexicon, one entry per line
    pub lexicon: PathBuf,

    /// Match lexicon entries with exact case
    pub case_sensitive: bool,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            lexicon: PathBuf::from("genes.txt"),
            case_sensitive: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// Annotations whose name matches this regex are dropped
    pub pattern: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_FILTER_PATTERN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Gold standard file
    pub gold_file: PathBuf,

    /// Report file, created along with missing parent directories
    pub output_file: PathBuf,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            gold_file: PathBuf::from("data/sample.out"),
            output_file: PathBuf::from("out/report.txt"),
        }
    }
}

impl CliConfig {
    /// Load a configuration file, falling back to defaults for missing keys
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
