//! Precision, recall and F-measure against a gold standard
//!
//! Gold files hold one `<id>|<begin> <end>|<name>` record per line. Lookup is
//! exact string membership in a set, while the relevant-total is the raw line
//! count, so duplicate gold lines raise the denominator without ever being
//! matched twice.

use crate::annotation::Annotation;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Reference annotations loaded from a gold file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoldStandard {
    entries: HashSet<String>,
    total_lines: usize,
}

impl GoldStandard {
    /// Build a gold standard from individual lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut gold = Self::default();
        for line in lines {
            gold.total_lines += 1;
            gold.entries.insert(line.into());
        }
        gold
    }

    /// Read a gold standard from any reader
    ///
    /// Invalid UTF-8 is replaced with U+FFFD; only the affected lines stop
    /// matching.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let text = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = text {
            log::warn!("Gold standard contains invalid UTF-8; affected lines will not match");
        }
        Ok(Self::from_lines(text.lines()))
    }

    /// Read a gold file
    pub fn load(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read a gold file, falling back to an empty standard when it cannot be read
    ///
    /// Scoring against an empty standard yields a zero relevant-total and
    /// non-finite recall, which is what the report then shows.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(gold) => {
                log::debug!(
                    "Loaded {} gold lines ({} distinct) from {}",
                    gold.total_lines,
                    gold.entries.len(),
                    path.display()
                );
                gold
            }
            Err(e) => {
                log::warn!("Cannot read gold file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Whether `key` is one of the gold records
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains(key)
    }

    /// Number of lines read, duplicates included
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Number of distinct records
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }
}

/// Scores annotations against a [`GoldStandard`]
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    gold: &'a GoldStandard,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator for the given gold standard
    pub fn new(gold: &'a GoldStandard) -> Self {
        Self { gold }
    }

    /// Count matches and compute the metrics
    ///
    /// Zero denominators are not special-cased: the metrics become NaN or
    /// infinite exactly as IEEE division dictates.
    pub fn evaluate(&self, annotations: &[Annotation]) -> Evaluation {
        let rel_retrieve = annotations
            .iter()
            .filter(|annotation| self.gold.contains(&annotation.gold_key()))
            .count();

        Evaluation::from_counts(self.gold.total_lines(), annotations.len(), rel_retrieve)
    }
}

/// Counts and metrics for one document
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    /// Lines in the gold file
    pub total_rel: usize,
    /// Annotations that were scored
    pub total_retrieve: usize,
    /// Scored annotations found in the gold file
    pub rel_retrieve: usize,
    /// `rel_retrieve / total_retrieve`
    pub precision: f64,
    /// `rel_retrieve / total_rel`
    pub recall: f64,
    /// Harmonic mean of precision and recall
    pub f_measure: f64,
}

impl Evaluation {
    /// Compute the metrics from raw counts
    pub fn from_counts(total_rel: usize, total_retrieve: usize, rel_retrieve: usize) -> Self {
        let precision = rel_retrieve as f64 / total_retrieve as f64;
        let recall = rel_retrieve as f64 / total_rel as f64;
        let f_measure = 2.0 * precision * recall / (precision + recall);

        Self {
            total_rel,
            total_retrieve,
            rel_retrieve,
            precision,
            recall,
            f_measure,
        }
    }
}

/// Fixed-format report block
impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evaluation Result")?;
        writeln!(
            f,
            "Total Number of Gene Name Annotations in Standard File: {}",
            self.total_rel
        )?;
        writeln!(
            f,
            "Total Number of Gene Name Annotations CPE find: {}",
            self.total_retrieve
        )?;
        writeln!(
            f,
            "Total Number of Gene Name Annotations which are found to be correct: {}",
            self.rel_retrieve
        )?;
        writeln!(f)?;
        writeln!(f, "Precision: {}", format_metric(self.precision))?;
        writeln!(f, "Recall: {}", format_metric(self.recall))?;
        writeln!(f, "F-measure: {}", format_metric(self.f_measure))
    }
}

/// Render a metric as `1.0`, `0.5`, `5.0E-4`, `NaN` or `Infinity`
///
/// Magnitudes in `[1e-3, 1e7)` and zero print as plain decimals; anything
/// else uses `<mantissa>E<exponent>`. The mantissa always has a fractional
/// digit.
pub fn format_metric(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 || (1e-3..1e7).contains(&value.abs()) {
        format!("{value:?}")
    } else {
        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => {
                format!("{mantissa}E{exponent}")
            }
            Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
            None => scientific,
        }
    }
}
