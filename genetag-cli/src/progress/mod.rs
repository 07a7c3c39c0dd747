//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for document processing
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for a collection of `total` documents
    pub fn init_documents(&mut self, total: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} documents {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed document
    pub fn document_completed(&self, name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {name}"));
            pb.inc(1);
        }
    }

    /// (completed, total) so far
    pub fn position(&self) -> Option<(u64, u64)> {
        self.progress_bar
            .as_ref()
            .map(|pb| (pb.position(), pb.length().unwrap_or(0)))
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_documents(3);
        reporter.document_completed("a.in");
        assert_eq!(reporter.position(), None);
        reporter.finish();
    }

    #[test]
    fn test_counts_completed_documents() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_documents(3);
        reporter.document_completed("a.in");
        reporter.document_completed("b.in");
        assert_eq!(reporter.position(), Some((2, 3)));
        reporter.finish();
    }
}
