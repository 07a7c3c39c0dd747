//! Owned report file with an open / reconfigure / close lifecycle

use crate::error::{CoreError, Result};
use crate::evaluator::Evaluation;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends evaluation reports to a file
///
/// Missing parent directories are created when the file is opened. The
/// handle is flushed and closed on [`ReportWriter::close`], on
/// [`ReportWriter::reconfigure`] to another path, and on drop; failures
/// while closing are ignored.
#[derive(Debug)]
pub struct ReportWriter {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl ReportWriter {
    /// Create (or truncate) the report file at `path`
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let writer = open_file(&path)?;
        log::debug!("Writing reports to {}", path.display());
        Ok(Self {
            path,
            writer: Some(writer),
        })
    }

    /// Current report location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Point the writer at a different file
    ///
    /// Nothing happens when `path` is the current location. Otherwise the
    /// current file is flushed and closed before the new one is created.
    pub fn reconfigure<P: Into<PathBuf>>(&mut self, path: P) -> Result<()> {
        let path = path.into();
        if path == self.path && self.writer.is_some() {
            return Ok(());
        }

        self.release();
        let writer = open_file(&path)?;
        log::debug!(
            "Report output moved from {} to {}",
            self.path.display(),
            path.display()
        );
        self.path = path;
        self.writer = Some(writer);
        Ok(())
    }

    /// Append one evaluation block
    pub fn write_evaluation(&mut self, evaluation: &Evaluation) -> Result<()> {
        let writer = self.writer.as_mut().ok_or_else(|| CoreError::ReportInit {
            path: self.path.clone(),
            source: std::io::Error::other("report file is closed"),
        })?;
        write!(writer, "{evaluation}")?;
        writer.flush()?;
        Ok(())
    }

    /// Flush and close the file
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            if let Err(e) = writer.flush() {
                log::debug!("Ignoring error while closing {}: {}", self.path.display(), e);
            }
        }
    }
}

impl Drop for ReportWriter {
    fn drop(&mut self) {
        self.release();
    }
}

fn open_file(path: &Path) -> Result<BufWriter<File>> {
    let init_error = |source| CoreError::ReportInit {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(init_error)?;
        }
    }
    let file = File::create(path).map_err(init_error)?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/deeper/report.txt");

        let writer = ReportWriter::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(writer.path(), path.as_path());
    }

    #[test]
    fn test_reports_are_appended() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");

        let mut writer = ReportWriter::open(&path).unwrap();
        writer
            .write_evaluation(&Evaluation::from_counts(1, 1, 1))
            .unwrap();
        writer
            .write_evaluation(&Evaluation::from_counts(2, 1, 0))
            .unwrap();
        writer.close();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("Evaluation Result").count(), 2);
        assert!(content.contains("Precision: 1.0\n"));
        assert!(content.contains("Precision: 0.0\n"));
    }

    #[test]
    fn test_reconfigure_moves_output() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.txt");
        let second = temp_dir.path().join("sub/second.txt");

        let mut writer = ReportWriter::open(&first).unwrap();
        writer
            .write_evaluation(&Evaluation::from_counts(1, 1, 1))
            .unwrap();
        writer.reconfigure(&second).unwrap();
        writer
            .write_evaluation(&Evaluation::from_counts(3, 3, 3))
            .unwrap();
        drop(writer);

        let first_content = fs::read_to_string(&first).unwrap();
        let second_content = fs::read_to_string(&second).unwrap();
        assert!(first_content.contains("Standard File: 1\n"));
        assert!(second_content.contains("Standard File: 3\n"));
        assert!(!second_content.contains("Standard File: 1\n"));
    }

    #[test]
    fn test_reconfigure_to_same_path_keeps_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");

        let mut writer = ReportWriter::open(&path).unwrap();
        writer
            .write_evaluation(&Evaluation::from_counts(1, 1, 1))
            .unwrap();
        writer.reconfigure(&path).unwrap();
        writer.close();

        assert!(fs::read_to_string(&path)
            .unwrap()
            .contains("Evaluation Result"));
    }

    #[test]
    fn test_unwritable_location_fails_at_open() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = ReportWriter::open(blocker.join("report.txt"));
        assert!(matches!(result, Err(CoreError::ReportInit { .. })));
    }
}
