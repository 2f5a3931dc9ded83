//! File sink
//!
//! One sink per configured logger, opened in append mode and held open for
//! the logger's lifetime. Writes go through a mutex so lines from
//! concurrent callers never interleave; each line is flushed as it is
//! written.

use crate::core::error::{LogError, Result};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileSink {
    /// Open (or create) the log file in append mode, creating missing
    /// parent directories first.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    LogError::file_sink(path.display().to_string(), e.to_string())
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::file_sink(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line. The newline and flush happen under the same lock
    /// hold as the write, keeping the line intact under concurrency.
    pub fn write_line(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_lines_appended() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");

        let sink = FileSink::open(&path).unwrap();
        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/logs/app.log");

        let sink = FileSink::open(&path).unwrap();
        sink.write_line("line").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_reopen_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");

        {
            let sink = FileSink::open(&path).unwrap();
            sink.write_line("first").unwrap();
        }
        {
            let sink = FileSink::open(&path).unwrap();
            sink.write_line("second").unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_open_failure_reports_path() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be opened as a log file.
        let err = FileSink::open(dir.path()).unwrap_err();
        assert!(matches!(err, LogError::FileSink { .. }));
    }
}
