//! Run Log Appender for PrivCrawler.
//!
//! The shared run log is the only mutable state crawl runs share: an
//! append-only UTF-8 file holding one JSON `RunRecord` per line. Appends
//! are serialized through a mutex so concurrent runs can never interleave
//! their records.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::types::errors::LogError;
use crate::types::report::RunRecord;

/// Mutex-guarded appender over the shared run log file.
pub struct RunLogAppender {
    path: PathBuf,
    writer: Mutex<File>,
}

impl RunLogAppender {
    /// Opens the log for appending, creating the file and any parent
    /// directories as needed. Existing records are never touched.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    LogError::IoError(format!("Failed to create log directory: {}", e))
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::IoError(format!("Failed to open run log: {}", e)))?;

        Ok(Self {
            path,
            writer: Mutex::new(file),
        })
    }

    /// Appends one record as a single line, written and flushed while the
    /// writer lock is held. Records from concurrent appenders therefore
    /// land whole, never interleaved.
    pub fn append(&self, record: &RunRecord) -> Result<(), LogError> {
        let mut line = serde_json::to_string(record)
            .map_err(|e| LogError::SerializationError(e.to_string()))?;
        line.push('\n');

        let mut file = self
            .writer
            .lock()
            .map_err(|_| LogError::IoError("run log writer lock poisoned".to_string()))?;

        file.write_all(line.as_bytes())
            .map_err(|e| LogError::IoError(format!("Failed to append run record: {}", e)))?;
        file.flush()
            .map_err(|e| LogError::IoError(format!("Failed to flush run log: {}", e)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
