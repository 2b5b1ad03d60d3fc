//! Line-oriented file writer for the probe's run log.
//!
//! One `LEVEL message` line per entry. The file is opened in append mode and
//! never rotated or truncated, so successive runs accumulate in order and a
//! test can count the entries a scenario produced.

use probe_application::ports::run_log::RunLog;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Append-only run log backed by a file.
///
/// Thread-safe through an internal mutex. Each entry is flushed as it is
/// written, and the writer flushes again on drop.
pub struct FileRunLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl FileRunLog {
    /// Open the log file for appending, creating it and any parent
    /// directories if missing.
    ///
    /// Returns `None` when the file cannot be opened. Callers degrade to
    /// [`NoRunLog`](probe_application::NoRunLog) in that case; a probe run
    /// should not die because its log file is unwritable.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create run log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Could not open run log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, level: &str, message: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{level} {message}");
            let _ = writer.flush();
        }
    }
}

impl RunLog for FileRunLog {
    fn info(&self, message: &str) {
        self.append("INFO", message);
    }

    fn error(&self, message: &str) {
        self.append("ERROR", message);
    }
}

impl Drop for FileRunLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
