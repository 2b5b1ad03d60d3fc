//! Logging infrastructure: the append-only run log file.
//!
//! Provides [`FileRunLog`], a line-oriented file writer that implements the
//! [`RunLog`](probe_application::RunLog) port.

mod file_log;

pub use file_log::FileRunLog;
