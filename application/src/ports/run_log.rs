//! Run log port
//!
//! The probe's append-only log file as an interface: informational and
//! error lines, nothing more structured than that. Failure handling in the
//! use case is specified in terms of which entries land here, so tests
//! substitute a recording implementation and count them.

/// Append-only run log
pub trait RunLog: Send + Sync {
    /// Append an informational entry
    fn info(&self, message: &str);

    /// Append an error entry
    fn error(&self, message: &str);
}

/// Log that discards everything
pub struct NoRunLog;

impl RunLog for NoRunLog {
    fn info(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
