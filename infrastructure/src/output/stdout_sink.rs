//! Stdout implementation of the output sink.

use probe_application::ports::output_sink::OutputSink;
use std::io::Write;

/// Writes generation output straight to stdout.
///
/// Token chunks are written without a trailing newline and flushed per
/// chunk, so streaming is visible while the model is still generating.
/// Labeled answers print as a `Label:` line followed by the full text.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    fn token(&self, chunk: &str) {
        let mut stdout = std::io::stdout();
        let _ = write!(stdout, "{chunk}");
        let _ = stdout.flush();
    }

    fn answer(&self, label: &str, text: &str) {
        println!("{label}:\n{text}");
    }
}
