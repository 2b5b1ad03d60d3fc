//! Output sink port
//!
//! Everything the probe shows the user flows through this interface: the
//! token chunks the generation adapter streams as they arrive, and the
//! labeled full-answer dump the grounded path emits on success. Swapping
//! the sink swaps streaming consumption for silent capture in tests.

/// Destination for generated text
///
/// Both methods default to no-ops so implementations override only what
/// they actually display.
pub trait OutputSink: Send + Sync {
    /// One incremental chunk of generation output, in arrival order
    fn token(&self, _chunk: &str) {}

    /// A complete answer, tagged with a distinguishing label
    fn answer(&self, _label: &str, _text: &str) {}
}

/// Sink that discards everything
pub struct NoSink;

impl OutputSink for NoSink {}
