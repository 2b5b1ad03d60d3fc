//! Application layer for rag-probe
//!
//! This crate contains the probe use case and the port definitions its
//! adapters implement. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    output_sink::{NoSink, OutputSink},
    run_log::{NoRunLog, RunLog},
    search_tool::{SearchError, SearchTool, SearchToolFactory},
    text_generator::{GenerationError, TextGenerator},
};
pub use use_cases::run_probe::{GENERATION_FAILURE_MESSAGE, ProbeReport, RunProbeUseCase};
