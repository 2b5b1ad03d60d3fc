//! Infrastructure layer for rag-probe
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the Ollama generation client, the Google Programmable
//! Search tool, the file-backed run log, the stdout sink, and configuration
//! file loading.

pub mod config;
pub mod logging;
pub mod ollama;
pub mod output;
pub mod search;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLogConfig, FileModelConfig, FileProbeConfig, FileSearchConfig,
};
pub use logging::FileRunLog;
pub use ollama::{
    error::{OllamaError, Result},
    generator::OllamaGenerator,
};
pub use output::StdoutSink;
pub use search::{GoogleSearchFactory, GoogleSearchTool, SearchCredentials};
