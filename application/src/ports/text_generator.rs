//! Text generation port
//!
//! The probe's only access to the local language model. An implementation is
//! constructed against a named model artifact; resolving that artifact
//! happens at construction time, and a failed resolution propagates as the
//! one fatal error in the system. Incremental output is a side effect of the
//! adapter, which pushes chunks into the
//! [`OutputSink`](super::output_sink::OutputSink) it was built with while a
//! completion is running.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while running a completion
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Generation stream interrupted: {0}")]
    StreamInterrupted(String),

    #[error("Invalid response from model server: {0}")]
    InvalidResponse(String),
}

/// A connected handle to the text generation capability
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Name of the model artifact this handle generates with
    fn model(&self) -> &str;

    /// Submit a fully formatted prompt and return the complete answer text
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}
