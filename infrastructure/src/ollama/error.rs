//! Error types for the Ollama adapter

use probe_application::ports::text_generator::GenerationError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when talking to the Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation stream interrupted: {0}")]
    Stream(reqwest::Error),

    #[error("Model '{model}' is not available on the server: {message}")]
    ModelUnavailable { model: String, message: String },

    #[error("Server returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Server reported a generation error: {0}")]
    Generation(String),

    #[error("Failed to parse stream line: {error}\nRaw line: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Generation stream ended without a terminal chunk")]
    StreamTruncated,
}

impl From<OllamaError> for GenerationError {
    fn from(e: OllamaError) -> Self {
        match &e {
            OllamaError::Http(_)
            | OllamaError::ModelUnavailable { .. }
            | OllamaError::Api { .. }
            | OllamaError::Generation(_) => GenerationError::RequestFailed(e.to_string()),
            OllamaError::Stream(_) => GenerationError::StreamInterrupted(e.to_string()),
            OllamaError::ParseError { .. } | OllamaError::StreamTruncated => {
                GenerationError::InvalidResponse(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_streams_map_to_invalid_response() {
        let port_error: GenerationError = OllamaError::StreamTruncated.into();
        assert!(matches!(port_error, GenerationError::InvalidResponse(_)));
    }

    #[test]
    fn api_errors_map_to_request_failed() {
        let e = OllamaError::Api {
            status: 500,
            message: "internal".to_string(),
        };
        let port_error: GenerationError = e.into();
        assert!(matches!(port_error, GenerationError::RequestFailed(_)));
    }

    #[test]
    fn generation_errors_carry_the_server_message() {
        let e = OllamaError::Generation("out of memory".to_string());
        let port_error: GenerationError = e.into();
        assert!(port_error.to_string().contains("out of memory"));
    }
}
