//! Ollama adapter
//!
//! Implements TextGenerator against a local Ollama server. The server owns
//! model artifact resolution: the adapter names a quantized model and the
//! server loads it on demand.

pub mod error;
pub mod generator;

pub use error::{OllamaError, Result};
pub use generator::OllamaGenerator;
