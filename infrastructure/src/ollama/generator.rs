//! Streaming text generation against a local Ollama server.
//!
//! `connect` verifies the named model artifact resolves on the server before
//! a handle exists; nothing downstream catches that failure. `complete`
//! submits the prompt with `raw: true` (the probe's templates already carry
//! the full Llama-2 chat structure) and consumes the NDJSON stream chunk by
//! chunk, pushing each piece of text into the output sink as it arrives.

use crate::ollama::error::{OllamaError, Result};
use async_trait::async_trait;
use probe_application::ports::output_sink::OutputSink;
use probe_application::ports::text_generator::{GenerationError, TextGenerator};
use probe_domain::truncate_str;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// A connected handle to an Ollama server.
pub struct OllamaGenerator {
    endpoint: String,
    model: String,
    client: reqwest::Client,
    sink: Arc<dyn OutputSink>,
}

/// One NDJSON line of a streaming `/api/generate` response.
#[derive(Debug, Deserialize)]
struct GenerateChunk {
    #[serde(default)]
    response: String,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    error: Option<String>,
}

impl OllamaGenerator {
    /// Connect to the server and verify the model artifact is resolvable.
    ///
    /// Probes `/api/show` for the named model. A 404 means the server does
    /// not have the artifact; any other failure is a connection or API
    /// problem. Either way the handle is never constructed.
    pub async fn connect(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        sink: Arc<dyn OutputSink>,
    ) -> Result<Self> {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        let model = model.into();
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{endpoint}/api/show"))
            .json(&json!({ "model": model }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(OllamaError::ModelUnavailable { model, message });
            }
            return Err(OllamaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        info!(model = %model, "Ollama model resolved, generation handle ready");

        Ok(Self {
            endpoint,
            model,
            client,
            sink,
        })
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(
            model = %self.model,
            prompt_bytes = prompt.len(),
            "submitting generation request: {}",
            truncate_str(prompt, 120)
        );

        let body = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": true,
            "raw": true,
        });

        let mut response = self
            .client
            .post(format!("{}/api/generate", self.endpoint))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(OllamaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let mut accumulator = StreamAccumulator::new();
        while let Some(bytes) = response.chunk().await.map_err(OllamaError::Stream)? {
            accumulator.feed(&bytes, self.sink.as_ref())?;
        }

        let text = accumulator.finish(self.sink.as_ref())?;
        debug!(answer_bytes = text.len(), "generation complete");
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
        self.generate(prompt).await.map_err(GenerationError::from)
    }
}

/// Accumulates raw stream bytes into the completed answer, handling NDJSON
/// lines that arrive split across network chunks.
///
/// Bytes stay undecoded until a full line is available; a chunk boundary can
/// fall inside a multibyte character.
struct StreamAccumulator {
    pending: Vec<u8>,
    text: String,
    done: bool,
}

impl StreamAccumulator {
    fn new() -> Self {
        Self {
            pending: Vec::new(),
            text: String::new(),
            done: false,
        }
    }

    /// Feed one network chunk, emitting tokens to the sink as lines complete.
    fn feed(&mut self, bytes: &[u8], sink: &dyn OutputSink) -> Result<()> {
        self.pending.extend_from_slice(bytes);
        while let Some(newline) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=newline).collect();
            self.consume_line(&String::from_utf8_lossy(&line), sink)?;
        }
        Ok(())
    }

    /// Consume any unterminated trailing line and return the full text.
    fn finish(mut self, sink: &dyn OutputSink) -> Result<String> {
        let trailing = std::mem::take(&mut self.pending);
        self.consume_line(&String::from_utf8_lossy(&trailing), sink)?;
        if !self.done {
            return Err(OllamaError::StreamTruncated);
        }
        Ok(self.text)
    }

    fn consume_line(&mut self, line: &str, sink: &dyn OutputSink) -> Result<()> {
        if let Some(chunk) = parse_stream_line(line)? {
            if !chunk.response.is_empty() {
                sink.token(&chunk.response);
                self.text.push_str(&chunk.response);
            }
            if chunk.done {
                self.done = true;
            }
        }
        Ok(())
    }
}

/// Parse one line of the NDJSON stream.
///
/// Blank keep-alive lines yield `None`. A line carrying an `error` field is
/// the server reporting a failure mid-stream.
fn parse_stream_line(line: &str) -> Result<Option<GenerateChunk>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut chunk: GenerateChunk =
        serde_json::from_str(line).map_err(|e| OllamaError::ParseError {
            error: e.to_string(),
            raw: line.to_string(),
        })?;

    if let Some(message) = chunk.error.take() {
        return Err(OllamaError::Generation(message));
    }

    Ok(Some(chunk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use probe_application::ports::output_sink::NoSink;
    use std::sync::Mutex;

    /// Sink that records every token chunk it receives.
    #[derive(Default)]
    struct RecordingSink {
        tokens: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn tokens(&self) -> Vec<String> {
            self.tokens.lock().unwrap().clone()
        }
    }

    impl OutputSink for RecordingSink {
        fn token(&self, chunk: &str) {
            self.tokens.lock().unwrap().push(chunk.to_string());
        }
    }

    #[test]
    fn parses_a_content_chunk() {
        let chunk = parse_stream_line(r#"{"response":"Hello","done":false}"#)
            .unwrap()
            .unwrap();
        assert_eq!(chunk.response, "Hello");
        assert!(!chunk.done);
    }

    #[test]
    fn parses_the_terminal_chunk() {
        let chunk = parse_stream_line(r#"{"response":"","done":true,"total_duration":12345}"#)
            .unwrap()
            .unwrap();
        assert!(chunk.done);
        assert!(chunk.response.is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert!(parse_stream_line("").unwrap().is_none());
        assert!(parse_stream_line("   \n").unwrap().is_none());
    }

    #[test]
    fn error_lines_surface_the_server_message() {
        let result = parse_stream_line(r#"{"error":"model ran out of memory"}"#);
        match result {
            Err(OllamaError::Generation(message)) => {
                assert_eq!(message, "model ran out of memory");
            }
            other => panic!("expected generation error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_lines_are_parse_errors() {
        let result = parse_stream_line("not json at all");
        assert!(matches!(result, Err(OllamaError::ParseError { .. })));
    }

    #[test]
    fn accumulator_reassembles_lines_split_across_chunks() {
        let sink = RecordingSink::default();
        let mut accumulator = StreamAccumulator::new();

        accumulator
            .feed(br#"{"response":"Hel"#, &sink)
            .unwrap();
        accumulator
            .feed(b"lo\",\"done\":false}\n", &sink)
            .unwrap();
        accumulator
            .feed(b"{\"response\":\" world\",\"done\":false}\n{\"done\":true}\n", &sink)
            .unwrap();

        let text = accumulator.finish(&sink).unwrap();
        assert_eq!(text, "Hello world");
        assert_eq!(sink.tokens(), vec!["Hello", " world"]);
    }

    #[test]
    fn multibyte_characters_split_across_chunks_stay_intact() {
        let sink = RecordingSink::default();
        let mut accumulator = StreamAccumulator::new();

        // 'é' encodes as 0xC3 0xA9; cut the chunk between those two bytes
        let line = r#"{"response":"café","done":false}"#.as_bytes();
        let mid = line.iter().position(|&b| b == 0xC3).unwrap() + 1;
        accumulator.feed(&line[..mid], &sink).unwrap();
        accumulator.feed(&line[mid..], &sink).unwrap();
        accumulator.feed(b"\n{\"done\":true}\n", &sink).unwrap();

        let text = accumulator.finish(&sink).unwrap();
        assert_eq!(text, "caf\u{e9}");
        assert_eq!(sink.tokens(), vec!["caf\u{e9}"]);
    }

    #[test]
    fn accumulator_handles_unterminated_final_line() {
        let sink = RecordingSink::default();
        let mut accumulator = StreamAccumulator::new();

        accumulator
            .feed(b"{\"response\":\"done soon\",\"done\":false}\n", &sink)
            .unwrap();
        accumulator.feed(b"{\"done\":true}", &sink).unwrap();

        let text = accumulator.finish(&sink).unwrap();
        assert_eq!(text, "done soon");
    }

    #[test]
    fn stream_without_terminal_chunk_is_an_error() {
        let sink = RecordingSink::default();
        let mut accumulator = StreamAccumulator::new();

        accumulator
            .feed(b"{\"response\":\"cut off\",\"done\":false}\n", &sink)
            .unwrap();

        let result = accumulator.finish(&sink);
        assert!(matches!(result, Err(OllamaError::StreamTruncated)));
    }

    #[test]
    fn tokens_are_emitted_in_arrival_order() {
        let sink = RecordingSink::default();
        let mut accumulator = StreamAccumulator::new();

        for word in ["one ", "two ", "three"] {
            let line = format!("{{\"response\":\"{word}\",\"done\":false}}\n");
            accumulator.feed(line.as_bytes(), &sink).unwrap();
        }
        accumulator.feed(b"{\"done\":true}\n", &sink).unwrap();

        assert_eq!(sink.tokens(), vec!["one ", "two ", "three"]);
        let text = accumulator.finish(&sink).unwrap();
        assert_eq!(text, "one two three");
    }

    #[test]
    fn model_reports_the_connected_artifact_name() {
        let generator = OllamaGenerator {
            endpoint: "http://localhost:11434".to_string(),
            model: "llama2:7b-chat-q2_K".to_string(),
            client: reqwest::Client::new(),
            sink: Arc::new(NoSink),
        };

        assert_eq!(generator.model(), "llama2:7b-chat-q2_K");
    }
}
