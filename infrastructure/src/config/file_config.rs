//! Raw TOML configuration data types
//!
//! These structs mirror the structure of the config file one to one. Every
//! section and field has a serde default, so a partial file only overrides
//! what it names.

use crate::search::SearchCredentials;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Local model server settings
    pub model: FileModelConfig,
    /// Web search credentials
    pub search: FileSearchConfig,
    /// Run log settings
    pub log: FileLogConfig,
    /// Probe settings
    pub probe: FileProbeConfig,
}

/// `[model]` section: the local generation capability
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Base URL of the Ollama server
    pub endpoint: String,
    /// Named quantized model artifact, resolved by the server itself
    pub name: String,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434".to_string(),
            name: "llama2:7b-chat-q2_K".to_string(),
        }
    }
}

/// `[search]` section: Google Programmable Search credentials
///
/// Both fields default to absent. The loader overlays the `GOOGLE_CSE_ID`
/// and `GOOGLE_API_KEY` environment variables on top of whatever the file
/// provides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Search engine identifier (the `cx` request parameter)
    pub engine_id: Option<String>,
    /// API key for the Custom Search JSON API
    pub api_key: Option<String>,
}

impl FileSearchConfig {
    /// Convert into the credentials struct the search factory consumes.
    ///
    /// Empty strings count as absent, so a config file with placeholder
    /// values behaves like one with no `[search]` section at all.
    pub fn credentials(&self) -> SearchCredentials {
        SearchCredentials {
            engine_id: self.engine_id.clone().filter(|v| !v.trim().is_empty()),
            api_key: self.api_key.clone().filter(|v| !v.trim().is_empty()),
        }
    }
}

/// `[log]` section: the append-only run log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Path of the run log file
    pub file: PathBuf,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("rag_probe.log"),
        }
    }
}

/// `[probe]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProbeConfig {
    /// Question override; the built-in fabricated question when absent
    pub question: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = FileConfig::default();
        assert_eq!(config.model.endpoint, "http://localhost:11434");
        assert_eq!(config.model.name, "llama2:7b-chat-q2_K");
        assert_eq!(config.log.file, PathBuf::from("rag_probe.log"));
        assert!(config.search.engine_id.is_none());
        assert!(config.search.api_key.is_none());
        assert!(config.probe.question.is_none());
    }

    #[test]
    fn full_config_parses() {
        let toml_str = r#"
            [model]
            endpoint = "http://model-host:11434"
            name = "llama2:13b-chat"

            [search]
            engine_id = "abc123"
            api_key = "key456"

            [log]
            file = "/tmp/probe.log"

            [probe]
            question = "what is the airspeed of an unladen swallow?"
        "#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.endpoint, "http://model-host:11434");
        assert_eq!(config.model.name, "llama2:13b-chat");
        assert_eq!(config.search.engine_id.as_deref(), Some("abc123"));
        assert_eq!(config.search.api_key.as_deref(), Some("key456"));
        assert_eq!(config.log.file, PathBuf::from("/tmp/probe.log"));
        assert_eq!(
            config.probe.question.as_deref(),
            Some("what is the airspeed of an unladen swallow?")
        );
    }

    #[test]
    fn partial_config_keeps_defaults_for_the_rest() {
        let toml_str = r#"
            [model]
            name = "mistral:7b"
        "#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.name, "mistral:7b");
        assert_eq!(config.model.endpoint, "http://localhost:11434");
        assert_eq!(config.log.file, PathBuf::from("rag_probe.log"));
    }

    #[test]
    fn empty_credential_strings_count_as_absent() {
        let search = FileSearchConfig {
            engine_id: Some("".to_string()),
            api_key: Some("  ".to_string()),
        };

        let credentials = search.credentials();
        assert!(credentials.engine_id.is_none());
        assert!(credentials.api_key.is_none());
    }

    #[test]
    fn present_credentials_survive_conversion() {
        let search = FileSearchConfig {
            engine_id: Some("engine".to_string()),
            api_key: Some("key".to_string()),
        };

        let credentials = search.credentials();
        assert_eq!(credentials.engine_id.as_deref(), Some("engine"));
        assert_eq!(credentials.api_key.as_deref(), Some("key"));
    }
}
