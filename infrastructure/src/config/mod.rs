//! Configuration file loading for rag-probe
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `GOOGLE_CSE_ID` / `GOOGLE_API_KEY` credential variables
//! 2. `RAG_PROBE_*` environment variables
//! 3. `--config <path>` specified file
//! 4. Project root: `./ragprobe.toml` or `./.ragprobe.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/rag-probe/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLogConfig, FileModelConfig, FileProbeConfig, FileSearchConfig,
};
pub use loader::ConfigLoader;
