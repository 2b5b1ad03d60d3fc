//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `GOOGLE_CSE_ID` / `GOOGLE_API_KEY` credential variables
    /// 2. `RAG_PROBE_*` environment variables (`RAG_PROBE_MODEL__NAME` etc.)
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./ragprobe.toml` or `./.ragprobe.toml`
    /// 5. XDG config: `$XDG_CONFIG_HOME/rag-probe/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Add project-level config files (check both names)
        for filename in &["ragprobe.toml", ".ragprobe.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Environment variables beat every file source
        figment = figment.merge(Env::prefixed("RAG_PROBE_").split("__"));

        let mut config: FileConfig = figment.extract().map_err(Box::new)?;
        Self::overlay_credentials(&mut config);
        Ok(config)
    }

    /// Load only default configuration (for --no-config)
    ///
    /// The credential variables are still honored; they are how the search
    /// provider documents passing credentials, not an optional config source.
    pub fn load_defaults() -> FileConfig {
        let mut config = FileConfig::default();
        Self::overlay_credentials(&mut config);
        config
    }

    /// Overlay the Google credential variables onto the `[search]` section.
    fn overlay_credentials(config: &mut FileConfig) {
        if let Ok(value) = std::env::var("GOOGLE_CSE_ID")
            && !value.trim().is_empty()
        {
            config.search.engine_id = Some(value);
        }
        if let Ok(value) = std::env::var("GOOGLE_API_KEY")
            && !value.trim().is_empty()
        {
            config.search.api_key = Some(value);
        }
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/rag-probe/config.toml if set,
    /// otherwise falls back to ~/.config/rag-probe/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("rag-probe").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["ragprobe.toml", ".ragprobe.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [ env ] GOOGLE_CSE_ID / GOOGLE_API_KEY, RAG_PROBE_*");

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./ragprobe.toml or ./.ragprobe.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
