//! CLI entrypoint for rag-probe
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use probe_application::ports::run_log::{NoRunLog, RunLog};
use probe_application::{RunProbeUseCase, TextGenerator};
use probe_domain::Query;
use probe_infrastructure::{
    ConfigLoader, FileRunLog, GoogleSearchFactory, OllamaGenerator, StdoutSink,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Compare a local model's answer with and without retrieved web context
#[derive(Parser, Debug)]
#[command(name = "rag-probe")]
#[command(version, about)]
#[command(long_about = "\
rag-probe poses one fabricated question to a local model twice:

  1. Baseline: the bare question through a fixed instruction template
  2. Grounded: the same question plus aggregated web search results

Both answers stream to stdout as they are generated. Failures along the
grounded path degrade to an empty-context prompt instead of aborting, so
the run always produces two answers to compare.

The model is served by a local Ollama server, which resolves the named
quantized artifact on its own. Web search needs two credentials, taken
from the [search] config section or the GOOGLE_CSE_ID / GOOGLE_API_KEY
environment variables; without them the grounded path runs ungrounded
and the run log records why.

Examples:
  rag-probe
  rag-probe -v \"impact of the 1958 lunar cheese harvest\"
  rag-probe --config ./probe.toml")]
struct Cli {
    /// Question to probe (default: the built-in fabricated one)
    question: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    show_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Answers stream to stdout, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };

    info!("Starting rag-probe");

    let query = match cli.question.or_else(|| config.probe.question.clone()) {
        Some(text) => Query::try_new(text).unwrap_or_else(|| {
            warn!("Ignoring blank question override");
            Query::default()
        }),
        None => Query::default(),
    };

    // === Dependency Injection ===
    let sink = Arc::new(StdoutSink::new());

    // Model resolution is the one fatal failure: no handle, no probe
    let generator = Arc::new(
        OllamaGenerator::connect(&config.model.endpoint, &config.model.name, sink.clone())
            .await
            .with_context(|| {
                format!(
                    "resolving model '{}' at {}",
                    config.model.name, config.model.endpoint
                )
            })?,
    );

    let run_log: Arc<dyn RunLog> = match FileRunLog::open(&config.log.file) {
        Some(log) => Arc::new(log),
        None => Arc::new(NoRunLog),
    };

    let search_factory = Arc::new(GoogleSearchFactory::new(config.search.credentials()));

    let probe = RunProbeUseCase::new(query, generator.clone(), search_factory, run_log, sink);

    println!("Model:    {}", generator.model());
    println!("Question: {}", probe.query());
    println!();

    println!("{}", "Without RAG Approach:".cyan().bold());
    let baseline = probe.answer_without_context().await;
    println!("\n");

    println!("{}", "With RAG Approach (streaming):".cyan().bold());
    let grounded = probe.answer_with_context().await;
    println!();

    debug!(
        baseline_bytes = baseline.len(),
        grounded_bytes = grounded.len(),
        "probe finished"
    );
    info!("rag-probe finished");

    Ok(())
}
