//! Domain layer for rag-probe
//!
//! This crate contains the core value objects and prompt templates.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! A probe poses one fixed [`Query`] to a local language model twice:
//!
//! - **Baseline**: the bare question through a fixed instruction template
//! - **Grounded**: the same question plus retrieved web content
//!
//! Everything stateful (model access, web search, logging, output) lives
//! behind ports in the application layer; this crate only knows how the two
//! prompts are shaped and what the fixed query is.

pub mod core;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use core::query::{DEFAULT_QUERY, Query};
pub use prompt::PromptTemplate;
pub use util::truncate_str;
