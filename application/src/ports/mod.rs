//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod output_sink;
pub mod run_log;
pub mod search_tool;
pub mod text_generator;
