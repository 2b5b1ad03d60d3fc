//! Web search port
//!
//! The search capability is modeled as a named, described tool plus a
//! factory that constructs it from explicit credentials. Construction is
//! fallible: with credentials missing the factory returns
//! [`SearchError::MissingCredentials`] rather than a handle that fails on
//! first use, so callers decide up front how to degrade.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors from constructing or running the search tool
#[derive(Error, Debug)]
pub enum SearchError {
    /// A credential required to construct the tool is absent.
    #[error("Missing search credentials: {0}")]
    MissingCredentials(String),

    #[error("Search request failed: {0}")]
    RequestFailed(String),

    #[error("Search API returned status {0}")]
    BadStatus(u16),

    #[error("Invalid search response: {0}")]
    InvalidResponse(String),
}

/// A web search tool: free-text query in, one aggregated content string out
#[async_trait]
pub trait SearchTool: Send + Sync {
    /// Short machine-readable tool name
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does
    fn description(&self) -> &str;

    /// Run the search and aggregate the results into a single string.
    ///
    /// A query that matches nothing yields `Ok` with an empty string;
    /// `Err` is reserved for transport and API failures.
    async fn run(&self, query: &str) -> Result<String, SearchError>;
}

/// Builds a fresh [`SearchTool`] from explicit configuration
pub trait SearchToolFactory: Send + Sync {
    fn build(&self) -> Result<Arc<dyn SearchTool>, SearchError>;
}
