//! Web search adapters
//!
//! Implements the SearchTool port against the Google Custom Search JSON API.

mod google;

pub use google::{GoogleSearchFactory, GoogleSearchTool, SearchCredentials};
