//! Google Programmable Search adapter.
//!
//! Queries the Custom Search JSON API and aggregates the result snippets
//! into one content string for prompt grounding. Two credentials are
//! required: the search engine identifier (the `cx` parameter) and an API
//! key. The factory validates them up front and refuses to construct a tool
//! without both.

use async_trait::async_trait;
use probe_application::ports::search_tool::{SearchError, SearchTool, SearchToolFactory};
use std::sync::Arc;
use tracing::{debug, warn};

/// Custom Search JSON API endpoint.
const CSE_API_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Explicit search credentials.
///
/// Filled in by the configuration layer, which also overlays the
/// `GOOGLE_CSE_ID` / `GOOGLE_API_KEY` environment variables. The adapter
/// itself never reads the environment.
#[derive(Debug, Clone, Default)]
pub struct SearchCredentials {
    pub engine_id: Option<String>,
    pub api_key: Option<String>,
}

impl SearchCredentials {
    pub fn new(engine_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            engine_id: Some(engine_id.into()),
            api_key: Some(api_key.into()),
        }
    }

    /// Require both credentials, naming whichever is absent.
    fn validate(&self) -> Result<(String, String), SearchError> {
        let engine_id = self.engine_id.as_deref().filter(|v| !v.trim().is_empty());
        let api_key = self.api_key.as_deref().filter(|v| !v.trim().is_empty());

        match (engine_id, api_key) {
            (Some(engine_id), Some(api_key)) => {
                Ok((engine_id.to_string(), api_key.to_string()))
            }
            (None, Some(_)) => Err(SearchError::MissingCredentials(
                "search engine id".to_string(),
            )),
            (Some(_), None) => Err(SearchError::MissingCredentials("api key".to_string())),
            (None, None) => Err(SearchError::MissingCredentials(
                "search engine id and api key".to_string(),
            )),
        }
    }
}

/// Builds [`GoogleSearchTool`]s from explicit credentials.
pub struct GoogleSearchFactory {
    credentials: SearchCredentials,
    client: reqwest::Client,
}

impl GoogleSearchFactory {
    pub fn new(credentials: SearchCredentials) -> Self {
        Self {
            credentials,
            client: reqwest::Client::new(),
        }
    }
}

impl SearchToolFactory for GoogleSearchFactory {
    fn build(&self) -> Result<Arc<dyn SearchTool>, SearchError> {
        let (engine_id, api_key) = self.credentials.validate().inspect_err(|e| {
            warn!("search tool not constructed: {e}");
        })?;

        Ok(Arc::new(GoogleSearchTool {
            engine_id,
            api_key,
            client: self.client.clone(),
        }))
    }
}

/// Search tool backed by the Custom Search JSON API.
pub struct GoogleSearchTool {
    engine_id: String,
    api_key: String,
    client: reqwest::Client,
}

#[async_trait]
impl SearchTool for GoogleSearchTool {
    fn name(&self) -> &str {
        "google_search"
    }

    fn description(&self) -> &str {
        "Search Google for recent results."
    }

    async fn run(&self, query: &str) -> Result<String, SearchError> {
        debug!(query = %query, "running google search");

        let response = self
            .client
            .get(CSE_API_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
            ])
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::BadStatus(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        let content = aggregate_items(&body);
        debug!(bytes = content.len(), "aggregated search results");
        Ok(content)
    }
}

/// Aggregate the `items` array of a Custom Search response into one string.
///
/// One `title: snippet (link)` line per result. Items without a snippet are
/// skipped; a response without items (a query that matched nothing) yields
/// an empty string.
fn aggregate_items(body: &serde_json::Value) -> String {
    let Some(items) = body["items"].as_array() else {
        return String::new();
    };

    let mut lines = Vec::new();
    for item in items {
        let title = item["title"].as_str().unwrap_or("").trim();
        let snippet = item["snippet"].as_str().unwrap_or("").trim();
        let link = item["link"].as_str().unwrap_or("").trim();

        if snippet.is_empty() {
            continue;
        }

        let mut line = String::new();
        if !title.is_empty() {
            line.push_str(title);
            line.push_str(": ");
        }
        line.push_str(snippet);
        if !link.is_empty() {
            line.push_str(&format!(" ({link})"));
        }
        lines.push(line);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn aggregates_title_snippet_and_link() {
        let body = json!({
            "items": [
                {
                    "title": "Moon landing",
                    "snippet": "No cricketer has landed on the moon.",
                    "link": "https://example.com/moon"
                },
                {
                    "title": "Dhoni career",
                    "snippet": "A list of actual achievements.",
                    "link": "https://example.com/career"
                }
            ]
        });

        let content = aggregate_items(&body);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Moon landing: No cricketer has landed on the moon. (https://example.com/moon)"
        );
        assert!(lines[1].starts_with("Dhoni career: "));
    }

    #[test]
    fn no_items_yields_empty_string() {
        let body = json!({ "searchInformation": { "totalResults": "0" } });
        assert_eq!(aggregate_items(&body), "");
    }

    #[test]
    fn items_without_snippets_are_skipped() {
        let body = json!({
            "items": [
                { "title": "Only a title", "link": "https://example.com" },
                { "title": "Real", "snippet": "Has content.", "link": "https://example.com/r" }
            ]
        });

        let content = aggregate_items(&body);
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("Has content."));
    }

    #[test]
    fn snippet_without_title_or_link_stands_alone() {
        let body = json!({
            "items": [
                { "snippet": "Bare snippet." }
            ]
        });

        assert_eq!(aggregate_items(&body), "Bare snippet.");
    }

    #[test]
    fn factory_refuses_construction_without_credentials() {
        let factory = GoogleSearchFactory::new(SearchCredentials::default());
        let result = factory.build();
        match result {
            Err(SearchError::MissingCredentials(which)) => {
                assert!(which.contains("engine id"));
                assert!(which.contains("api key"));
            }
            _ => panic!("expected missing credentials"),
        }
    }

    #[test]
    fn factory_names_the_single_missing_credential() {
        let factory = GoogleSearchFactory::new(SearchCredentials {
            engine_id: Some("engine".to_string()),
            api_key: None,
        });
        match factory.build() {
            Err(SearchError::MissingCredentials(which)) => assert_eq!(which, "api key"),
            _ => panic!("expected missing credentials"),
        }
    }

    #[test]
    fn blank_credentials_count_as_missing() {
        let factory = GoogleSearchFactory::new(SearchCredentials::new("  ", ""));
        assert!(matches!(
            factory.build(),
            Err(SearchError::MissingCredentials(_))
        ));
    }

    #[test]
    fn constructed_tool_reports_name_and_description() {
        let factory = GoogleSearchFactory::new(SearchCredentials::new("engine", "key"));
        let tool = factory.build().unwrap();
        assert_eq!(tool.name(), "google_search");
        assert_eq!(tool.description(), "Search Google for recent results.");
    }
}
