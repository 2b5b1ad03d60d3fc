//! Query value object

use serde::{Deserialize, Serialize};

/// The built-in fabricated query.
///
/// Asks about an event that never happened, so an ungrounded model has
/// nothing truthful to say about it. That makes the contrast between the
/// baseline and grounded answers easy to see.
pub const DEFAULT_QUERY: &str = "impact of Ms Dhoni's moon landing";

/// The fixed question posed to the model (Value Object)
///
/// Set once when the probe is constructed and immutable afterwards, so both
/// generation paths answer exactly the same question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    content: String,
}

impl Query {
    /// Create a new query
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Query content cannot be empty");
        Self { content }
    }

    /// Try to create a new query, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY)
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
