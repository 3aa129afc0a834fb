//! Search result types.

use serde::{Deserialize, Serialize};

/// Which backend produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Google Custom Search API.
    Google,
    /// DuckDuckGo Lite HTML scrape.
    DuckDuckGo,
    /// Synthesized by the gateway itself (e.g. the "no results" record).
    System,
}

/// A single search result in the common shape returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title.
    pub title: String,
    /// Result URL.
    pub url: String,
    /// Result description/snippet.
    pub snippet: String,
    /// Backend that produced the result.
    pub source: Source,
}

impl SearchResult {
    /// Creates a new search result.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
        source: Source,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
            source,
        }
    }

    /// The synthetic record substituted when both backends come up empty
    /// on the first page.
    pub fn no_results() -> Self {
        Self::new(
            "No Results Found",
            "#",
            "Both Google and DuckDuckGo failed to return results.",
            Source::System,
        )
    }
}
