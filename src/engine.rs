//! Search engine trait and configuration.

use async_trait::async_trait;

use crate::{Result, SearchQuery, SearchResult};

/// Configuration for a search engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Display name of the engine.
    pub name: String,
    /// Request timeout in seconds, enforced by the aggregator.
    pub timeout: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            timeout: 5,
        }
    }
}

/// Trait for implementing search backends.
///
/// An engine reports availability through its return value: `Err(_)` means
/// the backend could not be used at all, `Ok(vec![])` means it was reached
/// but had nothing for this page.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Returns the engine configuration.
    fn config(&self) -> &EngineConfig;

    /// Performs a search and returns results in backend order.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>>;

    /// Returns the engine name.
    fn name(&self) -> &str {
        &self.config().name
    }
}
