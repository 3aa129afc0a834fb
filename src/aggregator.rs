//! Dual-backend search aggregation.
//!
//! Runs the primary (API) and fallback (scrape) engines concurrently and
//! applies a fixed priority rule: the primary's results win whenever it
//! returns any, otherwise the fallback's results are used. The two sources
//! are never merged.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{timeout, Duration};
use tracing::{debug, warn};

use crate::{Engine, Result, SearchError, SearchQuery, SearchResult};

/// Aggregates the two search backends with a priority/fallback policy.
pub struct Aggregator {
    primary: Arc<dyn Engine>,
    fallback: Arc<dyn Engine>,
}

impl Aggregator {
    /// Creates a new aggregator over a primary and a fallback engine.
    pub fn new(primary: Arc<dyn Engine>, fallback: Arc<dyn Engine>) -> Self {
        Self { primary, fallback }
    }

    /// Searches both backends concurrently and returns the final result list.
    ///
    /// The fallback's request starts immediately alongside the primary's, so
    /// its latency is hidden behind the primary call; its result is simply
    /// discarded when the primary wins. A discarded task is detached, not
    /// cancelled, and runs to completion or timeout on its own.
    ///
    /// When both backends come up empty on page 1 the list is replaced with
    /// a single synthetic "no results" record; on later pages an empty list
    /// is returned as-is, signaling end-of-results.
    pub async fn aggregate(&self, query: &SearchQuery) -> Vec<SearchResult> {
        let primary_task = spawn_engine(Arc::clone(&self.primary), query.clone());
        let fallback_task = spawn_engine(Arc::clone(&self.fallback), query.clone());

        // The primary's outcome is always observed before any decision.
        let primary_outcome = primary_task
            .await
            .unwrap_or(Err(SearchError::Timeout));

        let results = match primary_outcome {
            Ok(results) if !results.is_empty() => {
                debug!(
                    engine = self.primary.name(),
                    count = results.len(),
                    "primary returned results"
                );
                results
            }
            outcome => {
                match outcome {
                    Ok(_) => debug!(engine = self.primary.name(), "primary empty, using fallback"),
                    Err(e) => warn!(
                        engine = self.primary.name(),
                        "primary unavailable ({}), using fallback", e
                    ),
                }
                fallback_task
                    .await
                    .unwrap_or(Err(SearchError::Timeout))
                    .unwrap_or_default()
            }
        };

        if results.is_empty() && query.page == 1 {
            return vec![SearchResult::no_results()];
        }
        results
    }
}

/// Spawns an engine call as an independent task bounded by the engine's
/// configured timeout.
fn spawn_engine(
    engine: Arc<dyn Engine>,
    query: SearchQuery,
) -> JoinHandle<Result<Vec<SearchResult>>> {
    tokio::spawn(async move {
        let limit = Duration::from_secs(engine.config().timeout);
        match timeout(limit, engine.search(&query)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(engine = engine.name(), "engine timed out");
                Err(SearchError::Timeout)
            }
        }
    })
}
