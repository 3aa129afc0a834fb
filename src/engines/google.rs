//! Google Custom Search API engine.
//!
//! This is the paid, authoritative backend. It needs an API key and a
//! search-engine (cx) id; without both it reports itself unavailable
//! without touching the network.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::{Engine, EngineConfig, Result, SearchError, SearchQuery, SearchResult, Source};

const ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";
const PAGE_SIZE: u32 = 10;

/// Credentials for the Custom Search API.
#[derive(Debug, Clone)]
pub struct GoogleCredentials {
    pub api_key: String,
    pub cx_id: String,
}

/// Google Custom Search engine.
pub struct GoogleCse {
    config: EngineConfig,
    client: Client,
    credentials: Option<GoogleCredentials>,
}

impl GoogleCse {
    /// Creates a new engine. Either credential part missing means the
    /// engine is permanently unavailable for this process.
    pub fn new(api_key: Option<String>, cx_id: Option<String>) -> Self {
        let credentials = match (api_key, cx_id) {
            (Some(api_key), Some(cx_id)) => Some(GoogleCredentials { api_key, cx_id }),
            _ => None,
        };

        Self {
            config: EngineConfig {
                name: "Google".to_string(),
                timeout: 5,
            },
            client: Client::builder()
                .build()
                .expect("Failed to create HTTP client"),
            credentials,
        }
    }

    /// Returns whether credentials are configured.
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }
}

/// Maps a 1-based page to the API's 1-based `start` offset.
fn start_index(page: u32) -> u32 {
    (page.saturating_sub(1)) * PAGE_SIZE + 1
}

#[derive(Deserialize)]
struct CseResponse {
    items: Option<Vec<CseItem>>,
}

#[derive(Deserialize)]
struct CseItem {
    title: String,
    link: String,
    #[serde(default)]
    snippet: String,
}

#[async_trait]
impl Engine for GoogleCse {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(SearchError::MissingCredentials)?;

        let start = start_index(query.page);
        debug!(query = %query.query, start, "fetching google");

        let start = start.to_string();
        let num = PAGE_SIZE.to_string();
        let response = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("key", credentials.api_key.as_str()),
                ("cx", credentials.cx_id.as_str()),
                ("q", query.query.as_str()),
                ("start", start.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body: CseResponse = response.json().await?;
                Ok(body
                    .items
                    .unwrap_or_default()
                    .into_iter()
                    .map(|item| {
                        SearchResult::new(item.title, item.link, item.snippet, Source::Google)
                    })
                    .collect())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("google api quota exceeded");
                Err(SearchError::RateLimited)
            }
            status => {
                error!(%status, "google api error");
                Err(SearchError::UpstreamStatus(status.as_u16()))
            }
        }
    }
}
