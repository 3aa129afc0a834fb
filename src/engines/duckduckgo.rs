//! DuckDuckGo Lite engine.
//!
//! Free, best-effort fallback backend. Scrapes the JavaScript-free
//! `lite.duckduckgo.com` results page, which renders results as table rows:
//! a row holding the titled link, followed by a row holding the snippet.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::debug;

use crate::{Engine, EngineConfig, Result, SearchError, SearchQuery, SearchResult, Source};

const ENDPOINT: &str = "https://lite.duckduckgo.com/lite/";
const PAGE_SIZE: u32 = 20;
const MAX_RESULTS: usize = 15;
const HOST_DOMAIN: &str = "duckduckgo.com";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// DuckDuckGo Lite search engine.
pub struct DuckDuckGoLite {
    config: EngineConfig,
    client: Client,
}

impl DuckDuckGoLite {
    /// Creates a new DuckDuckGo Lite engine.
    pub fn new() -> Self {
        Self {
            config: EngineConfig {
                name: "DuckDuckGo".to_string(),
                timeout: 8,
            },
            client: Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for DuckDuckGoLite {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a 1-based page to the lite page's 0-based `s` (skip) offset.
fn skip_offset(page: u32) -> u32 {
    page.saturating_sub(1) * PAGE_SIZE
}

#[async_trait]
impl Engine for DuckDuckGoLite {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        let skip = skip_offset(query.page);
        debug!(query = %query.query, skip, "fetching duckduckgo lite");

        let skip = skip.to_string();
        let form = [("q", query.query.as_str()), ("s", skip.as_str())];

        let response = self.client.post(ENDPOINT).form(&form).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::UpstreamStatus(response.status().as_u16()));
        }

        let html = response.text().await?;
        self.parse_results(&html)
    }
}

impl DuckDuckGoLite {
    /// Parses the lite results table.
    ///
    /// Rows come in link/snippet pairs. A link row arms a pending buffer
    /// (re-arming replaces an unpaired link); the next snippet row pairs
    /// with and clears it. A snippet row with nothing pending is ignored,
    /// and a dangling link at the end of the table is dropped.
    fn parse_results(&self, html: &str) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);
        let row_selector = Selector::parse("tr")
            .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;
        let link_selector = Selector::parse("a.result-link")
            .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;
        let snippet_selector = Selector::parse("td.result-snippet")
            .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;

        let mut results = Vec::new();
        let mut pending: Option<(String, String)> = None;

        for row in document.select(&row_selector) {
            if let Some(link) = row.select(&link_selector).next() {
                let title = link.text().collect::<String>().trim().to_string();
                let url = link.value().attr("href").unwrap_or_default().to_string();
                pending = Some((title, url));
            } else if let Some(cell) = row.select(&snippet_selector).next() {
                if let Some((title, url)) = pending.take() {
                    let snippet = cell.text().collect::<String>().trim().to_string();
                    results.push(SearchResult::new(title, url, snippet, Source::DuckDuckGo));
                }
            }
        }

        results.retain(|r| !r.url.contains(HOST_DOMAIN));
        results.truncate(MAX_RESULTS);
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_rows(n: usize) -> String {
        (0..n)
            .map(|i| {
                format!(
                    r#"<tr><td><a class="result-link" href="https://example.com/{i}">Result {i}</a></td></tr>
                       <tr><td class="result-snippet">Snippet {i}</td></tr>"#
                )
            })
            .collect()
    }

    #[test]
    fn test_duckduckgo_new() {
        let engine = DuckDuckGoLite::new();
        assert_eq!(engine.name(), "DuckDuckGo");
        assert_eq!(engine.config().timeout, 8);
    }

    #[test]
    fn test_skip_offset_mapping() {
        assert_eq!(skip_offset(1), 0);
        assert_eq!(skip_offset(2), 20);
        assert_eq!(skip_offset(3), 40);
    }

    #[test]
    fn test_skip_offset_zero_page() {
        assert_eq!(skip_offset(0), 0);
    }

    #[test]
    fn test_parse_results_empty_html() {
        let engine = DuckDuckGoLite::new();
        let results = engine.parse_results("<html><body></body></html>").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_results_pairs_link_and_snippet() {
        let engine = DuckDuckGoLite::new();
        let html = format!("<html><body><table>{}</table></body></html>", result_rows(2));
        let results = engine.parse_results(&html).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Result 0");
        assert_eq!(results[0].url, "https://example.com/0");
        assert_eq!(results[0].snippet, "Snippet 0");
        assert_eq!(results[0].source, Source::DuckDuckGo);
        assert_eq!(results[1].title, "Result 1");
    }

    #[test]
    fn test_parse_results_tolerates_intervening_rows() {
        let engine = DuckDuckGoLite::new();
        let html = r#"<html><body><table>
            <tr><td><a class="result-link" href="https://example.com/a">A</a></td></tr>
            <tr><td>sponsored filler</td></tr>
            <tr><td class="result-snippet">Snippet A</td></tr>
        </table></body></html>"#;
        let results = engine.parse_results(html).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "A");
        assert_eq!(results[0].snippet, "Snippet A");
    }

    #[test]
    fn test_parse_results_drops_dangling_link() {
        let engine = DuckDuckGoLite::new();
        let html = r#"<html><body><table>
            <tr><td><a class="result-link" href="https://example.com/a">A</a></td></tr>
            <tr><td class="result-snippet">Snippet A</td></tr>
            <tr><td><a class="result-link" href="https://example.com/b">Dangling</a></td></tr>
        </table></body></html>"#;
        let results = engine.parse_results(html).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "A");
    }

    #[test]
    fn test_parse_results_ignores_orphan_snippet() {
        let engine = DuckDuckGoLite::new();
        let html = r#"<html><body><table>
            <tr><td class="result-snippet">Orphan snippet</td></tr>
            <tr><td><a class="result-link" href="https://example.com/a">A</a></td></tr>
            <tr><td class="result-snippet">Snippet A</td></tr>
        </table></body></html>"#;
        let results = engine.parse_results(html).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].snippet, "Snippet A");
    }

    #[test]
    fn test_parse_results_link_rearm_replaces_unpaired() {
        let engine = DuckDuckGoLite::new();
        let html = r#"<html><body><table>
            <tr><td><a class="result-link" href="https://example.com/lost">Lost</a></td></tr>
            <tr><td><a class="result-link" href="https://example.com/kept">Kept</a></td></tr>
            <tr><td class="result-snippet">Snippet</td></tr>
        </table></body></html>"#;
        let results = engine.parse_results(html).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Kept");
        assert_eq!(results[0].url, "https://example.com/kept");
    }

    #[test]
    fn test_parse_results_filters_self_links() {
        let engine = DuckDuckGoLite::new();
        let html = r#"<html><body><table>
            <tr><td><a class="result-link" href="https://duckduckgo.com/settings">Settings</a></td></tr>
            <tr><td class="result-snippet">Internal link</td></tr>
            <tr><td><a class="result-link" href="https://example.com/a">A</a></td></tr>
            <tr><td class="result-snippet">Snippet A</td></tr>
        </table></body></html>"#;
        let results = engine.parse_results(html).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://example.com/a");
    }

    #[test]
    fn test_parse_results_caps_at_fifteen() {
        let engine = DuckDuckGoLite::new();
        let html = format!("<html><body><table>{}</table></body></html>", result_rows(20));
        let results = engine.parse_results(&html).unwrap();
        assert_eq!(results.len(), MAX_RESULTS);
        // The cap keeps the leading results.
        assert_eq!(results[0].title, "Result 0");
        assert_eq!(results[14].title, "Result 14");
    }
}
