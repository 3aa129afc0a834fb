//! Search query representation.

use serde::{Deserialize, Serialize};

/// A search query with pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The search terms.
    pub query: String,
    /// Page number (1-indexed).
    pub page: u32,
}

impl SearchQuery {
    /// Creates a new search query for the first page.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
        }
    }

    /// Sets the page number. Non-positive pages are clamped to 1.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_new() {
        let query = SearchQuery::new("rust programming");
        assert_eq!(query.query, "rust programming");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_search_query_with_page() {
        let query = SearchQuery::new("test").with_page(3);
        assert_eq!(query.page, 3);
    }

    #[test]
    fn test_search_query_with_page_zero_clamped() {
        let query = SearchQuery::new("test").with_page(0);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_search_query_serialization() {
        let query = SearchQuery::new("test").with_page(2);
        let json = serde_json::to_string(&query).unwrap();
        assert!(json.contains("\"query\":\"test\""));
        assert!(json.contains("\"page\":2"));
    }
}
