//! Error types for the search gateway.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
///
/// Any of these at a backend boundary means the backend is unavailable.
/// The aggregator converts them into a fallback decision; none of them
/// reach the HTTP layer.
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Backend credentials are not configured.
    #[error("Search API credentials not configured")]
    MissingCredentials,

    /// Backend returned HTTP 429.
    #[error("Search API quota exceeded")]
    RateLimited,

    /// Backend returned an unexpected status code.
    #[error("Unexpected upstream status: {0}")]
    UpstreamStatus(u16),

    /// Search timeout exceeded.
    #[error("Search timeout exceeded")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse() {
        let err = SearchError::Parse("invalid selector".to_string());
        assert_eq!(err.to_string(), "Failed to parse response: invalid selector");
    }

    #[test]
    fn test_error_display_missing_credentials() {
        let err = SearchError::MissingCredentials;
        assert_eq!(err.to_string(), "Search API credentials not configured");
    }

    #[test]
    fn test_error_display_rate_limited() {
        let err = SearchError::RateLimited;
        assert_eq!(err.to_string(), "Search API quota exceeded");
    }

    #[test]
    fn test_error_display_upstream_status() {
        let err = SearchError::UpstreamStatus(503);
        assert_eq!(err.to_string(), "Unexpected upstream status: 503");
    }

    #[test]
    fn test_error_display_timeout() {
        let err = SearchError::Timeout;
        assert_eq!(err.to_string(), "Search timeout exceeded");
    }

    #[test]
    fn test_error_debug() {
        let err = SearchError::Timeout;
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Timeout"));
    }
}
