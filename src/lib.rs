//! # scout-search
//!
//! A small web gateway that fronts two capabilities for a browser client:
//!
//! - A meta web search that queries the Google Custom Search API and a
//!   DuckDuckGo Lite scrape concurrently, preferring the API whenever it
//!   returns results and falling back to the scrape otherwise.
//! - A chat completion relay that forwards conversations to the Groq API
//!   and passes the response back untouched.
//!
//! Both degrade gracefully when their upstream credentials are missing;
//! no backend failure ever surfaces as an HTTP error to the client.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use scout_search::{
//!     engines::{DuckDuckGoLite, GoogleCse},
//!     Aggregator, SearchQuery,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let aggregator = Aggregator::new(
//!         Arc::new(GoogleCse::new(None, None)),
//!         Arc::new(DuckDuckGoLite::new()),
//!     );
//!
//!     let query = SearchQuery::new("rust programming");
//!     for result in aggregator.aggregate(&query).await {
//!         println!("{}: {}", result.title, result.url);
//!     }
//! }
//! ```

mod aggregator;
mod chat;
mod config;
mod engine;
mod error;
mod query;
mod result;
mod server;

pub mod engines;

pub use aggregator::Aggregator;
pub use chat::{ChatMessage, ChatRelay};
pub use config::Config;
pub use engine::{Engine, EngineConfig};
pub use error::{Result, SearchError};
pub use query::SearchQuery;
pub use result::{SearchResult, Source};
pub use server::{create_router, AppState};
