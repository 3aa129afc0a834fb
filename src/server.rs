//! HTTP front for the gateway.
//!
//! Three routes: the static entry page, the chat relay, and the search
//! aggregator. Every handler returns a well-formed JSON body regardless of
//! what the upstream backends do.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::{Aggregator, ChatMessage, ChatRelay, SearchQuery, SearchResult};

/// Shared per-process state handed to every handler.
pub struct AppState {
    pub aggregator: Aggregator,
    pub chat: ChatRelay,
}

/// Builds the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/search", get(search_handler))
        .with_state(state)
        // Static entry page and assets
        .fallback_service(ServeDir::new("static"))
        .layer(cors)
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: String,
    #[serde(default = "default_page")]
    page: u32,
}

fn default_page() -> u32 {
    1
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

async fn chat_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Json<Value> {
    Json(state.chat.relay(&request.messages).await)
}

async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    if params.q.trim().is_empty() {
        return Json(SearchResponse { results: vec![] });
    }

    let query = SearchQuery::new(params.q).with_page(params.page);
    let results = state.aggregator.aggregate(&query).await;
    Json(SearchResponse { results })
}
