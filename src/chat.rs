//! Chat completion relay.
//!
//! Forwards a message list to the Groq chat API and hands the upstream
//! JSON body back untouched. The gateway never reads into the payload;
//! error conditions are reported as a synthetic chat-shaped body so the
//! client can always render the response as a message.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::config::Config;

const ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
const MODEL: &str = "llama-3.3-70b-versatile";
const TEMPERATURE: f64 = 0.7;
const TIMEOUT_SECS: u64 = 30;

/// A single chat message, forwarded verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Relays chat completions to the upstream API.
pub struct ChatRelay {
    client: Client,
    api_key: Option<String>,
}

impl ChatRelay {
    /// Creates a new relay. A missing key degrades every call to a
    /// configuration-error payload instead of failing.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            api_key,
        }
    }

    /// Creates a relay from the process configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.groq_api_key.clone())
    }

    /// Returns whether an API key is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Forwards the messages upstream and returns the raw response body.
    ///
    /// Always yields a renderable JSON value; a single attempt, no retry.
    pub async fn relay(&self, messages: &[ChatMessage]) -> Value {
        let Some(api_key) = self.api_key.as_deref() else {
            return error_payload("**Error:** GROQ_API_KEY not configured.");
        };

        debug!(count = messages.len(), "relaying chat messages");
        match self.forward(api_key, messages).await {
            Ok(body) => body,
            Err(e) => {
                error!("chat relay failed: {e}");
                error_payload(&format!("**System Error:** {e}"))
            }
        }
    }

    async fn forward(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
    ) -> std::result::Result<Value, reqwest::Error> {
        let response = self
            .client
            .post(ENDPOINT)
            .bearer_auth(api_key)
            .json(&json!({
                "model": MODEL,
                "messages": messages,
                "temperature": TEMPERATURE,
            }))
            .send()
            .await?;

        // Upstream error bodies pass through too; the client renders them.
        response.json().await
    }
}

/// Builds a minimal chat-shaped payload carrying an error message.
fn error_payload(text: &str) -> Value {
    json!({
        "choices": [{"message": {"content": text}}]
    })
}
