//! Process configuration.
//!
//! All secrets and settings come from the environment, optionally seeded
//! from a local `.env` file. The configuration is built once at startup and
//! injected into the clients; a missing secret degrades the corresponding
//! feature instead of failing the process.

use std::env;

use tracing::{info, warn};

const DEFAULT_PORT: u16 = 5000;

/// Environment-derived configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind port (`PORT`, default 5000).
    pub port: u16,
    /// Groq API key for the chat relay (`GROQ_API_KEY`).
    pub groq_api_key: Option<String>,
    /// Google Custom Search API key (`GOOGLE_API_KEY`).
    pub google_api_key: Option<String>,
    /// Google Custom Search engine id (`GOOGLE_CX_ID`).
    pub google_cx_id: Option<String>,
}

impl Config {
    /// Loads configuration from the environment, reading a `.env` file
    /// first if one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: parse_port(env::var("PORT").ok()),
            groq_api_key: env_non_empty("GROQ_API_KEY"),
            google_api_key: env_non_empty("GOOGLE_API_KEY"),
            google_cx_id: env_non_empty("GOOGLE_CX_ID"),
        }
    }

    /// Logs which secrets are present, without printing their values.
    pub fn log_diagnostics(&self) {
        log_secret("GROQ_API_KEY", self.groq_api_key.is_some());
        log_secret("GOOGLE_API_KEY", self.google_api_key.is_some());
        log_secret("GOOGLE_CX_ID", self.google_cx_id.is_some());
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            groq_api_key: None,
            google_api_key: None,
            google_cx_id: None,
        }
    }
}

fn log_secret(name: &str, present: bool) {
    if present {
        info!("{name}: configured");
    } else {
        warn!("{name}: missing");
    }
}

fn parse_port(value: Option<String>) -> u16 {
    value
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn env_non_empty(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
