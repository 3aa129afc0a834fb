//! Scout Search - web search and chat gateway server.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scout_search::{
    engines::{DuckDuckGoLite, GoogleCse},
    Aggregator, AppState, ChatRelay, Config,
};

/// Scout Search - API-first web search with a scrape fallback, plus a chat relay
#[derive(Parser)]
#[command(name = "scout-search")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind port (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::from_env();
    config.log_diagnostics();

    let state = Arc::new(AppState {
        aggregator: Aggregator::new(
            Arc::new(GoogleCse::new(
                config.google_api_key.clone(),
                config.google_cx_id.clone(),
            )),
            Arc::new(DuckDuckGoLite::new()),
        ),
        chat: ChatRelay::from_config(&config),
    });

    let router = scout_search::create_router(state);

    let port = cli.port.unwrap_or(config.port);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("listening on 0.0.0.0:{port}");

    axum::serve(listener, router).await?;

    Ok(())
}
