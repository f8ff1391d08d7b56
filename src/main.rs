use clap::Parser;
use destinations::config::Config;
use destinations::gateway::{self, AppState};
use destinations::upstream::AutocompleteClient;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::parse();
    tracing::info!(
        bind = %config.bind,
        upstream = %config.upstream_url,
        timeout_secs = config.upstream_timeout_secs,
        "starting destinations"
    );

    let autocomplete = AutocompleteClient::new(&config.upstream_url, config.upstream_timeout())?;
    let state = AppState {
        autocomplete: Arc::new(autocomplete),
    };

    gateway::serve(config.bind, state).await
}
