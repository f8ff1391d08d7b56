//! HTTP gateway: router wiring, shared state, and the serve loop.

pub mod locations;

use crate::upstream::AutocompleteClient;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;

/// State shared by all handlers. The client is immutable, so concurrent
/// requests need no coordination beyond the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub autocomplete: Arc<AutocompleteClient>,
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/locations", get(locations::browse))
        .route("/locations/{search_string}", get(locations::search))
        .route("/health", get(locations::health))
        .with_state(state)
}

/// Bind `addr` and serve until SIGINT/SIGTERM.
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
