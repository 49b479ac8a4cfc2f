//! Movie Catalog gateway: main entry point

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use movie_catalog::adapters::http::{app_router, MovieAppState};
use movie_catalog::adapters::{RestMetadataClient, RestReviewsClient};
use movie_catalog::application::GetMovieHandler;
use movie_catalog::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config)?;

    let metadata = RestMetadataClient::new(config.downstream.metadata_client())
        .context("Failed to create metadata client")?;
    let reviews = RestReviewsClient::new(config.downstream.reviews_client())
        .context("Failed to create reviews client")?;

    let handler = GetMovieHandler::new(Arc::new(metadata), Arc::new(reviews));
    let app = app_router(MovieAppState::new(handler), config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        %addr,
        metadata_url = %config.downstream.metadata_url,
        reviews_url = %config.downstream.reviews_url,
        "Movie catalog gateway listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Movie catalog gateway stopped");
    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` overrides the configured filter.
fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))
        .context("Invalid log filter")?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.is_production() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
