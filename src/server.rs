//! HTTP server initialization and runtime setup.
//!
//! Builds the planet source, upstream clients and caches from configuration,
//! then runs the Axum server until Ctrl-C.

use crate::application::services::{AsteroidService, ExoplanetService};
use crate::config::{Config, PlanetSource};
use crate::domain::repositories::PlanetRepository;
use crate::infrastructure::cache::ResultCache;
use crate::infrastructure::persistence::SqlitePlanetRepository;
use crate::infrastructure::upstream::{
    HttpTransport, LivePlanetRepository, NeoFeedClient, ReqwestTransport, ResilientFetcher,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds shared state over the given transport.
///
/// Both upstream clients share one [`ResilientFetcher`] and therefore one
/// retry policy. Each cache is created here and owned by its consumer.
pub fn build_state_with_transport(config: &Config, transport: Arc<dyn HttpTransport>) -> AppState {
    let fetcher = Arc::new(ResilientFetcher::new(transport, config.retry_policy()));

    let repository: Arc<dyn PlanetRepository> = match config.planet_source {
        PlanetSource::Live => Arc::new(LivePlanetRepository::new(
            fetcher.clone(),
            Arc::new(ResultCache::new(
                "exoplanets",
                config.exoplanet_cache_capacity,
            )),
            config.exoplanet_archive_url.clone(),
        )),
        PlanetSource::Sqlite => Arc::new(SqlitePlanetRepository::new(
            config.database_path.clone(),
        )),
    };

    let neo_client = NeoFeedClient::new(
        fetcher,
        config.neo_feed_url.clone(),
        config.neo_feed_window_days,
    );
    let asteroid_service = AsteroidService::new(
        neo_client,
        Arc::new(ResultCache::new("neo_feed", config.feed_cache_capacity)),
        config.nasa_api_key.clone(),
    );

    AppState::new(
        Arc::new(ExoplanetService::new(repository)),
        Arc::new(asteroid_service),
    )
}

/// Builds shared state with the production HTTP transport.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be initialized.
pub fn build_state(config: &Config) -> Result<AppState> {
    let transport = ReqwestTransport::new(config.retry_policy().attempt_timeout)
        .context("Failed to build HTTP client")?;
    Ok(build_state_with_transport(config, Arc::new(transport)))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Planet source (live archive or SQLite mirror)
/// - Upstream HTTP client with retry policy
/// - Result caches
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - HTTP client construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    match config.planet_source {
        PlanetSource::Live => tracing::info!("Serving planets from the live archive"),
        PlanetSource::Sqlite => {
            if !config.database_path.exists() {
                tracing::warn!(
                    path = %config.database_path.display(),
                    "SQLite mirror not found; planet routes will report store_unavailable"
                );
            }
            tracing::info!("Serving planets from the SQLite mirror");
        }
    }

    let app = app_router(state, &config)?;

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
