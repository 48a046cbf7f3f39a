// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use quake_map::application::map_assembler::MapAssembler;
use quake_map::application::map_service::MapService;
use quake_map::infrastructure::config::load_app_config;
use quake_map::infrastructure::usgs_repository::HttpFeedRepository;
use quake_map::presentation::app_state::AppState;
use quake_map::presentation::handlers::{health_check, map_json, map_page, timeline_at};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config().context("Failed to load configuration")?;
    if config.tiles.access_token.is_empty() {
        tracing::warn!("No tile access token configured; base maps will not load");
    }

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpFeedRepository::new(config.feeds.clone()));

    // Create services (application layer)
    let assembler = MapAssembler::new(config.tiles.clone(), config.map.clone());
    let map_service = MapService::new(repository, assembler);

    let state = Arc::new(AppState { map_service });

    // Build router (presentation layer)
    // Compression is negotiated per response in http_response, so no CompressionLayer here
    let router = Router::new()
        .route("/", get(map_page))
        .route("/api/map", get(map_json))
        .route("/api/timeline", get(timeline_at))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Starting quake-map service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
