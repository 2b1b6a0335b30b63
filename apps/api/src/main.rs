mod catalog;
mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;
mod text_util;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::stats::compute_stats;
use crate::catalog::{CatalogSource, JsonFileCatalog};
use crate::config::Config;
use crate::matching::engine::RecommendationEngine;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Recommendation API v{}", env!("CARGO_PKG_VERSION"));

    // Load the catalog and build both indexes; the service cannot run without them.
    let source = JsonFileCatalog::new(&config.catalog_path);
    let listings = source
        .load()
        .await
        .with_context(|| format!("Failed to load catalog from {}", config.catalog_path))?;
    let engine = RecommendationEngine::build(listings).context("Failed to index catalog")?;

    let stats = compute_stats(engine.listings());
    info!(
        sectors = stats.total_sectors,
        companies = stats.total_companies,
        cities = stats.total_locations,
        "Catalog summary"
    );

    let cors = build_cors(&config.allowed_origins);
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;

    let state = AppState {
        engine: Arc::new(engine),
        config,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS limited to the configured origins. Unparseable origins are skipped.
fn build_cors(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
