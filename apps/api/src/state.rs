use std::sync::Arc;

use crate::config::Config;
use crate::matching::engine::RecommendationEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; read-only while serving.
    pub engine: Arc<RecommendationEngine>,
    pub config: Config,
}
