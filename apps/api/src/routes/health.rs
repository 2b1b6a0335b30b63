use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Internship Recommendation API",
        "status": "active",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health
/// Reports service status and the size of the indexed catalog.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "engine_status": "loaded",
        "total_internships": state.engine.listings().len(),
        "catalog_path": state.config.catalog_path,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
