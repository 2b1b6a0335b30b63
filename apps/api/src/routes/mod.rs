pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Recommendations
        .route("/api/recommend", post(matching::handle_recommend))
        .route(
            "/api/internships/:id/similar",
            get(matching::handle_similar),
        )
        // Catalog browsing
        .route("/api/sectors", get(catalog::handle_sectors))
        .route("/api/locations", get(catalog::handle_locations))
        .route("/api/skills", get(catalog::handle_skills))
        .route("/api/stats", get(catalog::handle_stats))
        .with_state(state)
}
