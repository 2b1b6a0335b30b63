//! Read-only catalog browsing endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::catalog::stats::{self, CatalogStats, Locations};
use crate::models::listing::Sector;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SectorsResponse {
    pub sectors: Vec<Sector>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

/// GET /api/sectors
pub async fn handle_sectors(State(state): State<AppState>) -> Json<SectorsResponse> {
    Json(SectorsResponse {
        sectors: stats::sectors(state.engine.listings()),
    })
}

/// GET /api/locations
pub async fn handle_locations(State(state): State<AppState>) -> Json<Locations> {
    Json(stats::locations(state.engine.listings()))
}

/// GET /api/skills
pub async fn handle_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: stats::skills(state.engine.listings()),
    })
}

/// GET /api/stats
pub async fn handle_stats(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(stats::compute_stats(state.engine.listings()))
}
