//! Axum route handlers for the recommendation API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::EngineError;
use crate::models::listing::ScoredListing;
use crate::models::profile::{RecommendationRequest, DEFAULT_MAX_RESULTS, MAX_RESULTS_LIMIT};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SimilarQuery {
    pub max_results: Option<usize>,
}

/// POST /api/recommend
///
/// Ranks the catalog against the submitted profile. An empty list is a valid
/// answer when nothing clears the relevance floor.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<Vec<ScoredListing>>, AppError> {
    let profile = request.validate()?;
    Ok(Json(state.engine.recommend(&profile)))
}

/// GET /api/internships/:id/similar
pub async fn handle_similar(
    State(state): State<AppState>,
    Path(listing_id): Path<u32>,
    Query(query): Query<SimilarQuery>,
) -> Result<Json<Vec<ScoredListing>>, AppError> {
    let max_results = query.max_results.unwrap_or(DEFAULT_MAX_RESULTS);
    if !(1..=MAX_RESULTS_LIMIT).contains(&max_results) {
        return Err(AppError::Validation(format!(
            "max_results must be between 1 and {MAX_RESULTS_LIMIT}"
        )));
    }

    let results = state
        .engine
        .similar_to(listing_id, max_results)
        .map_err(|e: EngineError| AppError::NotFound(e.to_string()))?;
    Ok(Json(results))
}
