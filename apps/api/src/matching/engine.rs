//! Ranking engine: blends every signal into one score and picks the top results.
//!
//! Built once from the catalog and read-only afterwards, so one instance can be
//! shared across request handlers behind an `Arc`.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::matching::compatibility::{education_score, location_score, sector_score};
use crate::matching::explain::explain;
use crate::matching::skills::SkillMatcher;
use crate::matching::tfidf::{TfidfIndex, VectorizerOptions};
use crate::matching::{EngineError, ScoreError};
use crate::models::listing::{Listing, ScoredListing};
use crate::models::profile::UserProfile;

/// Composite scores below this are noise and never returned.
pub const RELEVANCE_FLOOR: f64 = 0.2;
/// Minimum content similarity for `similar_to` results.
pub const SIMILARITY_FLOOR: f64 = 0.1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub content: f64,
    pub skill: f64,
    pub education: f64,
    pub location: f64,
    pub sector: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            content: 0.40,
            skill: 0.30,
            education: 0.15,
            location: 0.10,
            sector: 0.05,
        }
    }
}

/// Per-listing signal values for one request.
#[derive(Debug, Clone, Copy)]
pub struct SignalScores {
    pub content: f64,
    pub skill: f64,
    pub education: f64,
    pub location: f64,
    pub sector: f64,
}

pub fn compute_composite_score(signals: &SignalScores, weights: &ScoreWeights) -> f64 {
    (weights.content * signals.content
        + weights.skill * signals.skill
        + weights.education * signals.education
        + weights.location * signals.location
        + weights.sector * signals.sector)
        .clamp(0.0, 1.0)
}

pub struct RecommendationEngine {
    listings: Vec<Listing>,
    content_index: TfidfIndex,
    skill_matcher: SkillMatcher,
    weights: ScoreWeights,
}

impl RecommendationEngine {
    pub fn build(listings: Vec<Listing>) -> Result<Self, EngineError> {
        if listings.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        let texts: Vec<String> = listings.iter().map(Listing::combined_text).collect();
        let content_index = TfidfIndex::build(&texts, VectorizerOptions::content());
        let skill_matcher = SkillMatcher::build(&listings);

        info!(
            listings = listings.len(),
            content_terms = content_index.vocabulary_len(),
            skill_terms = skill_matcher.vocabulary_len(),
            "Recommendation engine indexed"
        );

        Ok(Self {
            listings,
            content_index,
            skill_matcher,
            weights: ScoreWeights::default(),
        })
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Composite score for every listing, in catalog order.
    pub fn score_all(&self, profile: &UserProfile) -> Vec<f64> {
        let n = self.listings.len();
        let content = with_fallback(
            "content",
            n,
            self.content_index.score_query(&profile.content_query()),
        );
        let skill = with_fallback("skill", n, self.skill_matcher.score(&profile.skills));

        self.listings
            .iter()
            .enumerate()
            .map(|(i, listing)| {
                let signals = SignalScores {
                    content: content[i],
                    skill: skill[i],
                    education: education_score(profile.education, listing),
                    location: location_score(profile.preferred_state.as_deref(), listing),
                    sector: sector_score(&profile.sectors, listing),
                };
                compute_composite_score(&signals, &self.weights)
            })
            .collect()
    }

    /// Top listings for `profile`, best first, never below [`RELEVANCE_FLOOR`].
    pub fn recommend(&self, profile: &UserProfile) -> Vec<ScoredListing> {
        let started = Instant::now();
        let scores = self.score_all(profile);

        let results: Vec<ScoredListing> = rank_descending(&scores)
            .into_iter()
            .take(profile.max_results * 2)
            .filter(|&i| scores[i] >= RELEVANCE_FLOOR)
            .take(profile.max_results)
            .map(|i| {
                let listing = &self.listings[i];
                ScoredListing {
                    listing: listing.clone(),
                    similarity_score: scores[i],
                    reason: explain(listing, profile, scores[i]),
                }
            })
            .collect();

        let mean = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| r.similarity_score).sum::<f64>() / results.len() as f64
        };
        info!(
            results = results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            mean_score = mean,
            "Generated recommendations"
        );

        results
    }

    /// Listings whose content is closest to listing `listing_id`, excluding it.
    pub fn similar_to(
        &self,
        listing_id: u32,
        max_results: usize,
    ) -> Result<Vec<ScoredListing>, EngineError> {
        let position = self
            .listings
            .iter()
            .position(|l| l.id == listing_id)
            .ok_or(EngineError::UnknownListing(listing_id))?;
        let target = &self.listings[position];

        let n = self.listings.len();
        let scores = with_fallback("similarity", n, self.content_index.score_document(position));

        let results = rank_descending(&scores)
            .into_iter()
            .filter(|&i| i != position)
            .take(max_results)
            .filter(|&i| scores[i] > SIMILARITY_FLOOR)
            .map(|i| ScoredListing {
                listing: self.listings[i].clone(),
                similarity_score: scores[i],
                reason: format!("Similar to {} at {}", target.title, target.company),
            })
            .collect::<Vec<_>>();

        debug!(listing_id, results = results.len(), "Found similar listings");
        Ok(results)
    }
}

/// Indices sorted by score, highest first. Ties keep catalog order.
fn rank_descending(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
}

/// A failed signal contributes zeros instead of failing the request.
fn with_fallback(signal: &str, len: usize, result: Result<Vec<f64>, ScoreError>) -> Vec<f64> {
    match result {
        Ok(scores) if scores.len() == len => scores,
        Ok(scores) => {
            let err = ScoreError::LengthMismatch {
                expected: len,
                actual: scores.len(),
            };
            warn!(signal, error = %err, "Scorer failed, using zero scores");
            vec![0.0; len]
        }
        Err(err) => {
            warn!(signal, error = %err, "Scorer failed, using zero scores");
            vec![0.0; len]
        }
    }
}
