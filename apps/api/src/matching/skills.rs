//! Skill matching: a skills-only TF-IDF index blended with exact set overlap.

use std::collections::HashSet;

use crate::matching::tfidf::{TfidfIndex, VectorizerOptions};
use crate::matching::ScoreError;
use crate::models::listing::Listing;

const INDEX_WEIGHT: f64 = 0.6;
const JACCARD_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone)]
pub struct SkillMatcher {
    index: TfidfIndex,
    skill_sets: Vec<HashSet<String>>,
}

impl SkillMatcher {
    pub fn build(listings: &[Listing]) -> Self {
        let texts: Vec<String> = listings.iter().map(Listing::skills_text).collect();
        Self {
            index: TfidfIndex::build(&texts, VectorizerOptions::skills()),
            skill_sets: listings
                .iter()
                .map(|l| normalized_set(&l.skills_required))
                .collect(),
        }
    }

    /// `0.6 × index similarity + 0.4 × Jaccard`, one value per listing.
    pub fn score(&self, user_skills: &[String]) -> Result<Vec<f64>, ScoreError> {
        let query = user_skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        let similarities = self.index.score_query(&query)?;
        if similarities.len() != self.skill_sets.len() {
            return Err(ScoreError::LengthMismatch {
                expected: self.skill_sets.len(),
                actual: similarities.len(),
            });
        }

        let user_set = normalized_set(user_skills);
        Ok(similarities
            .into_iter()
            .zip(&self.skill_sets)
            .map(|(sim, listing_set)| {
                INDEX_WEIGHT * sim + JACCARD_WEIGHT * jaccard(&user_set, listing_set)
            })
            .collect())
    }

    pub fn vocabulary_len(&self) -> usize {
        self.index.vocabulary_len()
    }
}

fn normalized_set(skills: &[String]) -> HashSet<String> {
    skills.iter().map(|s| s.trim().to_lowercase()).collect()
}

/// `|a ∩ b| / |a ∪ b|`, or 0 when both sets are empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Listing skills the user also has, case-insensitively, in listing order.
pub fn overlapping_skills<'a>(user_skills: &[String], listing: &'a Listing) -> Vec<&'a str> {
    let user_set = normalized_set(user_skills);
    let mut seen = HashSet::new();
    listing
        .skills_required
        .iter()
        .map(|s| s.trim())
        .filter(|s| {
            let key = s.to_lowercase();
            user_set.contains(&key) && seen.insert(key)
        })
        .collect()
}
