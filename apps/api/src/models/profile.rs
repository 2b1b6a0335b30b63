use std::collections::HashSet;

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::education::EducationLevel;
use crate::models::listing::Sector;
use crate::text_util::title_case;

pub const DEFAULT_MAX_RESULTS: usize = 5;
pub const MAX_RESULTS_LIMIT: usize = 10;
pub const MAX_SKILLS: usize = 10;

/// Body of `POST /api/recommend`, as sent by clients.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub education: EducationLevel,
    pub skills: Vec<String>,
    #[serde(default)]
    pub sectors: Option<Vec<Sector>>,
    #[serde(default)]
    pub location_state: Option<String>,
    #[serde(default)]
    pub max_results: Option<usize>,
}

/// A validated profile. The ranking engine trusts every field.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub education: EducationLevel,
    /// Non-empty, de-duplicated case-insensitively, original spelling kept.
    pub skills: Vec<String>,
    /// Empty means no sector preference.
    pub sectors: Vec<Sector>,
    pub preferred_state: Option<String>,
    pub max_results: usize,
}

impl RecommendationRequest {
    pub fn validate(self) -> Result<UserProfile, AppError> {
        let mut seen = HashSet::new();
        let skills: Vec<String> = self
            .skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.to_lowercase()))
            .map(str::to_string)
            .collect();

        if skills.is_empty() {
            return Err(AppError::Validation(
                "At least one skill is required".to_string(),
            ));
        }
        if skills.len() > MAX_SKILLS {
            return Err(AppError::Validation(format!(
                "At most {MAX_SKILLS} skills are allowed, got {}",
                skills.len()
            )));
        }

        let max_results = self.max_results.unwrap_or(DEFAULT_MAX_RESULTS);
        if !(1..=MAX_RESULTS_LIMIT).contains(&max_results) {
            return Err(AppError::Validation(format!(
                "max_results must be between 1 and {MAX_RESULTS_LIMIT}"
            )));
        }

        let mut sectors = self.sectors.unwrap_or_default();
        let mut seen_sectors = HashSet::new();
        sectors.retain(|s| seen_sectors.insert(*s));

        let preferred_state = self
            .location_state
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(title_case);

        Ok(UserProfile {
            education: self.education,
            skills,
            sectors,
            preferred_state,
            max_results,
        })
    }
}

impl UserProfile {
    /// Free-text query compared against the content index.
    /// Location is deliberately not part of it.
    pub fn content_query(&self) -> String {
        let mut query = format!("{} {}", self.education, self.skills.join(" "));
        if !self.sectors.is_empty() {
            let sectors: Vec<&str> = self.sectors.iter().map(|s| s.as_str()).collect();
            query.push(' ');
            query.push_str(&sectors.join(" "));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(skills: &[&str]) -> RecommendationRequest {
        RecommendationRequest {
            education: EducationLevel::Btech,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            sectors: None,
            location_state: None,
            max_results: None,
        }
    }

    #[test]
    fn test_skills_deduplicated_case_insensitively() {
        let profile = request(&["Python", " python ", "SQL", "sql", "Excel"])
            .validate()
            .unwrap();
        assert_eq!(profile.skills, vec!["Python", "SQL", "Excel"]);
    }

    #[test]
    fn test_empty_skills_rejected() {
        let err = request(&[]).validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = request(&["  ", ""]).validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_too_many_skills_rejected() {
        let skills: Vec<String> = (0..11).map(|i| format!("skill{i}")).collect();
        let refs: Vec<&str> = skills.iter().map(String::as_str).collect();
        assert!(request(&refs).validate().is_err());
    }

    #[test]
    fn test_max_results_defaults_and_bounds() {
        assert_eq!(request(&["Python"]).validate().unwrap().max_results, 5);

        let mut req = request(&["Python"]);
        req.max_results = Some(0);
        assert!(req.validate().is_err());

        let mut req = request(&["Python"]);
        req.max_results = Some(11);
        assert!(req.validate().is_err());

        let mut req = request(&["Python"]);
        req.max_results = Some(10);
        assert_eq!(req.validate().unwrap().max_results, 10);
    }

    #[test]
    fn test_location_normalized_and_blank_ignored() {
        let mut req = request(&["Python"]);
        req.location_state = Some("  tamil nadu ".to_string());
        assert_eq!(
            req.validate().unwrap().preferred_state.as_deref(),
            Some("Tamil Nadu")
        );

        let mut req = request(&["Python"]);
        req.location_state = Some("   ".to_string());
        assert!(req.validate().unwrap().preferred_state.is_none());
    }

    #[test]
    fn test_content_query_excludes_location() {
        let mut req = request(&["Python", "SQL"]);
        req.sectors = Some(vec![Sector::Technology, Sector::Finance]);
        req.location_state = Some("Telangana".to_string());
        let profile = req.validate().unwrap();
        assert_eq!(profile.content_query(), "B.Tech Python SQL Technology Finance");
    }

    #[test]
    fn test_unknown_education_fails_to_parse() {
        let raw = r#"{"education": "PhD", "skills": ["Python"]}"#;
        assert!(serde_json::from_str::<RecommendationRequest>(raw).is_err());
    }
}
