use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Industry sectors a listing can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    Technology,
    Finance,
    Healthcare,
    Agriculture,
    Marketing,
    Manufacturing,
    Education,
}

impl Sector {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Finance => "Finance",
            Self::Healthcare => "Healthcare",
            Self::Agriculture => "Agriculture",
            Self::Marketing => "Marketing",
            Self::Manufacturing => "Manufacturing",
            Self::Education => "Education",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One internship in the catalog. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub sector: Sector,
    pub location_city: String,
    pub location_state: String,
    pub stipend: String,
    pub duration_weeks: u32,
    /// Free label; see `education::rank_of_label`.
    pub education_requirement: String,
    pub skills_required: Vec<String>,
    pub description: String,
    pub application_deadline: NaiveDate,
    pub start_date: NaiveDate,
    pub apply_url: String,
    #[serde(default)]
    pub eligibility_criteria: Vec<String>,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
}

impl Listing {
    /// Text indexed for content similarity.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.title,
            self.description,
            self.sector,
            self.skills_required.join(" "),
            self.education_requirement
        )
    }

    /// Lowercased skill names joined by spaces, as indexed by the skill matcher.
    pub fn skills_text(&self) -> String {
        self.skills_required
            .iter()
            .map(|s| s.trim().to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A listing together with the score and reason it was surfaced with.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub similarity_score: f64,
    pub reason: String,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Builds a listing with sensible defaults for the fields scoring ignores.
    pub fn listing(
        id: u32,
        title: &str,
        sector: Sector,
        skills: &[&str],
        education: &str,
        city: &str,
        state: &str,
    ) -> Listing {
        Listing {
            id,
            title: title.to_string(),
            company: format!("Company {id}"),
            sector,
            location_city: city.to_string(),
            location_state: state.to_string(),
            stipend: "₹15,000/month".to_string(),
            duration_weeks: 12,
            education_requirement: education.to_string(),
            skills_required: skills.iter().map(|s| s.to_string()).collect(),
            description: format!("{title} role working with {}", skills.join(" and ")),
            application_deadline: NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(),
            start_date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            apply_url: format!("https://example.org/apply/{id}"),
            eligibility_criteria: vec![],
            learning_outcomes: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::listing;
    use super::*;

    #[test]
    fn test_skills_text_is_lowercased() {
        let l = listing(1, "Dev", Sector::Technology, &["Python", " C++ "], "B.Tech", "Pune", "Maharashtra");
        assert_eq!(l.skills_text(), "python c++");
    }

    #[test]
    fn test_combined_text_includes_all_indexed_fields() {
        let l = listing(1, "Data Analyst Intern", Sector::Finance, &["Excel"], "B.Com", "Mumbai", "Maharashtra");
        let text = l.combined_text();
        assert!(text.contains("Data Analyst Intern"));
        assert!(text.contains("Finance"));
        assert!(text.contains("Excel"));
        assert!(text.contains("B.Com"));
        assert!(!text.contains("Mumbai"));
    }

    #[test]
    fn test_listing_deserializes_catalog_shape() {
        let raw = r#"{
            "id": 7,
            "title": "Software Developer Intern",
            "company": "TCS",
            "sector": "Technology",
            "location_city": "Hyderabad",
            "location_state": "Telangana",
            "stipend": "₹15,000/month",
            "duration_weeks": 12,
            "education_requirement": "B.Tech",
            "skills_required": ["Python", "SQL"],
            "description": "Build services",
            "application_deadline": "2025-10-15",
            "start_date": "2025-11-01",
            "apply_url": "https://example.org/apply/7",
            "eligibility_criteria": ["B.Tech in progress"],
            "learning_outcomes": ["Python programming"]
        }"#;
        let l: Listing = serde_json::from_str(raw).unwrap();
        assert_eq!(l.id, 7);
        assert_eq!(l.sector, Sector::Technology);
        assert_eq!(l.start_date, NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
    }

    #[test]
    fn test_unknown_sector_is_rejected() {
        let err = serde_json::from_str::<Sector>("\"Aerospace\"");
        assert!(err.is_err());
    }
}
