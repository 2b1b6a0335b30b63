//! Human-readable reasons built from the same signals used for scoring.

use crate::matching::compatibility::{location_matches, meets_education};
use crate::matching::skills::overlapping_skills;
use crate::models::listing::Listing;
use crate::models::profile::UserProfile;
use crate::text_util::title_case;

const FALLBACK_REASON: &str = "Matches your profile";

pub fn explain(listing: &Listing, profile: &UserProfile, score: f64) -> String {
    let mut clauses = Vec::new();

    let overlap = overlapping_skills(&profile.skills, listing);
    if !overlap.is_empty() {
        let names: Vec<String> = overlap.iter().take(3).map(|s| title_case(s)).collect();
        if overlap.len() > 3 {
            clauses.push(format!(
                "Matches {} skills including {}",
                overlap.len(),
                names.join(", ")
            ));
        } else {
            clauses.push(format!("Matches skills: {}", names.join(", ")));
        }
    }

    if meets_education(profile.education, listing) {
        clauses.push(format!(
            "Education requirement met ({})",
            listing.education_requirement
        ));
    }

    if let Some(state) = profile.preferred_state.as_deref() {
        if location_matches(state, listing) {
            clauses.push(format!(
                "Located in preferred state ({})",
                listing.location_city
            ));
        }
    }

    if profile.sectors.contains(&listing.sector) {
        clauses.push(format!("Matches preferred sector ({})", listing.sector));
    }

    clauses.push(closing_clause(score).to_string());

    if clauses.is_empty() {
        FALLBACK_REASON.to_string()
    } else {
        clauses.join("; ")
    }
}

fn closing_clause(score: f64) -> &'static str {
    if score > 0.8 {
        "High compatibility match"
    } else if score > 0.6 {
        "Good compatibility match"
    } else {
        "Potential match"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::education::EducationLevel;
    use crate::models::listing::fixtures::listing;
    use crate::models::listing::Sector;

    fn profile(skills: &[&str], education: EducationLevel) -> UserProfile {
        UserProfile {
            education,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            sectors: vec![],
            preferred_state: None,
            max_results: 5,
        }
    }

    #[test]
    fn test_full_explanation_in_fixed_order() {
        let l = listing(1, "Dev", Sector::Technology, &["Python", "SQL"], "B.Tech", "Hyderabad", "Telangana");
        let mut p = profile(&["python", "sql"], EducationLevel::Btech);
        p.sectors = vec![Sector::Technology];
        p.preferred_state = Some("Telangana".to_string());

        assert_eq!(
            explain(&l, &p, 0.9),
            "Matches skills: Python, Sql; Education requirement met (B.Tech); \
             Located in preferred state (Hyderabad); Matches preferred sector (Technology); \
             High compatibility match"
        );
    }

    #[test]
    fn test_more_than_three_skills_reports_count() {
        let l = listing(1, "Dev", Sector::Technology, &["Python", "SQL", "Git", "Docker"], "B.Tech", "Pune", "Maharashtra");
        let p = profile(&["docker", "git", "sql", "python"], EducationLevel::Btech);
        let reason = explain(&l, &p, 0.7);
        assert!(reason.starts_with("Matches 4 skills including Python, Sql, Git;"), "{reason}");
        assert!(reason.ends_with("Good compatibility match"));
    }

    #[test]
    fn test_unmet_education_and_no_overlap() {
        let l = listing(1, "Dev", Sector::Technology, &["Python"], "M.Tech", "Pune", "Maharashtra");
        let p = profile(&["Excel"], EducationLevel::Diploma);
        assert_eq!(explain(&l, &p, 0.3), "Potential match");
    }

    #[test]
    fn test_location_clause_only_on_match() {
        let l = listing(1, "Dev", Sector::Technology, &["Python"], "B.Tech", "Kochi", "Kerala");
        let mut p = profile(&["Excel"], EducationLevel::Btech);
        p.preferred_state = Some("Goa".to_string());
        assert!(!explain(&l, &p, 0.5).contains("Located in"));
    }

    #[test]
    fn test_closing_thresholds_are_exclusive() {
        assert_eq!(closing_clause(0.8), "Good compatibility match");
        assert_eq!(closing_clause(0.6), "Potential match");
        assert_eq!(closing_clause(0.81), "High compatibility match");
    }
}
