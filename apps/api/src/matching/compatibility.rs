//! Rule-based compatibility signals: education, location and sector.

use crate::models::education::{rank_of_label, EducationLevel};
use crate::models::listing::{Listing, Sector};

/// State value marking a listing open in several locations.
pub const MULTIPLE_LOCATIONS: &str = "multiple";

pub fn education_score(user: EducationLevel, listing: &Listing) -> f64 {
    let user_rank = user.rank();
    let required = rank_of_label(&listing.education_requirement);
    if user_rank >= required {
        1.0
    } else if user_rank + 1 == required {
        0.7
    } else {
        0.1
    }
}

pub fn meets_education(user: EducationLevel, listing: &Listing) -> bool {
    user.rank() >= rank_of_label(&listing.education_requirement)
}

/// True when the preferred state names the listing's state or city.
pub fn location_matches(preferred_state: &str, listing: &Listing) -> bool {
    let preferred = preferred_state.to_lowercase();
    let state = listing.location_state.to_lowercase();
    let city = listing.location_city.to_lowercase();
    state.contains(&preferred) || preferred.contains(&state) || city.contains(&preferred)
}

pub fn location_score(preferred_state: Option<&str>, listing: &Listing) -> f64 {
    let Some(preferred) = preferred_state else {
        return 1.0;
    };
    if location_matches(preferred, listing) {
        1.0
    } else if listing.location_state.eq_ignore_ascii_case(MULTIPLE_LOCATIONS) {
        0.8
    } else {
        0.3
    }
}

pub fn sector_score(preferred: &[Sector], listing: &Listing) -> f64 {
    if preferred.is_empty() || preferred.contains(&listing.sector) {
        1.0
    } else {
        0.5
    }
}
