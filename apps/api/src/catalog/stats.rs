use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::matching::compatibility::MULTIPLE_LOCATIONS;
use crate::models::listing::{Listing, Sector};

const TOP_COMPANIES: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total_internships: usize,
    pub total_sectors: usize,
    pub total_companies: usize,
    pub total_locations: usize,
    pub sector_distribution: BTreeMap<Sector, usize>,
    pub sectors: Vec<Sector>,
    pub top_companies: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Locations {
    pub states: Vec<String>,
    pub cities: Vec<String>,
}

/// Distinct sectors, sorted by name.
pub fn sectors(listings: &[Listing]) -> Vec<Sector> {
    let set: BTreeSet<Sector> = listings.iter().map(|l| l.sector).collect();
    let mut sectors: Vec<Sector> = set.into_iter().collect();
    sectors.sort_by_key(|s| s.as_str());
    sectors
}

/// Distinct states (without the "Multiple" marker) and cities, sorted.
pub fn locations(listings: &[Listing]) -> Locations {
    let states: BTreeSet<&str> = listings
        .iter()
        .map(|l| l.location_state.as_str())
        .filter(|s| !s.eq_ignore_ascii_case(MULTIPLE_LOCATIONS))
        .collect();
    let cities: BTreeSet<&str> = listings.iter().map(|l| l.location_city.as_str()).collect();
    Locations {
        states: states.into_iter().map(str::to_string).collect(),
        cities: cities.into_iter().map(str::to_string).collect(),
    }
}

pub fn skills(listings: &[Listing]) -> Vec<String> {
    let set: BTreeSet<&str> = listings
        .iter()
        .flat_map(|l| l.skills_required.iter().map(String::as_str))
        .collect();
    set.into_iter().map(str::to_string).collect()
}

pub fn compute_stats(listings: &[Listing]) -> CatalogStats {
    let mut sector_distribution = BTreeMap::new();
    for listing in listings {
        *sector_distribution.entry(listing.sector).or_insert(0) += 1;
    }
    let companies: BTreeSet<&str> = listings.iter().map(|l| l.company.as_str()).collect();
    let cities: BTreeSet<&str> = listings.iter().map(|l| l.location_city.as_str()).collect();
    let sectors = sectors(listings);

    CatalogStats {
        total_internships: listings.len(),
        total_sectors: sectors.len(),
        total_companies: companies.len(),
        total_locations: cities.len(),
        sector_distribution,
        sectors,
        top_companies: companies
            .into_iter()
            .take(TOP_COMPANIES)
            .map(str::to_string)
            .collect(),
    }
}
