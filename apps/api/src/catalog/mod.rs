//! Catalog loading and read-only catalog summaries.

pub mod handlers;
pub mod stats;

use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::models::listing::Listing;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains no listings")]
    Empty,

    #[error("duplicate listing id {0}")]
    DuplicateId(u32),

    #[error("listing {id} is invalid: {reason}")]
    InvalidListing { id: u32, reason: String },
}

/// Where listings come from. Called once at startup.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Listing>, CatalogError>;
}

/// Catalog stored as a JSON array of listings.
pub struct JsonFileCatalog {
    pub path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<Listing>, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;
        let listings: Vec<Listing> = serde_json::from_str(&raw)?;
        check_listings(&listings)?;

        info!(
            path = %self.path.display(),
            listings = listings.len(),
            "Catalog loaded"
        );
        Ok(listings)
    }
}

fn check_listings(listings: &[Listing]) -> Result<(), CatalogError> {
    if listings.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut ids = HashSet::new();
    for listing in listings {
        if !ids.insert(listing.id) {
            return Err(CatalogError::DuplicateId(listing.id));
        }
        if listing.skills_required.iter().all(|s| s.trim().is_empty()) {
            return Err(CatalogError::InvalidListing {
                id: listing.id,
                reason: "no required skills".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::models::listing::fixtures::listing;
    use crate::models::listing::Sector;

    fn write_catalog(listings: &[Listing]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(listings).unwrap().as_bytes())
            .unwrap();
        file
    }

    fn sample(id: u32) -> Listing {
        listing(id, "Dev", Sector::Technology, &["Python"], "B.Tech", "Pune", "Maharashtra")
    }

    #[tokio::test]
    async fn test_loads_valid_catalog() {
        let file = write_catalog(&[sample(1), sample(2)]);
        let listings = JsonFileCatalog::new(file.path()).load().await.unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[1].id, 2);
    }

    #[tokio::test]
    async fn test_bundled_catalog_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/internships.json");
        let listings = JsonFileCatalog::new(path).load().await.unwrap();
        assert!(listings.len() >= 10);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = JsonFileCatalog::new("/nonexistent/internships.json")
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[tokio::test]
    async fn test_empty_catalog_rejected() {
        let file = write_catalog(&[]);
        let err = JsonFileCatalog::new(file.path()).load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[tokio::test]
    async fn test_corrupt_catalog_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"id\": 1, \"title\": ").unwrap();
        let err = JsonFileCatalog::new(file.path()).load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = check_listings(&[sample(1), sample(1)]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn test_listing_without_skills_rejected() {
        let mut bad = sample(3);
        bad.skills_required.clear();
        let err = check_listings(&[sample(1), bad]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidListing { id: 3, .. }));
    }
}
