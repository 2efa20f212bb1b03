//! In-memory listing catalogue served by the HTTP endpoints.
//!
//! The catalogue is loaded once at startup, either from the data file
//! configured in config.toml or from the copy embedded in the binary.

use contracts::Listing;
use once_cell::sync::OnceCell;
use std::path::Path;

/// Listings shipped inside the binary, used when no data file is found
const EMBEDDED_LISTINGS: &str = include_str!("../data/logements.json");

static STORE: OnceCell<ListingStore> = OnceCell::new();

pub struct ListingStore {
    listings: Vec<Listing>,
}

impl ListingStore {
    fn parse(raw: &str) -> anyhow::Result<Self> {
        let listings: Vec<Listing> = serde_json::from_str(raw)?;
        Ok(Self { listings })
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    /// Look up a listing by the string form of its id. Numeric ids match
    /// their decimal rendering, so "3" finds the listing with id 3.
    pub fn find(&self, raw_id: &str) -> Option<&Listing> {
        self.listings
            .iter()
            .find(|listing| listing.id.as_ref().is_some_and(|id| id.matches(raw_id)))
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }
}

/// Load the catalogue from `path` when the file exists, otherwise from
/// the embedded data. Must be called once before the router starts.
pub fn initialize(path: &Path) -> anyhow::Result<()> {
    let store = if path.exists() {
        tracing::info!("Loading listings from: {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        ListingStore::parse(&raw)?
    } else {
        tracing::warn!("Data file not found at: {}", path.display());
        tracing::info!("Using embedded listings data");
        ListingStore::parse(EMBEDDED_LISTINGS)?
    };

    tracing::info!("Catalogue ready with {} listings", store.len());
    STORE
        .set(store)
        .map_err(|_| anyhow::anyhow!("Failed to set listing store"))?;
    Ok(())
}

pub fn get() -> &'static ListingStore {
    STORE.get().expect("Listing store has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_listings_parse() {
        let store = ListingStore::parse(EMBEDDED_LISTINGS).unwrap();
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn test_find_by_numeric_id() {
        let store = ListingStore::parse(EMBEDDED_LISTINGS).unwrap();
        let listing = store.find("3").unwrap();
        assert_eq!(listing.city, "Annecy");
    }

    #[test]
    fn test_find_by_text_id() {
        let store = ListingStore::parse(EMBEDDED_LISTINGS).unwrap();
        let listing = store.find("chalet-les-arcs").unwrap();
        assert_eq!(listing.city, "Bourg-Saint-Maurice");
    }

    #[test]
    fn test_find_unknown_id() {
        let store = ListingStore::parse(EMBEDDED_LISTINGS).unwrap();
        assert!(store.find("999").is_none());
    }

    #[test]
    fn test_string_coordinates_accepted() {
        let store = ListingStore::parse(EMBEDDED_LISTINGS).unwrap();
        let listing = store.find("9").unwrap();
        let (lat, lng) = listing.position().unwrap();
        assert!((lat - 43.9194).abs() < 1e-9);
        assert!((lng - 5.0514).abs() < 1e-9);
    }

    #[test]
    fn test_listing_without_coordinates() {
        let store = ListingStore::parse(EMBEDDED_LISTINGS).unwrap();
        let listing = store.find("4").unwrap();
        assert!(listing.position().is_none());
    }
}
