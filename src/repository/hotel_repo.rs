// ==========================================
// Jharkhand Trip Planner - hotel repository
// ==========================================
// `HotelSource` is the seam to `GET hotels`; records feed the
// rendering layer's map markers only.
// ==========================================

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::Hotel;
use crate::repository::error::RepositoryResult;

/// Bundled Jharkhand tourism-board hotel dataset, keyed by region
const HOTELS_DATASET: &str = include_str!("../../data/hotels.json");

// ==========================================
// HotelSource trait
// ==========================================

/// Source of lodging records
#[async_trait]
pub trait HotelSource: Send + Sync {
    /// Fetch every hotel across all regions
    async fn fetch_all(&self) -> RepositoryResult<Vec<Hotel>>;

    /// Fetch hotels for one city
    async fn fetch_by_city(&self, city: &str) -> RepositoryResult<Vec<Hotel>>;
}

// ==========================================
// StaticHotelSource - bundled dataset
// ==========================================

/// Hotel source backed by the bundled dataset
pub struct StaticHotelSource {
    by_region: HashMap<String, Vec<Hotel>>,
}

impl StaticHotelSource {
    /// Parse the bundled dataset
    pub fn new() -> RepositoryResult<Self> {
        let by_region: HashMap<String, Vec<Hotel>> = serde_json::from_str(HOTELS_DATASET)?;
        Ok(Self { by_region })
    }
}

#[async_trait]
impl HotelSource for StaticHotelSource {
    async fn fetch_all(&self) -> RepositoryResult<Vec<Hotel>> {
        Ok(self.by_region.values().flatten().cloned().collect())
    }

    async fn fetch_by_city(&self, city: &str) -> RepositoryResult<Vec<Hotel>> {
        // The dataset groups by tourist region; hotel records carry their
        // own city, which is what callers filter on.
        Ok(self
            .by_region
            .values()
            .flatten()
            .filter(|h| h.city == city)
            .cloned()
            .collect())
    }
}
