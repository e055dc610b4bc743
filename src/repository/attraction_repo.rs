// ==========================================
// Jharkhand Trip Planner - attraction repository
// ==========================================
// `AttractionSource` is the seam to the tourism backend
// (`GET attractions?city=<name>`). The bundled static source
// serves the same records the demo backend ships in-process.
// ==========================================

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::Attraction;
use crate::repository::error::{RepositoryError, RepositoryResult};

/// Bundled Jharkhand attraction dataset, keyed by city
const ATTRACTIONS_DATASET: &str = include_str!("../../data/attractions.json");

// ==========================================
// AttractionSource trait
// ==========================================

/// Source of attraction snapshots
///
/// One fetch returns the full candidate set for a destination;
/// partial/merge updates are not supported. Implementations are
/// free to hit the network; the engine only awaits the snapshot.
#[async_trait]
pub trait AttractionSource: Send + Sync {
    /// Fetch the attraction list for one city
    async fn fetch_by_city(&self, city: &str) -> RepositoryResult<Vec<Attraction>>;

    /// Fetch every attraction across all cities
    async fn fetch_all(&self) -> RepositoryResult<Vec<Attraction>>;
}

// ==========================================
// StaticAttractionSource - bundled dataset
// ==========================================

/// Attraction source backed by the bundled dataset
pub struct StaticAttractionSource {
    by_city: HashMap<String, Vec<Attraction>>,
}

impl StaticAttractionSource {
    /// Parse the bundled dataset
    pub fn new() -> RepositoryResult<Self> {
        let by_city: HashMap<String, Vec<Attraction>> = serde_json::from_str(ATTRACTIONS_DATASET)?;
        Ok(Self { by_city })
    }

    /// Look up one attraction by id across all cities
    pub fn find_by_id(&self, attraction_id: &str) -> RepositoryResult<Attraction> {
        self.by_city
            .values()
            .flatten()
            .find(|a| a.id == attraction_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "Attraction".to_string(),
                id: attraction_id.to_string(),
            })
    }

    /// Cities covered by the dataset
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = self.by_city.keys().cloned().collect();
        cities.sort();
        cities
    }
}

#[async_trait]
impl AttractionSource for StaticAttractionSource {
    async fn fetch_by_city(&self, city: &str) -> RepositoryResult<Vec<Attraction>> {
        Ok(self.by_city.get(city).cloned().unwrap_or_default())
    }

    async fn fetch_all(&self) -> RepositoryResult<Vec<Attraction>> {
        Ok(self.by_city.values().flatten().cloned().collect())
    }
}

// ==========================================
// FailingAttractionSource - fault injection
// ==========================================

/// Source that always fails; used to exercise the catalog fallback path
#[derive(Debug, Clone, Default)]
pub struct FailingAttractionSource;

#[async_trait]
impl AttractionSource for FailingAttractionSource {
    async fn fetch_by_city(&self, city: &str) -> RepositoryResult<Vec<Attraction>> {
        Err(RepositoryError::FetchFailed(format!(
            "attraction source unavailable for city={}",
            city
        )))
    }

    async fn fetch_all(&self) -> RepositoryResult<Vec<Attraction>> {
        Err(RepositoryError::FetchFailed(
            "attraction source unavailable".to_string(),
        ))
    }
}
