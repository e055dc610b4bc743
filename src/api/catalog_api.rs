// ==========================================
// Jharkhand Trip Planner - catalog API
// ==========================================
// Holds the current attraction snapshot for the session's
// destination. A later successful load fully replaces the
// snapshot; a failed load resolves to a single well-formed
// fallback record so the map and filter surfaces always have
// something consistent to render.
// ==========================================

use std::sync::{Arc, RwLock};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{Attraction, GeoPoint, Hotel};
use crate::engine::events::{ItineraryEvent, ItineraryEventType, OptionalEventPublisher};
use crate::engine::interest_filter::InterestFilter;
use crate::repository::{AttractionSource, HotelSource};

// ==========================================
// CatalogApi
// ==========================================

/// Attraction and hotel catalog access
pub struct CatalogApi {
    attraction_source: Arc<dyn AttractionSource>,
    hotel_source: Arc<dyn HotelSource>,
    filter: InterestFilter,
    /// Current snapshot; replaced wholesale on every load
    snapshot: RwLock<Vec<Attraction>>,
    event_publisher: OptionalEventPublisher,
}

impl CatalogApi {
    pub fn new(
        attraction_source: Arc<dyn AttractionSource>,
        hotel_source: Arc<dyn HotelSource>,
        event_publisher: OptionalEventPublisher,
    ) -> Self {
        Self {
            attraction_source,
            hotel_source,
            filter: InterestFilter::new(),
            snapshot: RwLock::new(Vec::new()),
            event_publisher,
        }
    }

    /// Load the attraction catalog for a destination
    ///
    /// One asynchronous fetch; does not block planner commands, which
    /// only read the catalog passively for display. On source failure
    /// the snapshot becomes the fallback list and the failure is logged,
    /// never surfaced as a hard error to the planning flow.
    pub async fn load_attractions(&self, city: &str) -> ApiResult<Vec<Attraction>> {
        let attractions = match self.attraction_source.fetch_by_city(city).await {
            Ok(list) => {
                tracing::info!("catalog loaded: city={}, attractions={}", city, list.len());
                list
            }
            Err(e) => {
                tracing::warn!(
                    "{}",
                    crate::i18n::t_with_args("catalog.load_failed", &[("city", city)])
                );
                tracing::debug!("catalog load error detail: {}", e);
                Self::fallback_catalog(city)
            }
        };

        self.replace_snapshot(attractions.clone())?;
        self.event_publisher.publish(ItineraryEvent::full(
            ItineraryEventType::CatalogReloaded,
            Some("load_attractions".to_string()),
        ));

        Ok(attractions)
    }

    /// The catalog entry shown when the backend is unreachable
    fn fallback_catalog(city: &str) -> Vec<Attraction> {
        vec![Attraction {
            id: "fallback1".to_string(),
            name: "Hundru Falls".to_string(),
            city: city.to_string(),
            coordinates: GeoPoint::new(23.4230, 85.5979),
            category: "waterfall".to_string(),
            interest_tags: vec!["Adventure".to_string(), "Relaxation".to_string()],
            description: "A spectacular waterfall with a drop of 98 meters".to_string(),
            best_time: None,
            duration: None,
            image: None,
        }]
    }

    fn replace_snapshot(&self, attractions: Vec<Attraction>) -> ApiResult<()> {
        let mut snapshot = self
            .snapshot
            .write()
            .map_err(|e| ApiError::InternalError(format!("catalog lock poisoned: {}", e)))?;
        *snapshot = attractions;
        Ok(())
    }

    /// Current snapshot (empty before the first load)
    pub fn snapshot(&self) -> ApiResult<Vec<Attraction>> {
        let snapshot = self
            .snapshot
            .read()
            .map_err(|e| ApiError::InternalError(format!("catalog lock poisoned: {}", e)))?;
        Ok(snapshot.clone())
    }

    /// Look up one attraction in the current snapshot
    pub fn get_attraction(&self, attraction_id: &str) -> ApiResult<Attraction> {
        self.snapshot()?
            .into_iter()
            .find(|a| a.id == attraction_id)
            .ok_or_else(|| {
                ApiError::NotFound(format!("Attraction (id={}) does not exist", attraction_id))
            })
    }

    /// Snapshot filtered by interest tag ("all" returns everything)
    pub fn filter_by_interest(&self, tag: &str) -> ApiResult<Vec<Attraction>> {
        Ok(self.filter.filter(&self.snapshot()?, tag))
    }

    /// Match counts per onboarding interest, as shown on filter buttons
    pub fn interest_counts(&self, interests: &[String]) -> ApiResult<Vec<(String, usize)>> {
        let snapshot = self.snapshot()?;
        Ok(interests
            .iter()
            .map(|tag| (tag.clone(), self.filter.count(&snapshot, tag)))
            .collect())
    }

    /// Lodging markers for the map layer
    ///
    /// No fallback here: markers are decorative and the rendering layer
    /// may ignore a failed fetch.
    pub async fn list_hotels(&self) -> ApiResult<Vec<Hotel>> {
        let hotels = self.hotel_source.fetch_all().await?;
        tracing::debug!("hotels loaded: {}", hotels.len());
        Ok(hotels)
    }
}
