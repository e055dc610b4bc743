// ==========================================
// Jharkhand Trip Planner - route API
// ==========================================
// Onboarding-journey suggestions: corridor between origin and
// destination with nearby attraction hints, and a by-city day
// grouping for a picked attraction set.
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::catalog_api::CatalogApi;
use crate::api::error::{ApiError, ApiResult};
use crate::engine::route_advisor::{DaySuggestion, NearbyAttraction, RouteAdvisor, RouteInfo};

/// Corridor buffer applied when the caller gives none
const DEFAULT_BUFFER_KM: f64 = 10.0;

/// Corridor info plus attraction hints along it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSuggestions {
    pub route: RouteInfo,
    pub nearby_attractions: Vec<NearbyAttraction>,
    pub suggestions_count: usize,
}

// ==========================================
// RouteApi
// ==========================================

/// Route suggestion API
pub struct RouteApi {
    catalog_api: Arc<CatalogApi>,
    advisor: RouteAdvisor,
}

impl RouteApi {
    pub fn new(catalog_api: Arc<CatalogApi>, advisor: RouteAdvisor) -> Self {
        Self {
            catalog_api,
            advisor,
        }
    }

    /// Corridor between two named places, with nearby attractions
    ///
    /// # Arguments
    /// - origin / destination: place names, resolved offline
    /// - interests: optional interest restriction for the hints
    /// - buffer_km: corridor width (default 10 km)
    pub fn calculate_with_suggestions(
        &self,
        origin: &str,
        destination: &str,
        interests: &[String],
        buffer_km: Option<f64>,
    ) -> ApiResult<RouteSuggestions> {
        if origin.trim().is_empty() || destination.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "origin and destination are required".to_string(),
            ));
        }

        let route = self.advisor.calculate_route(
            self.advisor.geocode(origin),
            self.advisor.geocode(destination),
        );

        let catalog = self.catalog_api.snapshot()?;
        let nearby = self.advisor.find_nearby_attractions(
            &catalog,
            &route.waypoints,
            buffer_km.unwrap_or(DEFAULT_BUFFER_KM),
            interests,
        );

        Ok(RouteSuggestions {
            suggestions_count: nearby.len(),
            nearby_attractions: nearby,
            route,
        })
    }

    /// Group a picked attraction set into suggested trip days by city
    ///
    /// Suggestions only; the planner's itinerary is never touched.
    pub fn suggest_days(&self, attraction_ids: &[String]) -> ApiResult<Vec<DaySuggestion>> {
        if attraction_ids.is_empty() {
            return Err(ApiError::InvalidInput(
                "attractions list is required".to_string(),
            ));
        }

        let attractions = attraction_ids
            .iter()
            .map(|id| self.catalog_api.get_attraction(id))
            .collect::<ApiResult<Vec<_>>>()?;

        Ok(self.advisor.suggest_days(&attractions))
    }
}
