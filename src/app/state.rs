// ==========================================
// Jharkhand Trip Planner - application state
// ==========================================
// Builds and holds the shared API instances for one process.
// ==========================================

use std::sync::Arc;

use crate::api::{CatalogApi, PlannerApi, RouteApi};
use crate::config::ConfigManager;
use crate::engine::events::{ItineraryEventPublisher, OptionalEventPublisher};
use crate::engine::route_advisor::RouteAdvisor;
use crate::repository::{StaticAttractionSource, StaticHotelSource};

/// Application state
///
/// Holds every API instance and shared resource. The UI shell keeps
/// one of these for the process lifetime.
pub struct AppState {
    /// Settings manager
    pub config: Arc<ConfigManager>,

    /// Catalog API (attractions + hotels)
    pub catalog_api: Arc<CatalogApi>,

    /// Planning session API
    pub planner_api: Arc<PlannerApi>,

    /// Route suggestion API
    pub route_api: Arc<RouteApi>,
}

impl AppState {
    /// Create a new AppState
    ///
    /// # Arguments
    /// - config: loaded settings manager
    /// - event_publisher: optional sink for itinerary events (the
    ///   rendering layer's refresh hook); None skips publishing
    ///
    /// # Behavior
    /// 1. parses the bundled catalog datasets
    /// 2. builds the engines from settings
    /// 3. creates the API instances
    pub fn new(
        config: ConfigManager,
        event_publisher: Option<Arc<dyn ItineraryEventPublisher>>,
    ) -> Result<Self, String> {
        tracing::info!("initializing AppState");
        let settings = config.settings();

        // ==========================================
        // Repository layer
        // ==========================================
        let attraction_source = Arc::new(
            StaticAttractionSource::new()
                .map_err(|e| format!("cannot parse attraction dataset: {}", e))?,
        );
        let hotel_source = Arc::new(
            StaticHotelSource::new().map_err(|e| format!("cannot parse hotel dataset: {}", e))?,
        );

        // ==========================================
        // API layer
        // ==========================================
        let catalog_publisher = match &event_publisher {
            Some(p) => OptionalEventPublisher::with_publisher(p.clone()),
            None => OptionalEventPublisher::none(),
        };
        let catalog_api = Arc::new(CatalogApi::new(
            attraction_source,
            hotel_source,
            catalog_publisher,
        ));

        let planner_api = Arc::new(PlannerApi::new(catalog_api.clone(), event_publisher));

        let advisor =
            RouteAdvisor::with_settings(settings.average_speed_kmh, settings.waypoint_segments);
        let route_api = Arc::new(RouteApi::new(catalog_api.clone(), advisor));

        tracing::info!("AppState initialized");

        Ok(Self {
            config: Arc::new(config),
            catalog_api,
            planner_api,
            route_api,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerSettings;
    use tempfile::TempDir;

    #[test]
    fn test_app_state_builds_from_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigManager::load(dir.path().join("config.json")).unwrap();
        let state = AppState::new(config, None).expect("AppState must build");
        assert_eq!(state.config.settings(), PlannerSettings::default());
    }
}
