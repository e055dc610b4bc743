// ==========================================
// Planner flow end-to-end test
// ==========================================
// Full session walkthrough over AppState: load the catalog,
// start a session, filter, assign, confirm a cross-day move,
// drag-reorder, project routes, export the share stub.
// ==========================================


use std::sync::{Arc, Mutex};

use jharkhand_trip_planner::api::ApiError;
use jharkhand_trip_planner::app::AppState;
use jharkhand_trip_planner::config::ConfigManager;
use jharkhand_trip_planner::domain::types::MoveDecision;
use jharkhand_trip_planner::engine::{
    AssignOutcome, DragEvent, ItineraryEvent, ItineraryEventPublisher, MoveResolution,
};
use jharkhand_trip_planner::i18n;
use tempfile::TempDir;
use test_helpers::trip_window;

/// Publisher that records everything it sees
#[derive(Default)]
struct CollectingPublisher {
    events: Mutex<Vec<ItineraryEvent>>,
}

impl CollectingPublisher {
    fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl ItineraryEventPublisher for CollectingPublisher {
    fn publish(
        &self,
        event: ItineraryEvent,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

fn app_state(publisher: Arc<CollectingPublisher>) -> (TempDir, AppState) {
    let dir = TempDir::new().unwrap();
    let config = ConfigManager::load(dir.path().join("config.json")).unwrap();
    let state = AppState::new(config, Some(publisher)).unwrap();
    (dir, state)
}

#[tokio::test]
async fn test_full_planning_flow() {
    i18n::set_locale("en");
    let publisher = Arc::new(CollectingPublisher::default());
    let (_dir, state) = app_state(publisher.clone());

    // Commands before onboarding completes are rejected.
    assert!(matches!(
        state.planner_api.itinerary(),
        Err(ApiError::NoActiveSession)
    ));

    // Onboarding done: catalog load + session start.
    state.catalog_api.load_attractions("Ranchi").await.unwrap();
    let days = state.planner_api.start_session(trip_window(3)).unwrap();
    assert_eq!(days, vec!["Day 1", "Day 2", "Day 3"]);

    // The picking panel shows a filtered view.
    let adventure = state.catalog_api.filter_by_interest("Adventure").unwrap();
    assert!(adventure.iter().any(|a| a.id == "ranchi_001"));

    // Direct clicks: two stops on Day 1, one on Day 2.
    state.planner_api.assign_attraction("ranchi_001", "Day 1").unwrap();
    state.planner_api.assign_attraction("ranchi_006", "Day 1").unwrap();
    state.planner_api.assign_attraction("ranchi_007", "Day 2").unwrap();

    // Re-adding to the same day is a notice, not a change.
    let outcome = state
        .planner_api
        .assign_attraction("ranchi_001", "Day 1")
        .unwrap();
    assert!(matches!(outcome, AssignOutcome::AlreadyInDay { .. }));
    let notice = state.planner_api.describe_outcome(&outcome);
    assert!(notice.contains("Hundru Falls"));
    assert!(notice.contains("Day 1"));

    // Cross-day move asks first, then relocates atomically.
    let outcome = state
        .planner_api
        .assign_attraction("ranchi_001", "Day 3")
        .unwrap();
    let question = state.planner_api.describe_outcome(&outcome);
    assert!(question.contains("move it to Day 3"));
    let resolution = state
        .planner_api
        .resolve_pending_move(MoveDecision::Confirmed)
        .unwrap();
    assert!(matches!(resolution, MoveResolution::Moved(_)));

    let itinerary = state.planner_api.itinerary().unwrap();
    assert_eq!(itinerary.day("Day 1").unwrap().attraction_ids, vec!["ranchi_006"]);
    assert_eq!(itinerary.day("Day 3").unwrap().attraction_ids, vec!["ranchi_001"]);

    // Drag the temple from Day 2 to the front of Day 3.
    state
        .planner_api
        .apply_drag(&DragEvent::new("Day 2", 0, "Day 3", 0))
        .unwrap();
    let itinerary = state.planner_api.itinerary().unwrap();
    assert_eq!(
        itinerary.day("Day 3").unwrap().attraction_ids,
        vec!["ranchi_007", "ranchi_001"]
    );

    // Map projection: only Day 3 has two stops, in user order.
    let routes = state.planner_api.compose_routes().unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].day, "Day 3");
    assert_eq!(routes[0].color, "red");
    assert_eq!(routes[0].positions.len(), 2);

    // Share stub: an identifier and a link, nothing else.
    let shared = state.planner_api.export_itinerary().unwrap();
    assert!(!shared.itinerary_id.is_empty());
    assert_eq!(shared.share_link, format!("/itinerary/{}", shared.itinerary_id));

    // Every mutation (and the catalog load and session start) was
    // announced to the rendering layer.
    assert!(publisher.count() >= 6);
}

#[tokio::test]
async fn test_declined_move_over_api() {
    let publisher = Arc::new(CollectingPublisher::default());
    let (_dir, state) = app_state(publisher.clone());

    state.catalog_api.load_attractions("Ranchi").await.unwrap();
    state.planner_api.start_session(trip_window(2)).unwrap();
    state.planner_api.assign_attraction("ranchi_001", "Day 1").unwrap();

    let before_events = publisher.count();
    state.planner_api.assign_attraction("ranchi_001", "Day 2").unwrap();
    let resolution = state
        .planner_api
        .resolve_pending_move(MoveDecision::Declined)
        .unwrap();
    assert!(matches!(resolution, MoveResolution::Discarded(_)));

    // Declining is a valid terminal outcome: no state change, no
    // itinerary-changed event.
    let itinerary = state.planner_api.itinerary().unwrap();
    assert_eq!(itinerary.day("Day 1").unwrap().attraction_ids, vec!["ranchi_001"]);
    assert!(itinerary.day("Day 2").unwrap().is_empty());
    assert_eq!(publisher.count(), before_events);
}

#[tokio::test]
async fn test_session_survives_catalog_fallback() {
    use jharkhand_trip_planner::api::{CatalogApi, PlannerApi};
    use jharkhand_trip_planner::engine::OptionalEventPublisher;
    use jharkhand_trip_planner::repository::{FailingAttractionSource, StaticHotelSource};

    let catalog_api = Arc::new(CatalogApi::new(
        Arc::new(FailingAttractionSource),
        Arc::new(StaticHotelSource::new().unwrap()),
        OptionalEventPublisher::none(),
    ));
    let planner_api = PlannerApi::new(catalog_api.clone(), None);

    // The catalog falls back; planning proceeds against the fallback
    // record because assignment is keyed on ids, not catalog membership.
    catalog_api.load_attractions("Ranchi").await.unwrap();
    planner_api.start_session(trip_window(2)).unwrap();
    planner_api.assign_attraction("fallback1", "Day 1").unwrap();

    let itinerary = planner_api.itinerary().unwrap();
    assert_eq!(itinerary.day("Day 1").unwrap().attraction_ids, vec!["fallback1"]);
}

#[test]
fn test_invalid_range_blocks_session() {
    use chrono::NaiveDate;
    use jharkhand_trip_planner::domain::TripWindow;

    let publisher = Arc::new(CollectingPublisher::default());
    let (_dir, state) = app_state(publisher);

    let window = TripWindow::new(
        NaiveDate::from_ymd_opt(2026, 11, 10).unwrap(),
        NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
        "Kolkata",
        "Ranchi",
        vec![],
    );
    assert!(matches!(
        state.planner_api.start_session(window),
        Err(ApiError::InvalidDateRange { .. })
    ));
    // No session was created from the invalid window.
    assert!(matches!(
        state.planner_api.itinerary(),
        Err(ApiError::NoActiveSession)
    ));
}
