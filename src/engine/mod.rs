// ==========================================
// Jharkhand Trip Planner - engine layer
// ==========================================
// Planning rules: day derivation, the assignment state
// machine, drag reordering, tag filtering, route projection,
// and the route advisor. Engines never touch data sources.
// ==========================================

pub mod error;
pub mod events;
pub mod interest_filter;
pub mod itinerary_store;
pub mod reorder;
pub mod route_advisor;
pub mod route_composer;
pub mod trip_window;

// Re-export core engines
pub use error::{EngineError, EngineResult};
pub use events::{
    ItineraryEvent, ItineraryEventPublisher, ItineraryEventType, NoOpEventPublisher,
    OptionalEventPublisher,
};
pub use interest_filter::{InterestFilter, ALL_INTERESTS};
pub use itinerary_store::{AssignOutcome, ItineraryStore, MoveResolution, PendingMove};
pub use reorder::{DragEvent, DropTarget, ReorderEngine};
pub use route_advisor::{DaySuggestion, NearbyAttraction, RouteAdvisor, RouteInfo};
pub use route_composer::{DayRoute, RouteComposer, DAY_ROUTE_COLORS};
pub use trip_window::TripWindowEngine;
