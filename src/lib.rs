// ==========================================
// Jharkhand Trip Planner - core library
// ==========================================
// Itinerary planning engine for Jharkhand tourism:
// attraction catalog, day buckets, drag reordering,
// per-day route projection for the map layer.
// ==========================================

// Initialize the i18n system (English default, Hindi supported)
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Repository layer - catalog data access
pub mod repository;

// Engine layer - planning rules
pub mod engine;

// Configuration layer
pub mod config;

// Logging
pub mod logging;

// Internationalization
pub mod i18n;

// API layer - business interfaces
pub mod api;

// Application layer - state wiring
pub mod app;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::types::{MoveDecision, Placement};

// Domain entities
pub use domain::{Attraction, DayPlan, GeoPoint, Hotel, Itinerary, TripWindow};

// Engines
pub use engine::{
    AssignOutcome, DragEvent, InterestFilter, ItineraryStore, MoveResolution, PendingMove,
    ReorderEngine, RouteAdvisor, RouteComposer,
};

// APIs
pub use api::{CatalogApi, PlannerApi, RouteApi};

// ==========================================
// Crate constants
// ==========================================

// System version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Jharkhand Trip Planner";
