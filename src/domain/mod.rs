// ==========================================
// Jharkhand Trip Planner - domain layer
// ==========================================
// Entities and value types for the planning engine.
// No data access logic, no engine logic.
// ==========================================

pub mod attraction;
pub mod trip;
pub mod types;

// Re-export core types
pub use attraction::{Attraction, GeoPoint, Hotel};
pub use trip::{DayPlan, Itinerary, TripWindow};
pub use types::{MoveDecision, Placement};
