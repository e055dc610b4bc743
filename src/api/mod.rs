// ==========================================
// Jharkhand Trip Planner - API layer
// ==========================================
// Business interfaces exposed to the surrounding UI shell.
// Everything else (forms, translations, booking submission)
// talks to the engine only through these operations.
// ==========================================

pub mod catalog_api;
pub mod error;
pub mod planner_api;
pub mod route_api;

// Re-export core types
pub use catalog_api::CatalogApi;
pub use error::{ApiError, ApiResult};
pub use planner_api::{PlannerApi, SharedItinerary};
pub use route_api::{RouteApi, RouteSuggestions};
