// ==========================================
// Jharkhand Trip Planner - repository layer
// ==========================================
// Data access for catalog content. The planning engine treats
// attraction and hotel fetches as opaque snapshot loads; the
// bundled static sources stand in for the tourism backend.
// ==========================================

pub mod attraction_repo;
pub mod error;
pub mod hotel_repo;

// Re-export core types
pub use attraction_repo::{AttractionSource, FailingAttractionSource, StaticAttractionSource};
pub use error::{RepositoryError, RepositoryResult};
pub use hotel_repo::{HotelSource, StaticHotelSource};
