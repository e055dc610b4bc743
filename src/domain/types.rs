// ==========================================
// Jharkhand Trip Planner - shared domain types
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Placement - where an attraction currently lives
// ==========================================

/// Placement of an attraction within a planning session
///
/// Every attraction id is either unassigned or held by exactly one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Not present in any day bucket
    Unassigned,
    /// Held by the named day bucket
    AssignedTo(String),
}

impl Placement {
    pub fn is_assigned(&self) -> bool {
        matches!(self, Placement::AssignedTo(_))
    }
}

// ==========================================
// MoveDecision - answer to a cross-day move confirmation
// ==========================================

/// User decision on a pending cross-day move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDecision {
    /// Perform the relocation
    Confirmed,
    /// Leave the itinerary unchanged
    Declined,
}
