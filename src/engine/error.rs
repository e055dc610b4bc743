// ==========================================
// Jharkhand Trip Planner - engine layer errors
// ==========================================
// Tooling: thiserror derive macro
// All engine failures are locally recoverable; none are fatal
// to the process.
// ==========================================

use chrono::NaiveDate;
use thiserror::Error;

/// Engine layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// End date precedes start date; fatal to itinerary creation
    #[error("invalid trip range: end date {end} precedes start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Day label outside the fixed `Day 1 .. Day N` set
    #[error("day not found: {0}")]
    DayNotFound(String),

    /// Source index does not address an existing element
    #[error("no entry at index {index} in {day}")]
    IndexOutOfRange { day: String, index: usize },

    /// resolve_move called with no confirmation outstanding
    #[error("no pending move to resolve")]
    NoPendingMove,
}

/// Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
