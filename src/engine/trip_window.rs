// ==========================================
// Jharkhand Trip Planner - trip window engine
// ==========================================
// Validates the onboarding date range and derives the ordered
// day-label set. The label set is fixed for the session; it is
// only ever resized by deriving a new TripWindow.
// ==========================================

use crate::domain::TripWindow;
use crate::engine::error::{EngineError, EngineResult};

/// Trip window validation and day derivation
pub struct TripWindowEngine;

impl TripWindowEngine {
    pub fn new() -> Self {
        Self
    }

    /// Validate the window's date range
    ///
    /// # Returns
    /// - Ok(()) when `end_date >= start_date`
    /// - Err(EngineError::InvalidRange) otherwise; the caller must not
    ///   build an itinerary from such a window
    pub fn validate(&self, window: &TripWindow) -> EngineResult<()> {
        if window.end_date < window.start_date {
            return Err(EngineError::InvalidRange {
                start: window.start_date,
                end: window.end_date,
            });
        }
        Ok(())
    }

    /// Derive the ordered day labels for a valid window
    ///
    /// Day count = whole days between start and end, both inclusive,
    /// so a single-day trip yields exactly `["Day 1"]`.
    pub fn derive_days(&self, window: &TripWindow) -> EngineResult<Vec<String>> {
        self.validate(window)?;

        let day_count = window.duration_days();
        Ok((1..=day_count).map(|n| format!("Day {}", n)).collect())
    }
}

impl Default for TripWindowEngine {
    fn default() -> Self {
        Self::new()
    }
}
