// ==========================================
// Jharkhand Trip Planner - reorder engine
// ==========================================
// Applies positional drag moves to the itinerary store's
// sequences. A drag is just a (source day, source index,
// drop target) tuple; no gesture library leaks in here.
// Relocation is remove-then-insert of a single entry, so the
// ownership rules hold by construction.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::engine::error::{EngineError, EngineResult};
use crate::engine::itinerary_store::ItineraryStore;

// ==========================================
// Drag gesture data
// ==========================================

/// Resolved drop position of a drag gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTarget {
    pub day: String,
    pub index: usize,
}

/// One drag gesture as reported by the UI layer
///
/// `destination: None` means the gesture was cancelled (dropped
/// outside any day bucket).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEvent {
    pub source_day: String,
    pub source_index: usize,
    pub destination: Option<DropTarget>,
}

impl DragEvent {
    pub fn new(
        source_day: impl Into<String>,
        source_index: usize,
        target_day: impl Into<String>,
        target_index: usize,
    ) -> Self {
        Self {
            source_day: source_day.into(),
            source_index,
            destination: Some(DropTarget {
                day: target_day.into(),
                index: target_index,
            }),
        }
    }

    /// A gesture that never resolved to a drop position
    pub fn cancelled(source_day: impl Into<String>, source_index: usize) -> Self {
        Self {
            source_day: source_day.into(),
            source_index,
            destination: None,
        }
    }
}

// ==========================================
// ReorderEngine
// ==========================================

/// Positional move/reorder commands over the itinerary
pub struct ReorderEngine;

impl ReorderEngine {
    pub fn new() -> Self {
        Self
    }

    /// Apply one drag gesture
    ///
    /// Removes the entry at the source position and inserts it at the
    /// target position; source and target day may be the same (pure
    /// reorder). The target index clamps to the end of the target day.
    ///
    /// # Returns
    /// - Ok(true): the itinerary changed
    /// - Ok(false): cancelled gesture, no change
    /// - Err(DayNotFound / IndexOutOfRange): the gesture referenced a
    ///   position that does not exist; no change
    pub fn apply(&self, store: &mut ItineraryStore, event: &DragEvent) -> EngineResult<bool> {
        let Some(target) = &event.destination else {
            return Ok(false);
        };

        let itinerary = store.itinerary_mut();

        if itinerary.day(&event.source_day).is_none() {
            return Err(EngineError::DayNotFound(event.source_day.clone()));
        }
        if itinerary.day(&target.day).is_none() {
            return Err(EngineError::DayNotFound(target.day.clone()));
        }

        // Validate the source position before touching anything.
        let source_len = itinerary.day(&event.source_day).map(|d| d.len()).unwrap_or(0);
        if event.source_index >= source_len {
            return Err(EngineError::IndexOutOfRange {
                day: event.source_day.clone(),
                index: event.source_index,
            });
        }

        let moved = {
            let source = itinerary
                .day_mut(&event.source_day)
                .ok_or_else(|| EngineError::DayNotFound(event.source_day.clone()))?;
            source.attraction_ids.remove(event.source_index)
        };

        let target_day = itinerary
            .day_mut(&target.day)
            .ok_or_else(|| EngineError::DayNotFound(target.day.clone()))?;
        let insert_at = target.index.min(target_day.len());
        target_day.attraction_ids.insert(insert_at, moved);

        Ok(true)
    }
}

impl Default for ReorderEngine {
    fn default() -> Self {
        Self::new()
    }
}
