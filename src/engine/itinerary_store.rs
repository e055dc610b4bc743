// ==========================================
// Jharkhand Trip Planner - itinerary store
// ==========================================
// The assignment state machine. Owns the day buckets for one
// planning session and the single-day-ownership rule: an
// attraction id is held by at most one day at any time, and
// never twice within a day.
//
// Cross-day moves are a two-phase protocol: `assign` answers
// with a confirmation request instead of mutating, and the
// caller settles it through `resolve_move`. No blocking prompt
// is assumed anywhere.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::{MoveDecision, Placement};
use crate::domain::{DayPlan, Itinerary, TripWindow};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::trip_window::TripWindowEngine;

// ==========================================
// Operation results
// ==========================================

/// A cross-day relocation awaiting the user's decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMove {
    pub attraction_id: String,
    pub from_day: String,
    pub to_day: String,
}

/// Outcome of an `assign` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignOutcome {
    /// Appended to the end of the target day
    Added { attraction_id: String, day: String },
    /// Already present in the target day; user-visible notice, no change
    AlreadyInDay { attraction_id: String, day: String },
    /// Held by another day; the store recorded a pending move and
    /// waits for `resolve_move`
    ConfirmationRequired(PendingMove),
}

/// Outcome of `resolve_move`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResolution {
    /// The relocation was performed
    Moved(PendingMove),
    /// The user declined; itinerary unchanged
    Discarded(PendingMove),
}

// ==========================================
// ItineraryStore
// ==========================================

/// Assignment state for one planning session
///
/// Created empty from a validated trip window; mutated only through
/// `assign`/`resolve_move` and the reorder engine until the session ends.
pub struct ItineraryStore {
    window: TripWindow,
    itinerary: Itinerary,
    pending_move: Option<PendingMove>,
}

impl ItineraryStore {
    /// Build empty day buckets for a trip window
    ///
    /// # Returns
    /// - Err(EngineError::InvalidRange) when the window's end date
    ///   precedes its start date
    pub fn for_window(window: TripWindow) -> EngineResult<Self> {
        let labels = TripWindowEngine::new().derive_days(&window)?;
        let itinerary = Itinerary {
            days: labels.into_iter().map(DayPlan::new).collect(),
        };

        Ok(Self {
            window,
            itinerary,
            pending_move: None,
        })
    }

    pub fn window(&self) -> &TripWindow {
        &self.window
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    // Mutable access is crate-internal: only the reorder engine may
    // bypass `assign`, and it relocates entries without copying.
    pub(crate) fn itinerary_mut(&mut self) -> &mut Itinerary {
        &mut self.itinerary
    }

    /// Current placement of an attraction id
    pub fn placement(&self, attraction_id: &str) -> Placement {
        self.itinerary.placement_of(attraction_id)
    }

    /// The confirmation currently awaiting a decision, if any
    pub fn pending_move(&self) -> Option<&PendingMove> {
        self.pending_move.as_ref()
    }

    /// Place an attraction into a day bucket
    ///
    /// # Behavior
    /// - already in `target_day`: no change, `AlreadyInDay`
    /// - held by another day: no change yet, `ConfirmationRequired`;
    ///   the decision arrives through `resolve_move`
    /// - unassigned: appended to the end of `target_day`
    ///
    /// New entries are always appended, never inserted mid-sequence;
    /// mid-sequence placement is the reorder engine's job.
    pub fn assign(&mut self, attraction_id: &str, target_day: &str) -> EngineResult<AssignOutcome> {
        if self.itinerary.day(target_day).is_none() {
            return Err(EngineError::DayNotFound(target_day.to_string()));
        }

        // Each assign supersedes whatever confirmation was outstanding;
        // the UI asks one question at a time.
        self.pending_move = None;

        match self.itinerary.placement_of(attraction_id) {
            Placement::AssignedTo(day) if day == target_day => {
                Ok(AssignOutcome::AlreadyInDay {
                    attraction_id: attraction_id.to_string(),
                    day,
                })
            }
            Placement::AssignedTo(other_day) => {
                let pending = PendingMove {
                    attraction_id: attraction_id.to_string(),
                    from_day: other_day,
                    to_day: target_day.to_string(),
                };
                self.pending_move = Some(pending.clone());
                Ok(AssignOutcome::ConfirmationRequired(pending))
            }
            Placement::Unassigned => {
                // day presence checked above
                let day = self
                    .itinerary
                    .day_mut(target_day)
                    .ok_or_else(|| EngineError::DayNotFound(target_day.to_string()))?;
                day.attraction_ids.push(attraction_id.to_string());
                Ok(AssignOutcome::Added {
                    attraction_id: attraction_id.to_string(),
                    day: target_day.to_string(),
                })
            }
        }
    }

    /// Settle the outstanding cross-day confirmation
    ///
    /// Confirmed: the attraction leaves its current day and is appended
    /// to the target day within this single call; no intermediate state
    /// where it is in neither or both days is observable. Declined: the
    /// itinerary is untouched.
    pub fn resolve_move(&mut self, decision: MoveDecision) -> EngineResult<MoveResolution> {
        let pending = self.pending_move.take().ok_or(EngineError::NoPendingMove)?;

        match decision {
            MoveDecision::Declined => Ok(MoveResolution::Discarded(pending)),
            MoveDecision::Confirmed => {
                // Remove from wherever the id currently lives; a drag may
                // have relocated it since the confirmation was recorded.
                for day in &mut self.itinerary.days {
                    day.attraction_ids.retain(|id| id != &pending.attraction_id);
                }

                let target = self
                    .itinerary
                    .day_mut(&pending.to_day)
                    .ok_or_else(|| EngineError::DayNotFound(pending.to_day.clone()))?;
                target.attraction_ids.push(pending.attraction_id.clone());

                Ok(MoveResolution::Moved(pending))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn store(days: u32) -> ItineraryStore {
        let start = NaiveDate::from_ymd_opt(2026, 11, 2).unwrap();
        let end = start + chrono::Duration::days(i64::from(days) - 1);
        ItineraryStore::for_window(TripWindow::new(start, end, "Kolkata", "Ranchi", vec![]))
            .unwrap()
    }

    #[test]
    fn test_assign_appends_to_target_day() {
        let mut store = store(3);
        let outcome = store.assign("ranchi_001", "Day 1").unwrap();
        assert_eq!(
            outcome,
            AssignOutcome::Added {
                attraction_id: "ranchi_001".to_string(),
                day: "Day 1".to_string()
            }
        );
        assert_eq!(store.itinerary().day("Day 1").unwrap().attraction_ids, vec!["ranchi_001"]);
    }

    #[test]
    fn test_assign_unknown_day_is_rejected() {
        let mut store = store(2);
        let result = store.assign("ranchi_001", "Day 9");
        assert!(matches!(result, Err(EngineError::DayNotFound(_))));
    }

    #[test]
    fn test_resolve_without_pending_move() {
        let mut store = store(2);
        let result = store.resolve_move(MoveDecision::Confirmed);
        assert!(matches!(result, Err(EngineError::NoPendingMove)));
    }

    #[test]
    fn test_new_assign_supersedes_stale_confirmation() {
        let mut store = store(3);
        store.assign("ranchi_001", "Day 1").unwrap();
        store.assign("ranchi_001", "Day 2").unwrap();
        assert!(store.pending_move().is_some());

        // The user abandons the question and adds something else instead.
        store.assign("ranchi_002", "Day 3").unwrap();
        assert!(store.pending_move().is_none());
        assert!(matches!(
            store.resolve_move(MoveDecision::Confirmed),
            Err(EngineError::NoPendingMove)
        ));
        // The abandoned question never mutated state.
        assert_eq!(
            store.placement("ranchi_001"),
            Placement::AssignedTo("Day 1".to_string())
        );
    }
}
