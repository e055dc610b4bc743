// ==========================================
// Jharkhand Trip Planner - planner API
// ==========================================
// Session-facing command surface over the itinerary store and
// the reorder engine. One user-initiated command at a time;
// every command runs to completion before the next is read, so
// no command observes another's partial effect.
// ==========================================

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::api::catalog_api::CatalogApi;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::types::MoveDecision;
use crate::domain::{Itinerary, TripWindow};
use crate::engine::events::{
    ItineraryEvent, ItineraryEventPublisher, ItineraryEventType, OptionalEventPublisher,
};
use crate::engine::itinerary_store::{AssignOutcome, ItineraryStore, MoveResolution, PendingMove};
use crate::engine::reorder::{DragEvent, ReorderEngine};
use crate::engine::route_composer::{DayRoute, RouteComposer};
use crate::i18n::t_with_args;

// ==========================================
// Operation results
// ==========================================

/// Share stub: an identifier and a link, nothing persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedItinerary {
    pub itinerary_id: String,
    pub share_link: String,
}

// ==========================================
// PlannerApi
// ==========================================

/// Planning session API
///
/// Owns at most one active session (trip window + itinerary store).
/// Starting a new session replaces the previous one.
pub struct PlannerApi {
    catalog_api: Arc<CatalogApi>,
    reorder_engine: ReorderEngine,
    route_composer: RouteComposer,
    session: Mutex<Option<ItineraryStore>>,
    event_publisher: OptionalEventPublisher,
}

impl PlannerApi {
    pub fn new(
        catalog_api: Arc<CatalogApi>,
        event_publisher: Option<Arc<dyn ItineraryEventPublisher>>,
    ) -> Self {
        let event_publisher = match event_publisher {
            Some(p) => OptionalEventPublisher::with_publisher(p),
            None => OptionalEventPublisher::none(),
        };

        Self {
            catalog_api,
            reorder_engine: ReorderEngine::new(),
            route_composer: RouteComposer::new(),
            session: Mutex::new(None),
            event_publisher,
        }
    }

    // ==========================================
    // Session lifecycle
    // ==========================================

    /// Start a planning session from a completed onboarding window
    ///
    /// # Returns
    /// - Ok(labels): the ordered day labels `Day 1 .. Day N`
    /// - Err(ApiError::InvalidDateRange): end date precedes start date;
    ///   the caller must block progression until corrected
    pub fn start_session(&self, window: TripWindow) -> ApiResult<Vec<String>> {
        let store = ItineraryStore::for_window(window)?;
        let labels = store.itinerary().labels();

        let mut session = self.lock_session()?;
        *session = Some(store);
        drop(session);

        self.event_publisher.publish(ItineraryEvent::full(
            ItineraryEventType::SessionStarted,
            Some("start_session".to_string()),
        ));

        tracing::info!("planning session started: days={}", labels.len());
        Ok(labels)
    }

    fn lock_session(&self) -> ApiResult<std::sync::MutexGuard<'_, Option<ItineraryStore>>> {
        self.session
            .lock()
            .map_err(|e| ApiError::InternalError(format!("session lock poisoned: {}", e)))
    }

    fn with_session<T>(
        &self,
        f: impl FnOnce(&mut ItineraryStore) -> ApiResult<T>,
    ) -> ApiResult<T> {
        let mut session = self.lock_session()?;
        let store = session.as_mut().ok_or(ApiError::NoActiveSession)?;
        f(store)
    }

    // ==========================================
    // Planner commands
    // ==========================================

    /// Place an attraction into a day bucket
    ///
    /// Cross-day conflicts come back as
    /// `AssignOutcome::ConfirmationRequired`; settle them with
    /// `resolve_pending_move`.
    pub fn assign_attraction(
        &self,
        attraction_id: &str,
        target_day: &str,
    ) -> ApiResult<AssignOutcome> {
        let outcome = self.with_session(|store| Ok(store.assign(attraction_id, target_day)?))?;

        if matches!(outcome, AssignOutcome::Added { .. }) {
            self.event_publisher.publish(ItineraryEvent::for_day(
                ItineraryEventType::ItineraryChanged,
                Some("assign".to_string()),
                target_day,
            ));
        }

        Ok(outcome)
    }

    /// Settle the outstanding cross-day confirmation
    pub fn resolve_pending_move(&self, decision: MoveDecision) -> ApiResult<MoveResolution> {
        let resolution = self.with_session(|store| Ok(store.resolve_move(decision)?))?;

        if let MoveResolution::Moved(pending) = &resolution {
            self.event_publisher.publish(ItineraryEvent::for_day(
                ItineraryEventType::ItineraryChanged,
                Some("resolve_move".to_string()),
                pending.to_day.clone(),
            ));
        }

        Ok(resolution)
    }

    /// Apply one drag gesture from the UI layer
    ///
    /// # Returns
    /// - Ok(true): the itinerary changed
    /// - Ok(false): cancelled gesture, nothing happened
    pub fn apply_drag(&self, event: &DragEvent) -> ApiResult<bool> {
        let changed = self.with_session(|store| Ok(self.reorder_engine.apply(store, event)?))?;

        if changed {
            self.event_publisher.publish(ItineraryEvent::full(
                ItineraryEventType::ItineraryChanged,
                Some("apply_drag".to_string()),
            ));
        }

        Ok(changed)
    }

    // ==========================================
    // Session queries
    // ==========================================

    /// Snapshot of the current itinerary
    pub fn itinerary(&self) -> ApiResult<Itinerary> {
        self.with_session(|store| Ok(store.itinerary().clone()))
    }

    /// The confirmation currently awaiting a decision, if any
    pub fn pending_move(&self) -> ApiResult<Option<PendingMove>> {
        self.with_session(|store| Ok(store.pending_move().cloned()))
    }

    /// Derive the per-day travel paths for the map layer
    ///
    /// Recomputed in full from current itinerary state on every call;
    /// there is no cached route state to invalidate.
    pub fn compose_routes(&self) -> ApiResult<Vec<DayRoute>> {
        let itinerary = self.itinerary()?;
        let catalog = self.catalog_api.snapshot()?;
        Ok(self.route_composer.compose_routes(&itinerary, &catalog))
    }

    /// Share stub: mint an identifier and link for the current session
    ///
    /// Nothing is persisted and the link does not resolve; sharing is
    /// handled outside this subsystem.
    pub fn export_itinerary(&self) -> ApiResult<SharedItinerary> {
        // Require an active session so the link refers to something.
        self.with_session(|_| Ok(()))?;

        let itinerary_id = uuid::Uuid::new_v4().to_string();
        Ok(SharedItinerary {
            share_link: format!("/itinerary/{}", itinerary_id),
            itinerary_id,
        })
    }

    // ==========================================
    // User-visible notices
    // ==========================================

    /// Localized notice for an assign outcome
    pub fn describe_outcome(&self, outcome: &AssignOutcome) -> String {
        match outcome {
            AssignOutcome::Added { attraction_id, day } => t_with_args(
                "planner.added_to_day",
                &[("name", &self.display_name(attraction_id)), ("day", day)],
            ),
            AssignOutcome::AlreadyInDay { attraction_id, day } => t_with_args(
                "planner.already_in_day",
                &[("name", &self.display_name(attraction_id)), ("day", day)],
            ),
            AssignOutcome::ConfirmationRequired(pending) => t_with_args(
                "planner.confirm_move",
                &[
                    ("name", &self.display_name(&pending.attraction_id)),
                    ("from", &pending.from_day),
                    ("to", &pending.to_day),
                ],
            ),
        }
    }

    /// Localized notice for a settled confirmation
    pub fn describe_resolution(&self, resolution: &MoveResolution) -> String {
        match resolution {
            MoveResolution::Moved(pending) => t_with_args(
                "planner.move_confirmed",
                &[
                    ("name", &self.display_name(&pending.attraction_id)),
                    ("from", &pending.from_day),
                    ("to", &pending.to_day),
                ],
            ),
            MoveResolution::Discarded(pending) => t_with_args(
                "planner.move_declined",
                &[
                    ("name", &self.display_name(&pending.attraction_id)),
                    ("from", &pending.from_day),
                ],
            ),
        }
    }

    // The itinerary is keyed on ids, not on catalog membership; fall
    // back to the raw id when the snapshot cannot resolve a name.
    fn display_name(&self, attraction_id: &str) -> String {
        self.catalog_api
            .get_attraction(attraction_id)
            .map(|a| a.name)
            .unwrap_or_else(|_| attraction_id.to_string())
    }
}
