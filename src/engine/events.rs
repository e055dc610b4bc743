// ==========================================
// Jharkhand Trip Planner - engine layer events
// ==========================================
// The planner publishes an event after every itinerary
// mutation so the rendering layer can re-derive routes and
// markers. The engine defines the trait; whoever renders
// implements it. Routes themselves stay derived, never stored.
// ==========================================

use std::error::Error;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ==========================================
// Event types
// ==========================================

/// What changed in the planning session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItineraryEventType {
    /// A planning session was created from a trip window
    SessionStarted,
    /// A day bucket gained, lost or reordered an attraction
    ItineraryChanged,
    /// The catalog snapshot was replaced
    CatalogReloaded,
}

impl ItineraryEventType {
    pub fn as_str(&self) -> &str {
        match self {
            ItineraryEventType::SessionStarted => "SessionStarted",
            ItineraryEventType::ItineraryChanged => "ItineraryChanged",
            ItineraryEventType::CatalogReloaded => "CatalogReloaded",
        }
    }
}

/// One published planning event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryEvent {
    pub event_type: ItineraryEventType,
    /// Operation that caused the event, e.g. "assign", "resolve_move"
    pub source: Option<String>,
    /// Affected day label (None = whole itinerary)
    pub day: Option<String>,
}

impl ItineraryEvent {
    /// Event affecting the whole itinerary
    pub fn full(event_type: ItineraryEventType, source: Option<String>) -> Self {
        Self {
            event_type,
            source,
            day: None,
        }
    }

    /// Event affecting one day bucket
    pub fn for_day(
        event_type: ItineraryEventType,
        source: Option<String>,
        day: impl Into<String>,
    ) -> Self {
        Self {
            event_type,
            source,
            day: Some(day.into()),
        }
    }
}

// ==========================================
// Publisher trait
// ==========================================

/// Itinerary event publisher
///
/// Defined by the engine, implemented by the rendering layer; the
/// engine never depends on a concrete renderer.
pub trait ItineraryEventPublisher: Send + Sync {
    /// Publish one event
    fn publish(&self, event: ItineraryEvent) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// No-op publisher for headless use and unit tests
#[derive(Debug, Clone, Default)]
pub struct NoOpEventPublisher;

impl ItineraryEventPublisher for NoOpEventPublisher {
    fn publish(&self, event: ItineraryEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::debug!(
            "NoOpEventPublisher: skipping event - type={}, source={:?}",
            event.event_type.as_str(),
            event.source
        );
        Ok(())
    }
}

/// Wrapper simplifying `Option<Arc<dyn ItineraryEventPublisher>>`
pub struct OptionalEventPublisher {
    inner: Option<Arc<dyn ItineraryEventPublisher>>,
}

impl OptionalEventPublisher {
    pub fn with_publisher(publisher: Arc<dyn ItineraryEventPublisher>) -> Self {
        Self {
            inner: Some(publisher),
        }
    }

    pub fn none() -> Self {
        Self { inner: None }
    }

    /// Publish if a publisher is configured
    pub fn publish(&self, event: ItineraryEvent) {
        if let Some(publisher) = &self.inner {
            if let Err(e) = publisher.publish(event) {
                tracing::warn!("event publish failed: {}", e);
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }
}

impl Default for OptionalEventPublisher {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_event() {
        let event = ItineraryEvent::full(
            ItineraryEventType::SessionStarted,
            Some("start_session".to_string()),
        );
        assert!(event.day.is_none());
        assert_eq!(event.event_type.as_str(), "SessionStarted");
    }

    #[test]
    fn test_day_event() {
        let event = ItineraryEvent::for_day(
            ItineraryEventType::ItineraryChanged,
            Some("assign".to_string()),
            "Day 2",
        );
        assert_eq!(event.day.as_deref(), Some("Day 2"));
    }

    #[test]
    fn test_optional_publisher_without_target() {
        let publisher = OptionalEventPublisher::none();
        assert!(!publisher.is_configured());
        // Publishing without a target must be harmless.
        publisher.publish(ItineraryEvent::full(ItineraryEventType::CatalogReloaded, None));
    }
}
