// ==========================================
// Jharkhand Trip Planner - trip domain model
// ==========================================
// TripWindow is created once at the end of onboarding and
// is immutable for the planning session. The itinerary is a
// fixed set of ordered day buckets keyed by "Day N" labels.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::Placement;

// ==========================================
// TripWindow - dates and destination of one trip
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripWindow {
    pub start_date: NaiveDate, // inclusive
    pub end_date: NaiveDate,   // inclusive
    pub origin: String,        // where the traveller starts from
    pub destination: String,   // destination city for the catalog fetch
    #[serde(default)]
    pub interests: Vec<String>, // interests chosen during onboarding
}

impl TripWindow {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        origin: impl Into<String>,
        destination: impl Into<String>,
        interests: Vec<String>,
    ) -> Self {
        Self {
            start_date,
            end_date,
            origin: origin.into(),
            destination: destination.into(),
            interests,
        }
    }

    /// Trip length in whole days, both endpoints included.
    ///
    /// Negative or zero when the range is inverted; range validation
    /// is the trip-window engine's job.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

// ==========================================
// DayPlan - one ordered day bucket
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub label: String, // "Day 1" .. "Day N"
    pub attraction_ids: Vec<String>, // user-declared visiting order
}

impl DayPlan {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            attraction_ids: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.attraction_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attraction_ids.is_empty()
    }

    pub fn contains(&self, attraction_id: &str) -> bool {
        self.attraction_ids.iter().any(|id| id == attraction_id)
    }
}

// ==========================================
// Itinerary - the full day-bucket mapping
// ==========================================
// The day-label set is fixed for the lifetime of one
// TripWindow; engine operations never resize it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub days: Vec<DayPlan>, // ordinal order: Day 1 first
}

impl Itinerary {
    /// Build empty buckets `Day 1 .. Day N`
    pub fn with_day_count(day_count: usize) -> Self {
        let days = (1..=day_count)
            .map(|n| DayPlan::new(format!("Day {}", n)))
            .collect();
        Self { days }
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Ordered day labels
    pub fn labels(&self) -> Vec<String> {
        self.days.iter().map(|d| d.label.clone()).collect()
    }

    pub fn day(&self, label: &str) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.label == label)
    }

    pub fn day_mut(&mut self, label: &str) -> Option<&mut DayPlan> {
        self.days.iter_mut().find(|d| d.label == label)
    }

    /// Ordinal position of a day label (0-based), used for palette cycling
    pub fn day_index(&self, label: &str) -> Option<usize> {
        self.days.iter().position(|d| d.label == label)
    }

    /// Current placement of an attraction id
    pub fn placement_of(&self, attraction_id: &str) -> Placement {
        for day in &self.days {
            if day.contains(attraction_id) {
                return Placement::AssignedTo(day.label.clone());
            }
        }
        Placement::Unassigned
    }

    /// Total number of assigned attraction ids across all days
    pub fn total_assigned(&self) -> usize {
        self.days.iter().map(DayPlan::len).sum()
    }

    /// All assigned ids in day order, used by conservation checks
    pub fn assigned_ids(&self) -> Vec<String> {
        self.days
            .iter()
            .flat_map(|d| d.attraction_ids.iter().cloned())
            .collect()
    }
}
