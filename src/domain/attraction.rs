// ==========================================
// Jharkhand Trip Planner - attraction domain model
// ==========================================
// Attraction and hotel records as delivered by the
// catalog backend. Immutable once loaded; identity is `id`.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// GeoPoint - WGS84 coordinate pair
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64, // latitude, degrees
    pub lng: f64, // longitude, degrees
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// ==========================================
// Attraction - point of interest
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: String,          // unique id, e.g. "ranchi_001"
    pub name: String,        // display name
    pub city: String,        // home city
    pub coordinates: GeoPoint,
    #[serde(rename = "type")]
    pub category: String,    // free-form category (waterfall/temple/...)
    #[serde(default)]
    pub interest_tags: Vec<String>, // may be empty
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time: Option<String>, // e.g. "October to March"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>, // e.g. "2-3 hours"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Attraction {
    /// Whether the attraction carries the given interest tag
    pub fn has_interest(&self, tag: &str) -> bool {
        self.interest_tags.iter().any(|t| t == tag)
    }
}

// ==========================================
// Hotel - lodging record for map markers
// ==========================================
// Consumed only by the rendering layer; the planning
// engine never assigns hotels to days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub city: String,
    pub coordinates: GeoPoint,
    pub rooms: u32,
    pub contact: String,
    pub price_range: String,
    #[serde(default)]
    pub amenities: Vec<String>,
}
