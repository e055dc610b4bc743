// ==========================================
// Jharkhand Trip Planner - route advisor
// ==========================================
// Suggestion surface for the onboarding journey: distance and
// duration between origin and destination, corridor waypoints,
// attractions near the corridor, and a by-city day grouping.
// Suggestions only; the advisor never reorders or mutates a
// user's itinerary.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::{Attraction, GeoPoint};

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Known places for offline geocoding; falls back to Ranchi
const GAZETTEER: [(&str, f64, f64); 7] = [
    ("ranchi", 23.3441, 85.3096),
    ("jamshedpur", 22.8046, 86.2029),
    ("hazaribagh", 23.9929, 85.3644),
    ("sahibganj", 25.0504, 87.8314),
    ("dhanbad", 23.7957, 86.4304),
    ("kolkata", 22.5726, 88.3639),
    ("patna", 25.5941, 85.1376),
];

// ==========================================
// Advisor results
// ==========================================

/// Basic corridor info between origin and destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub distance_km: f64,
    pub estimated_duration_hours: f64,
    pub waypoints: Vec<GeoPoint>,
}

/// An attraction within the corridor buffer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyAttraction {
    #[serde(flatten)]
    pub attraction: Attraction,
    pub distance_from_route_km: f64,
}

/// One suggested trip day grouped by city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySuggestion {
    pub day: u32,
    pub city: String,
    pub attractions: Vec<Attraction>,
    pub estimated_duration_hours: u32,
}

// ==========================================
// RouteAdvisor
// ==========================================

/// Corridor and grouping suggestions
pub struct RouteAdvisor {
    average_speed_kmh: f64,
    waypoint_segments: usize,
}

impl RouteAdvisor {
    pub fn new() -> Self {
        Self {
            average_speed_kmh: 60.0,
            waypoint_segments: 5,
        }
    }

    pub fn with_settings(average_speed_kmh: f64, waypoint_segments: usize) -> Self {
        Self {
            average_speed_kmh,
            waypoint_segments: waypoint_segments.max(1),
        }
    }

    /// Great-circle distance between two points (haversine)
    pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
        let lat1 = a.lat.to_radians();
        let lat2 = b.lat.to_radians();
        let dlat = (b.lat - a.lat).to_radians();
        let dlng = (b.lng - a.lng).to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Resolve a place name against the offline gazetteer
    ///
    /// Case-insensitive substring match; unknown places resolve to
    /// Ranchi, the catalog's default destination.
    pub fn geocode(&self, place: &str) -> GeoPoint {
        let needle = place.to_lowercase();
        for (name, lat, lng) in GAZETTEER {
            if needle.contains(name) {
                return GeoPoint::new(lat, lng);
            }
        }
        GeoPoint::new(23.3441, 85.3096)
    }

    /// Corridor between two points: distance, duration estimate at the
    /// configured average speed, and linearly interpolated waypoints
    pub fn calculate_route(&self, origin: GeoPoint, destination: GeoPoint) -> RouteInfo {
        let distance = Self::haversine_km(origin, destination);

        RouteInfo {
            origin,
            destination,
            distance_km: round2(distance),
            estimated_duration_hours: round1(distance / self.average_speed_kmh),
            waypoints: self.waypoints(origin, destination),
        }
    }

    fn waypoints(&self, origin: GeoPoint, destination: GeoPoint) -> Vec<GeoPoint> {
        (0..=self.waypoint_segments)
            .map(|i| {
                let ratio = i as f64 / self.waypoint_segments as f64;
                GeoPoint::new(
                    origin.lat + (destination.lat - origin.lat) * ratio,
                    origin.lng + (destination.lng - origin.lng) * ratio,
                )
            })
            .collect()
    }

    /// Attractions within `buffer_km` of any corridor waypoint
    ///
    /// Deduplicated by id, optionally restricted to the given interests,
    /// sorted by distance from the corridor.
    pub fn find_nearby_attractions(
        &self,
        catalog: &[Attraction],
        waypoints: &[GeoPoint],
        buffer_km: f64,
        interests: &[String],
    ) -> Vec<NearbyAttraction> {
        let mut nearby: Vec<NearbyAttraction> = Vec::new();

        for waypoint in waypoints {
            for attraction in catalog {
                let distance = Self::haversine_km(*waypoint, attraction.coordinates);
                if distance > buffer_km {
                    continue;
                }
                if !interests.is_empty()
                    && !interests.iter().any(|i| attraction.has_interest(i))
                {
                    continue;
                }
                if nearby.iter().any(|n| n.attraction.id == attraction.id) {
                    continue;
                }
                nearby.push(NearbyAttraction {
                    attraction: attraction.clone(),
                    distance_from_route_km: round2(distance),
                });
            }
        }

        nearby.sort_by(|a, b| {
            a.distance_from_route_km
                .partial_cmp(&b.distance_from_route_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        nearby
    }

    /// Group a picked attraction set into numbered day suggestions by
    /// city, with a flat two-hours-per-stop duration estimate
    pub fn suggest_days(&self, attractions: &[Attraction]) -> Vec<DaySuggestion> {
        // Preserve first-seen city order.
        let mut groups: Vec<(String, Vec<Attraction>)> = Vec::new();
        for attraction in attractions {
            match groups.iter_mut().find(|(city, _)| *city == attraction.city) {
                Some((_, members)) => members.push(attraction.clone()),
                None => groups.push((attraction.city.clone(), vec![attraction.clone()])),
            }
        }

        groups
            .into_iter()
            .enumerate()
            .map(|(i, (city, members))| DaySuggestion {
                day: i as u32 + 1,
                estimated_duration_hours: members.len() as u32 * 2,
                city,
                attractions: members,
            })
            .collect()
    }
}

impl Default for RouteAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
