// ==========================================
// Jharkhand Trip Planner - route composer
// ==========================================
// Derives, per day, the ordered coordinate sequence the map
// layer draws as a polyline. A pure projection of the user's
// chosen order: no shortest-path, no nearest-neighbor. Always
// recomputed from current itinerary state; nothing is cached.
// ==========================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Attraction, GeoPoint, Itinerary};

/// Fixed polyline palette, cycled by day ordinal
pub const DAY_ROUTE_COLORS: [&str; 6] = ["blue", "green", "red", "orange", "purple", "teal"];

/// One day's renderable travel path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRoute {
    pub day: String,
    pub color: String, // palette color for this day's polyline
    pub positions: Vec<GeoPoint>, // visiting order as the user arranged it
}

/// Per-day route derivation
pub struct RouteComposer;

impl RouteComposer {
    pub fn new() -> Self {
        Self
    }

    /// Palette color for a 0-based day ordinal; stable across recomputation
    pub fn day_color(&self, day_index: usize) -> &'static str {
        DAY_ROUTE_COLORS[day_index % DAY_ROUTE_COLORS.len()]
    }

    /// Project the itinerary into per-day coordinate sequences
    ///
    /// Days with fewer than two resolvable stops produce no route (a
    /// single point needs no connecting line). Ids the catalog snapshot
    /// can no longer resolve are skipped.
    pub fn compose_routes(&self, itinerary: &Itinerary, catalog: &[Attraction]) -> Vec<DayRoute> {
        let index: HashMap<&str, GeoPoint> = catalog
            .iter()
            .map(|a| (a.id.as_str(), a.coordinates))
            .collect();

        let mut routes = Vec::new();
        for (day_index, day) in itinerary.days.iter().enumerate() {
            let positions: Vec<GeoPoint> = day
                .attraction_ids
                .iter()
                .filter_map(|id| {
                    let point = index.get(id.as_str()).copied();
                    if point.is_none() {
                        tracing::debug!("route skips unresolvable attraction id={}", id);
                    }
                    point
                })
                .collect();

            if positions.len() > 1 {
                routes.push(DayRoute {
                    day: day.label.clone(),
                    color: self.day_color(day_index).to_string(),
                    positions,
                });
            }
        }

        routes
    }
}

impl Default for RouteComposer {
    fn default() -> Self {
        Self::new()
    }
}
