// ==========================================
// RouteAdvisor and RouteApi tests
// ==========================================
// Corridor math, nearby suggestions, day grouping.
// ==========================================


use std::sync::Arc;

use jharkhand_trip_planner::api::{ApiError, CatalogApi, RouteApi};
use jharkhand_trip_planner::domain::GeoPoint;
use jharkhand_trip_planner::engine::{OptionalEventPublisher, RouteAdvisor};
use jharkhand_trip_planner::repository::{StaticAttractionSource, StaticHotelSource};
use test_helpers::{attraction, sample_catalog};

#[test]
fn test_corridor_distance_and_duration() {
    let advisor = RouteAdvisor::new();
    let route = advisor.calculate_route(
        advisor.geocode("Ranchi"),
        advisor.geocode("Jamshedpur"),
    );

    assert!(route.distance_km > 100.0 && route.distance_km < 125.0);
    // Duration estimate assumes 60 km/h.
    let expected_hours = route.distance_km / 60.0;
    assert!((route.estimated_duration_hours - expected_hours).abs() < 0.1);
    assert_eq!(route.waypoints.len(), 6);
}

#[test]
fn test_nearby_dedup_and_sort() {
    let advisor = RouteAdvisor::new();
    let catalog = sample_catalog();

    // Two overlapping waypoints over Ranchi city center: every match
    // must appear once, ordered by distance.
    let waypoints = vec![GeoPoint::new(23.35, 85.32), GeoPoint::new(23.36, 85.33)];
    let nearby = advisor.find_nearby_attractions(&catalog, &waypoints, 10.0, &[]);

    let mut ids: Vec<&str> = nearby.iter().map(|n| n.attraction.id.as_str()).collect();
    let found = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(found, ids.len());

    assert!(nearby
        .windows(2)
        .all(|w| w[0].distance_from_route_km <= w[1].distance_from_route_km));
}

#[test]
fn test_nearby_respects_buffer_and_interests() {
    let advisor = RouteAdvisor::new();
    let catalog = sample_catalog();
    let waypoints = vec![GeoPoint::new(23.3441, 85.3096)];

    // Tight buffer: only the lakefront cluster qualifies.
    let close = advisor.find_nearby_attractions(&catalog, &waypoints, 4.0, &[]);
    assert!(close.iter().any(|n| n.attraction.id == "ranchi-lake"));
    assert!(close.iter().all(|n| n.attraction.id != "hundru-falls"));

    // Interest restriction drops non-matching attractions entirely.
    let spiritual = advisor.find_nearby_attractions(
        &catalog,
        &waypoints,
        50.0,
        &["Spirituality".to_string()],
    );
    assert!(spiritual
        .iter()
        .all(|n| n.attraction.has_interest("Spirituality")));
}

#[test]
fn test_day_suggestions_group_by_city() {
    let advisor = RouteAdvisor::new();
    let mut picked = vec![
        attraction("r1", "Hundru Falls", 23.42, 85.60, &["Adventure"]),
        attraction("r2", "Ranchi Lake", 23.34, 85.31, &["Relaxation"]),
    ];
    let mut jamshedpur = attraction("j1", "Jubilee Park", 22.80, 86.20, &["Relaxation"]);
    jamshedpur.city = "Jamshedpur".to_string();
    picked.push(jamshedpur);

    let days = advisor.suggest_days(&picked);
    assert_eq!(days.len(), 2);

    assert_eq!(days[0].day, 1);
    assert_eq!(days[0].city, "Ranchi");
    assert_eq!(days[0].attractions.len(), 2);
    assert_eq!(days[0].estimated_duration_hours, 4);

    assert_eq!(days[1].day, 2);
    assert_eq!(days[1].city, "Jamshedpur");
    assert_eq!(days[1].estimated_duration_hours, 2);
}

// ==========================================
// RouteApi surface
// ==========================================

fn route_api() -> (Arc<CatalogApi>, RouteApi) {
    let catalog_api = Arc::new(CatalogApi::new(
        Arc::new(StaticAttractionSource::new().unwrap()),
        Arc::new(StaticHotelSource::new().unwrap()),
        OptionalEventPublisher::none(),
    ));
    let api = RouteApi::new(catalog_api.clone(), RouteAdvisor::new());
    (catalog_api, api)
}

#[tokio::test]
async fn test_route_api_requires_endpoints() {
    let (_catalog, api) = route_api();
    let result = api.calculate_with_suggestions("", "Ranchi", &[], None);
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

#[tokio::test]
async fn test_route_api_suggestions_over_loaded_catalog() {
    let (catalog, api) = route_api();
    catalog.load_attractions("Ranchi").await.unwrap();

    let suggestions = api
        .calculate_with_suggestions("Kolkata", "Ranchi", &[], Some(15.0))
        .unwrap();
    assert_eq!(suggestions.suggestions_count, suggestions.nearby_attractions.len());
    // The corridor ends over Ranchi, so the lakefront sights qualify.
    assert!(suggestions
        .nearby_attractions
        .iter()
        .any(|n| n.attraction.id == "ranchi_006"));
}

#[tokio::test]
async fn test_route_api_day_grouping_requires_known_ids() {
    let (catalog, api) = route_api();
    catalog.load_attractions("Ranchi").await.unwrap();

    assert!(matches!(api.suggest_days(&[]), Err(ApiError::InvalidInput(_))));
    assert!(api.suggest_days(&["nowhere_999".to_string()]).is_err());

    let days = api
        .suggest_days(&["ranchi_001".to_string(), "ranchi_006".to_string()])
        .unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].city, "Ranchi");
    assert_eq!(days[0].attractions.len(), 2);
}
