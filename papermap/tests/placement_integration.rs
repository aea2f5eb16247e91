//! Integration tests for the placement engine.
//!
//! These tests verify the complete placement workflow including:
//! - Uniqueness of position keys across whole feeds
//! - The real-world displacement bound
//! - Determinism under seeded randomness
//! - Latitude correction of the longitude offset
//! - Exhaustion as a defined per-report failure
//! - Concurrent submission through the service facade

use std::sync::Arc;
use std::thread;

use papermap::collector::{NullCollector, VecCollector};
use papermap::coord::{distance_m, GeoPoint};
use papermap::placement::{
    max_offset_degrees, PlacementConfig, PlacementEngine, PlacementError,
};
use papermap::report::{Report, ReportMeta};
use papermap::service::PlacementService;

// =============================================================================
// Test Helpers
// =============================================================================

fn report(lat: f64, lon: f64, name: &str) -> Report {
    Report::new(
        GeoPoint::new(lat, lon),
        ReportMeta {
            name: name.to_string(),
            ..ReportMeta::default()
        },
    )
}

/// A feed with heavy duplication, shaped like a real report feed: a few
/// hot coordinates submitted over and over plus a scatter of unique ones.
fn duplicate_heavy_feed() -> Vec<Report> {
    let mut feed = Vec::new();
    for i in 0..8 {
        feed.push(report(52.5, 13.4, &format!("berlin-{i}")));
    }
    for i in 0..7 {
        feed.push(report(1.352083, 103.819836, &format!("singapore-{i}")));
    }
    for i in 0..3 {
        feed.push(report(55.378051, -3.435973, &format!("uk-{i}")));
    }
    feed.push(report(-42.9, 147.3, "hobart"));
    feed.push(report(37.7749295, -122.4194155, "san-francisco"));
    feed.push(report(6.4, 5.6, "benin-city"));
    feed
}

// =============================================================================
// Uniqueness
// =============================================================================

#[test]
fn test_n_reports_yield_n_distinct_keys() {
    let feed = duplicate_heavy_feed();
    let total = feed.len();

    let mut engine = PlacementEngine::seeded(PlacementConfig::default(), VecCollector::new(), 7);
    for r in feed {
        engine.place(r).expect("placement should succeed");
    }

    assert_eq!(engine.registry().len(), total);
    assert_eq!(engine.collector().len(), total);

    // Key set built from collector output agrees with the registry
    let mut keys: Vec<_> = engine
        .collector()
        .points()
        .iter()
        .map(|p| p.position().key())
        .collect();
    keys.sort_by_key(|k| format!("{k}"));
    keys.dedup();
    assert_eq!(keys.len(), total, "collector saw a duplicate key");
}

#[test]
fn test_unique_coordinates_pass_through_unchanged() {
    let mut engine = PlacementEngine::seeded(PlacementConfig::default(), NullCollector, 7);

    let placed = engine
        .place(report(53.9623008, -1.0818844, "york"))
        .unwrap();
    assert_eq!(placed.position(), GeoPoint::new(53.9623008, -1.0818844));
    assert!(!placed.displaced());
}

// =============================================================================
// Displacement bound
// =============================================================================

#[test]
fn test_displaced_points_stay_near_the_original() {
    let mut engine = PlacementEngine::seeded(PlacementConfig::default(), VecCollector::new(), 21);
    for i in 0..100 {
        engine.place(report(52.5, 13.4, &format!("r{i}"))).unwrap();
    }

    // Offsets are drawn per axis, so the worst case is the diagonal of a
    // 10 m × 10 m box; allow a little slack for the degree approximations.
    let bound = 10.0 * std::f64::consts::SQRT_2 * 1.01;
    for point in engine.collector().points().iter().filter(|p| p.displaced()) {
        let d = distance_m(point.original(), point.position());
        assert!(d > 0.0 && d <= bound, "displaced {} m", d);
    }
}

// =============================================================================
// Scenario: two reports at the Berlin city-center default
// =============================================================================

#[test]
fn test_berlin_duplicate_scenario() {
    let mut engine = PlacementEngine::seeded(PlacementConfig::default(), VecCollector::new(), 5);

    let a = engine.place(report(52.5, 13.4, "A")).unwrap();
    let b = engine.place(report(52.5, 13.4, "B")).unwrap();

    // A keeps the exact coordinate
    assert_eq!(a.position(), GeoPoint::new(52.5, 13.4));

    // B is northeast of A within the per-axis degree budgets
    let delta_lat = b.position().lat - 52.5;
    let delta_lon = b.position().lon - 13.4;
    let (max_lat, max_lon) = max_offset_degrees(52.5, 10.0);

    assert!(delta_lat > 0.0 && delta_lat <= max_lat, "δlat = {delta_lat}");
    assert!(delta_lon > 0.0 && delta_lon <= max_lon, "δlon = {delta_lon}");

    // Both keys registered and distinct
    assert!(engine.registry().contains(&a.position().key()));
    assert!(engine.registry().contains(&b.position().key()));
    assert_ne!(a.position().key(), b.position().key());
    assert_eq!(engine.registry().len(), 2);
}

// =============================================================================
// Latitude correction
// =============================================================================

#[test]
fn test_longitude_budget_grows_toward_the_pole() {
    // Same 10 m real-world target, expressed in degrees: tiny at the
    // equator, large near the pole where meridians converge.
    let (_, lon_near_equator) = max_offset_degrees(0.5, 10.0);
    let (_, lon_near_pole) = max_offset_degrees(85.0, 10.0);

    assert!(lon_near_pole > lon_near_equator * 10.0);
}

#[test]
fn test_displacement_at_high_latitude_still_within_bound() {
    let mut engine = PlacementEngine::seeded(PlacementConfig::default(), VecCollector::new(), 13);
    for i in 0..20 {
        // Tromsø, well north of the arctic circle
        engine
            .place(report(69.6492, 18.9553, &format!("r{i}")))
            .unwrap();
    }

    let bound = 10.0 * std::f64::consts::SQRT_2 * 1.01;
    for point in engine.collector().points().iter().filter(|p| p.displaced()) {
        let d = distance_m(point.original(), point.position());
        assert!(d <= bound, "displaced {} m at 69.6°N", d);
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_seeded_runs_are_reproducible() {
    let run = |seed: u64| -> Vec<(u64, u64)> {
        let mut engine =
            PlacementEngine::seeded(PlacementConfig::default(), VecCollector::new(), seed);
        for r in duplicate_heavy_feed() {
            engine.place(r).unwrap();
        }
        engine
            .into_collector()
            .into_points()
            .iter()
            .map(|p| (p.position().lat.to_bits(), p.position().lon.to_bits()))
            .collect()
    };

    assert_eq!(run(1234), run(1234), "same seed, same placements");
}

// =============================================================================
// Exhaustion
// =============================================================================

#[test]
fn test_exhaustion_leaves_registry_unchanged() {
    let config = PlacementConfig::default().with_max_retries(0);
    let mut engine = PlacementEngine::seeded(config, VecCollector::new(), 1);

    engine.place(report(52.5, 13.4, "A")).unwrap();
    let err = engine.place(report(52.5, 13.4, "B")).unwrap_err();

    assert_eq!(err, PlacementError::Exhausted { attempts: 0 });
    assert_eq!(engine.registry().len(), 1);
    assert_eq!(engine.collector().len(), 1, "collector must not see B");
}

// =============================================================================
// Concurrent submission
// =============================================================================

#[test]
fn test_concurrent_feed_load_and_live_submissions() {
    let engine = PlacementEngine::new(PlacementConfig::default(), VecCollector::new());
    let service = Arc::new(PlacementService::new(engine));

    // One thread plays the historical batch load, others play live
    // submitters, all colliding on the same hot coordinates.
    let batch_service = Arc::clone(&service);
    let batch = thread::spawn(move || {
        for r in duplicate_heavy_feed() {
            batch_service.submit(r).expect("batch placement failed");
        }
    });

    let live: Vec<_> = (0..4)
        .map(|t| {
            let svc = Arc::clone(&service);
            thread::spawn(move || {
                for i in 0..10 {
                    svc.submit(report(52.5, 13.4, &format!("live-{t}-{i}")))
                        .expect("live placement failed");
                }
            })
        })
        .collect();

    batch.join().expect("batch thread panicked");
    for h in live {
        h.join().expect("live thread panicked");
    }

    let expected = duplicate_heavy_feed().len() + 4 * 10;
    assert_eq!(service.placed_count(), expected);

    let engine = Arc::into_inner(service)
        .expect("service still shared")
        .into_engine();
    assert_eq!(engine.collector().len(), expected);
}
