//! End-to-end validation of the coverage engine's documented behavior.
//!
//! These tests exercise the public surface the way a host application
//! would: marked samples, drawn walls, a placed transmitter, and
//! on-demand grids.

use wifi_coverage_map::prelude::*;
use wifi_coverage_map::{dbm_to_percent, RSSI_FLOOR_DBM};

fn sample_at(x: f64, y: f64, rssi: f64) -> Sample {
    Sample::with_timestamp(
        PixelPoint::new(x, y),
        rssi,
        Timestamp::new(1_700_000_000, 0),
        SourceId::new("TestNet"),
    )
}

#[test]
fn capacity_three_evicts_oldest_first() {
    let config = EngineConfig {
        sample_capacity: 3,
        ..Default::default()
    };
    let mut map = MapState::new(config).unwrap();

    for rssi in [-60.0, -70.0, -80.0, -90.0] {
        map.add_sample(sample_at(0.0, 0.0, rssi)).unwrap();
    }

    let readings: Vec<f64> = map.samples().iter().map(|s| s.rssi_dbm).collect();
    assert_eq!(readings, vec![-70.0, -80.0, -90.0]);
    assert!(map.samples().len() <= 3);
}

#[test]
fn store_never_exceeds_capacity() {
    let config = EngineConfig {
        sample_capacity: 10,
        ..Default::default()
    };
    let mut map = MapState::new(config).unwrap();

    for i in 0..100 {
        map.add_sample(sample_at(i as f64, 0.0, -60.0)).unwrap();
    }
    assert_eq!(map.samples().len(), 10);
    // The ten newest survive.
    assert_eq!(map.samples().iter().next().unwrap().position.x, 90.0);
}

#[test]
fn classification_percentage_is_monotone() {
    let readings = [-110.0, -95.0, -81.0, -80.0, -70.0, -60.0, -50.0, -35.0];
    for pair in readings.windows(2) {
        let lower = SignalQuality::classify(pair[0]);
        let higher = SignalQuality::classify(pair[1]);
        assert!(
            lower.percentage <= higher.percentage,
            "percentage not monotone between {} and {} dBm",
            pair[0],
            pair[1]
        );
    }
    assert!((dbm_to_percent(-100.0)).abs() < f64::EPSILON);
    assert!((dbm_to_percent(-50.0) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn single_sample_interpolates_to_its_own_value() {
    let mut map = MapState::with_defaults();
    map.add_sample(sample_at(100.0, 100.0, -64.0)).unwrap();

    let grid = GridSpec::new(200.0, 200.0, 10.0).unwrap();
    let coverage = map.interpolate(&grid);

    for cell in coverage.cells() {
        if let Some(signal) = cell.signal_dbm {
            assert!((signal - (-64.0)).abs() < 1e-12);
        }
    }
    assert!(coverage.defined_count() > 0);
}

#[test]
fn confidence_is_zero_beyond_every_support_radius() {
    let mut map = MapState::with_defaults();
    map.add_sample(sample_at(0.0, 0.0, -60.0)).unwrap();
    map.add_sample(sample_at(20.0, 0.0, -70.0)).unwrap();

    let support = map.config().decay.support_radius_px();
    let grid = GridSpec::new(600.0, 40.0, 20.0).unwrap();
    let coverage = map.interpolate(&grid);

    for cell in coverage.cells() {
        let beyond_all = map
            .samples()
            .iter()
            .all(|s| cell.position.distance_to(&s.position) > support);
        if beyond_all {
            assert!(cell.confidence.abs() < f64::EPSILON);
            assert!(cell.signal_dbm.is_none());
        }
    }
}

#[test]
fn wall_endpoint_order_does_not_matter() {
    let a = PixelPoint::new(50.0, -10.0);
    let b = PixelPoint::new(50.0, 10.0);

    let mut forward = MapState::with_defaults();
    forward.set_transmitter(PixelPoint::new(0.0, 0.0));
    forward.add_wall(a, b).unwrap();

    let mut reversed = MapState::with_defaults();
    reversed.set_transmitter(PixelPoint::new(0.0, 0.0));
    reversed.add_wall(b, a).unwrap();

    let target = PixelPoint::new(100.0, 0.0);
    assert_eq!(
        forward.predict_at(target).unwrap(),
        reversed.predict_at(target).unwrap()
    );
}

#[test]
fn prediction_decreases_with_distance_until_the_floor() {
    let mut map = MapState::with_defaults();
    map.set_transmitter(PixelPoint::new(0.0, 0.0));

    let mut last = f64::MAX;
    for d in (1..=30).map(|i| i as f64 * 50.0) {
        let predicted = map.predict_at(PixelPoint::new(d, 0.0)).unwrap();
        assert!(
            predicted < last || (predicted - RSSI_FLOOR_DBM).abs() < f64::EPSILON,
            "prediction rose at distance {d}"
        );
        last = predicted;
    }
}

#[test]
fn free_space_scenario_minus_forty() {
    let mut map = MapState::with_defaults();
    map.set_transmitter(PixelPoint::new(0.0, 0.0));

    let predicted = map.predict_at(PixelPoint::new(100.0, 0.0)).unwrap();
    assert!((predicted - (-40.0)).abs() < 1e-12);
}

#[test]
fn one_wall_scenario_minus_fifty_five() {
    let mut map = MapState::with_defaults();
    map.set_transmitter(PixelPoint::new(0.0, 0.0));
    map.add_wall(PixelPoint::new(50.0, -10.0), PixelPoint::new(50.0, 10.0))
        .unwrap();

    let predicted = map.predict_at(PixelPoint::new(100.0, 0.0)).unwrap();
    assert!((predicted - (-55.0)).abs() < 1e-12);
}

#[test]
fn adding_a_blocking_wall_costs_exactly_the_attenuation() {
    let mut map = MapState::with_defaults();
    map.set_transmitter(PixelPoint::new(0.0, 0.0));
    let target = PixelPoint::new(100.0, 0.0);

    let open = map.predict_at(target).unwrap();
    map.add_wall(PixelPoint::new(50.0, -10.0), PixelPoint::new(50.0, 10.0))
        .unwrap();
    let blocked = map.predict_at(target).unwrap();

    let attenuation = map.config().propagation.per_wall_attenuation_db;
    assert!((open - blocked - attenuation).abs() < 1e-12);
}

#[test]
fn interpolated_and_predicted_grids_share_a_shape() {
    let mut map = MapState::with_defaults();
    map.add_sample(sample_at(50.0, 50.0, -60.0)).unwrap();
    map.set_transmitter(PixelPoint::new(50.0, 50.0));

    let grid = GridSpec::new(100.0, 100.0, 25.0).unwrap();
    let interpolated = map.interpolate(&grid);
    let predicted = map.predict(&grid).unwrap();

    assert_eq!(interpolated.cells().len(), predicted.cells().len());
    for (a, b) in interpolated.cells().iter().zip(predicted.cells()) {
        assert_eq!(a.position, b.position);
    }
}

#[test]
fn snapshot_json_round_trip_reproduces_the_session() {
    let mut map = MapState::with_defaults();
    map.add_sample(sample_at(10.0, 20.0, -58.0)).unwrap();
    map.add_sample(sample_at(60.0, 80.0, -72.0)).unwrap();
    map.add_sample(sample_at(110.0, 40.0, -66.0)).unwrap();
    map.add_wall(PixelPoint::new(0.0, 50.0), PixelPoint::new(100.0, 50.0))
        .unwrap();
    map.add_wall(PixelPoint::new(80.0, 0.0), PixelPoint::new(80.0, 100.0))
        .unwrap();
    map.set_transmitter(PixelPoint::new(5.0, 5.0));

    let json = map.snapshot().to_json().unwrap();
    let parsed = MapSnapshot::from_json(&json).unwrap();

    let mut restored = MapState::with_defaults();
    restored.import(&parsed).unwrap();

    assert_eq!(restored.samples().to_vec(), map.samples().to_vec());
    assert_eq!(restored.walls(), map.walls());
    assert_eq!(restored.transmitter(), map.transmitter());
    assert_eq!(restored.stats(), map.stats());
}

#[test]
fn cleared_map_reports_no_data() {
    let mut map = MapState::with_defaults();
    map.add_sample(sample_at(0.0, 0.0, -60.0)).unwrap();
    map.set_transmitter(PixelPoint::new(5.0, 5.0));
    map.clear();

    assert!(map.stats().is_none());
    let grid = GridSpec::new(100.0, 100.0, 50.0).unwrap();
    assert_eq!(map.interpolate(&grid).defined_count(), 0);
    assert!(map.predict(&grid).is_err());
}
