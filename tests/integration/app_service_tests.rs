//! Integration tests for the AppService → sensors → telemetry pipeline.
//!
//! These run on the host (x86_64) and verify the cadence handling,
//! leak-edge events, and property-store publication chain without any
//! real hardware.

use crate::mock_hw::{LogSink, MockSensors};
use tanksentry::adapters::cloud::PropertyStore;
use tanksentry::app::service::AppService;
use tanksentry::config::SystemConfig;
use tanksentry::sensors::leak::LeakChannel;

fn make_app() -> (AppService, MockSensors, LogSink) {
    let config = SystemConfig::default();
    let mut app = AppService::new(config);
    let hw = MockSensors::new();
    let mut sink = LogSink::new();
    app.start(&mut sink);
    (app, hw, sink)
}

// ── Cadence: first tick reads immediately, then waits ─────────

#[test]
fn first_tick_reads_sensors_and_emits_telemetry() {
    let (mut app, mut hw, mut sink) = make_app();

    let outcome = app.tick(0, &mut hw, &mut sink);
    assert!(outcome.sensors_updated);
    assert!(outcome.telemetry.is_some());
    assert_eq!(hw.reads, 1);
}

#[test]
fn sensor_cadence_holds_between_intervals() {
    let (mut app, mut hw, mut sink) = make_app();
    app.tick(0, &mut hw, &mut sink);

    // 50 ms loop ticks for the next 4.9 seconds: no further reads.
    for t in (50..5_000u32).step_by(50) {
        let outcome = app.tick(t, &mut hw, &mut sink);
        assert!(!outcome.sensors_updated, "early read at t={}", t);
    }
    assert_eq!(hw.reads, 1);

    let outcome = app.tick(5_000, &mut hw, &mut sink);
    assert!(outcome.sensors_updated, "5 s cadence due");
    assert_eq!(hw.reads, 2);
}

#[test]
fn telemetry_cadence_is_slower_than_sensor_cadence() {
    let (mut app, mut hw, mut sink) = make_app();
    app.tick(0, &mut hw, &mut sink);

    let outcome = app.tick(5_000, &mut hw, &mut sink);
    assert!(outcome.sensors_updated);
    assert!(outcome.telemetry.is_none(), "telemetry is on a 10 s period");

    let outcome = app.tick(10_000, &mut hw, &mut sink);
    assert!(outcome.telemetry.is_some());
}

// ── Leak edges ────────────────────────────────────────────────

#[test]
fn leak_transitions_emit_one_event_each() {
    let (mut app, mut hw, mut sink) = make_app();
    app.tick(0, &mut hw, &mut sink);
    assert_eq!(sink.count_containing("LeakDetected"), 0);

    // Drain probe goes wet.
    hw.snapshot.leak_wet[LeakChannel::Drain as usize] = true;
    app.tick(5_000, &mut hw, &mut sink);
    app.tick(10_000, &mut hw, &mut sink);
    assert_eq!(
        sink.count_containing("LeakDetected"),
        1,
        "steady wet state must not re-emit"
    );

    // And dries out again.
    hw.snapshot.leak_wet[LeakChannel::Drain as usize] = false;
    app.tick(15_000, &mut hw, &mut sink);
    assert_eq!(sink.count_containing("LeakCleared"), 1);
}

// ── Telemetry payload ─────────────────────────────────────────

#[test]
fn telemetry_mirrors_the_snapshot() {
    let (mut app, _, mut sink) = make_app();
    let mut hw = MockSensors::with_level(150.0, 50.0);
    hw.snapshot.leak_raw[LeakChannel::Drain as usize] = 1_800;
    hw.snapshot.leak_wet[LeakChannel::Drain as usize] = true;

    let outcome = app.tick(0, &mut hw, &mut sink);
    let t = outcome.telemetry.expect("telemetry due on first tick");
    assert!((t.tank_level_gallons - 150.0).abs() < 0.001);
    assert!((t.tank_level_percent - 50.0).abs() < 0.001);
    assert!((t.water_sensor_drain - 1_800.0).abs() < 0.001);
    assert!(t.leak_wet[LeakChannel::Drain as usize]);
}

// ── Property store chain ──────────────────────────────────────

#[test]
fn telemetry_flows_into_the_property_store() {
    let (mut app, _, mut sink) = make_app();
    let mut hw = MockSensors::with_level(150.0, 50.0);
    let mut cloud = PropertyStore::new(10);

    let outcome = app.tick(0, &mut hw, &mut sink);
    cloud.refresh(&outcome.telemetry.unwrap());

    assert!(cloud.sync(0) > 0, "changed properties publish");
    assert_eq!(cloud.value("tank_level_gallons"), Some(150.0));
    assert_eq!(cloud.sync(50), 0, "nothing dirty right after a sync");
}
