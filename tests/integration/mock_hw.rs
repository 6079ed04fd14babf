//! Mock hardware adapter for integration tests.
//!
//! Records every backlight command so tests can assert on the full
//! command history without touching real GPIO/I2C registers, and serves
//! scripted sensor snapshots through the `SensorPort` boundary.

use tanksentry::app::events::AppEvent;
use tanksentry::app::ports::{EventSink, SensorPort};
use tanksentry::drivers::backlight::{BacklightSink, MotionInput};
use tanksentry::sensors::TankSnapshot;

use std::cell::Cell;
use std::rc::Rc;

// ── Backlight command record ──────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacklightCall {
    On,
    Off,
}

/// Recording sink — every assert/deassert lands in `calls`.
#[derive(Default)]
pub struct MockBacklight {
    pub calls: Vec<BacklightCall>,
}

#[allow(dead_code)]
impl MockBacklight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_call(&self) -> Option<BacklightCall> {
        self.calls.last().copied()
    }

    pub fn off_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == BacklightCall::Off).count()
    }
}

impl BacklightSink for &mut MockBacklight {
    fn backlight_on(&mut self) {
        self.calls.push(BacklightCall::On);
    }

    fn backlight_off(&mut self) {
        self.calls.push(BacklightCall::Off);
    }
}

// ── Scriptable motion level ───────────────────────────────────

/// Shared handle so a test can flip the level while the controller
/// owns the input.
#[derive(Clone, Default)]
pub struct MockMotion {
    level: Rc<Cell<bool>>,
}

#[allow(dead_code)]
impl MockMotion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, present: bool) {
        self.level.set(present);
    }
}

impl MotionInput for MockMotion {
    fn motion_detected(&mut self) -> bool {
        self.level.get()
    }
}

// ── Scriptable sensor port ────────────────────────────────────

/// Serves a preset snapshot and counts reads.
pub struct MockSensors {
    pub snapshot: TankSnapshot,
    pub reads: usize,
}

#[allow(dead_code)]
impl MockSensors {
    pub fn new() -> Self {
        Self {
            snapshot: TankSnapshot::default(),
            reads: 0,
        }
    }

    pub fn with_level(gallons: f32, percent: f32) -> Self {
        let mut s = Self::new();
        s.snapshot.level_gallons = gallons;
        s.snapshot.level_percent = percent;
        s
    }
}

impl SensorPort for MockSensors {
    fn read_all(&mut self, _now_ms: u32) -> TankSnapshot {
        self.reads += 1;
        self.snapshot
    }
}

// ── Recording event sink ──────────────────────────────────────

#[derive(Default)]
pub struct LogSink {
    pub events: Vec<String>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_containing(&self, needle: &str) -> usize {
        self.events.iter().filter(|e| e.contains(needle)).count()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(format!("{:?}", event));
    }
}
