//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the sensor/telemetry cadence and the latest tank
//! snapshot.  It exposes a clean, hardware-agnostic API.  All I/O flows
//! through port traits injected at call sites, making the entire service
//! testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │       AppService        │
//!                 │  cadence · leak edges   │
//!                 └────────────────────────┘
//! ```
//!
//! The backlight controller is deliberately *not* inside the service:
//! it runs at full control-loop rate in `main`, while the service's
//! work is paced in seconds.

use log::info;

use crate::config::SystemConfig;
use crate::sensors::leak::{ALL_CHANNELS, LEAK_CHANNEL_COUNT};
use crate::sensors::TankSnapshot;

use super::events::{AppEvent, TelemetryData};
use super::ports::{EventSink, SensorPort};

/// What one service tick did — the main loop uses this to decide
/// whether to refresh the display or feed the property store.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickOutcome {
    /// A fresh sensor snapshot was taken this tick.
    pub sensors_updated: bool,
    /// Telemetry fell due this tick.
    pub telemetry: Option<TelemetryData>,
}

/// The application service orchestrates the periodic domain logic.
pub struct AppService {
    config: SystemConfig,
    snapshot: TankSnapshot,
    prev_leak_wet: [bool; LEAK_CHANNEL_COUNT],
    last_sensor_ms: Option<u32>,
    last_telemetry_ms: Option<u32>,
    tick_count: u64,
}

impl AppService {
    pub fn new(config: SystemConfig) -> Self {
        Self {
            config,
            snapshot: TankSnapshot::default(),
            prev_leak_wet: [false; LEAK_CHANNEL_COUNT],
            last_sensor_ms: None,
            last_telemetry_ms: None,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce startup.  Cadences fire on the first tick after this.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!("AppService started");
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one service cycle: read sensors and emit telemetry when
    /// their cadences fall due.  Cheap when nothing is due — the main
    /// loop calls this every iteration.
    pub fn tick(
        &mut self,
        now_ms: u32,
        hw: &mut impl SensorPort,
        sink: &mut impl EventSink,
    ) -> TickOutcome {
        self.tick_count += 1;
        let mut outcome = TickOutcome::default();

        if cadence_due(
            self.last_sensor_ms,
            now_ms,
            self.config.sensor_read_interval_secs * 1000,
        ) {
            self.last_sensor_ms = Some(now_ms);
            self.snapshot = hw.read_all(now_ms);
            self.emit_leak_edges(sink);
            outcome.sensors_updated = true;
        }

        if cadence_due(
            self.last_telemetry_ms,
            now_ms,
            self.config.telemetry_interval_secs * 1000,
        ) {
            self.last_telemetry_ms = Some(now_ms);
            let t = self.build_telemetry();
            sink.emit(&AppEvent::Telemetry(t));
            outcome.telemetry = Some(t);
        }

        outcome
    }

    fn emit_leak_edges(&mut self, sink: &mut impl EventSink) {
        for channel in ALL_CHANNELS {
            let i = channel as usize;
            let wet = self.snapshot.leak_wet[i];
            if wet != self.prev_leak_wet[i] {
                if wet {
                    sink.emit(&AppEvent::LeakDetected { channel });
                } else {
                    sink.emit(&AppEvent::LeakCleared { channel });
                }
                self.prev_leak_wet[i] = wet;
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current context.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            tank_distance_from_top_mm: self.snapshot.distance_from_top_mm,
            tank_level_gallons: self.snapshot.level_gallons,
            tank_level_percent: self.snapshot.level_percent,
            tank_flow_rate_gpm: self.snapshot.flow_gpm,
            water_sensor_drain: f32::from(
                self.snapshot.leak_raw[crate::sensors::leak::LeakChannel::Drain as usize],
            ),
            leak_wet: self.snapshot.leak_wet,
        }
    }

    /// Latest sensor snapshot (whatever the last sensor tick produced).
    pub fn snapshot(&self) -> &TankSnapshot {
        &self.snapshot
    }

    /// Total service ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

/// `None` (never fired) is immediately due; otherwise due once the
/// wrapping elapsed time reaches the interval.
fn cadence_due(last_ms: Option<u32>, now_ms: u32, interval_ms: u32) -> bool {
    match last_ms {
        None => true,
        Some(last) => now_ms.wrapping_sub(last) >= interval_ms,
    }
}
