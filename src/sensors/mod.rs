//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns the ranging sensor, tank gauge, and leak probes and
//! produces a [`TankSnapshot`] on each sensor tick.  The PIR motion
//! sensor lives here too but is *not* part of the hub: the backlight
//! controller polls it directly at control-loop rate.

pub mod leak;
pub mod motion;
pub mod tank;
pub mod ultrasonic;

use log::warn;

use leak::{LeakSensors, LEAK_CHANNEL_COUNT};
use tank::TankGauge;
use ultrasonic::UltrasonicSensor;

/// Unified point-in-time sensor state.
#[derive(Debug, Clone, Copy, Default)]
pub struct TankSnapshot {
    pub distance_from_top_mm: f32,
    pub level_gallons: f32,
    pub level_percent: f32,
    pub flow_gpm: f32,
    pub leak_raw: [u16; LEAK_CHANNEL_COUNT],
    pub leak_wet: [bool; LEAK_CHANNEL_COUNT],
}

/// Aggregates the tank-facing sensors and produces a unified snapshot.
pub struct SensorHub {
    ultrasonic: UltrasonicSensor,
    gauge: TankGauge,
    leak: LeakSensors,
    /// Last successful distance reading, retained across read failures.
    last_distance_mm: Option<f32>,
}

impl SensorHub {
    /// Construct a new hub.  Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(ultrasonic: UltrasonicSensor, gauge: TankGauge, leak: LeakSensors) -> Self {
        Self {
            ultrasonic,
            gauge,
            leak,
            last_distance_mm: None,
        }
    }

    /// Read every sensor and return a unified snapshot.
    ///
    /// A ranging failure is logged and the previous good distance is
    /// retained — a single flaky sensor must not crash the control loop.
    /// Until the first good reading arrives the tank reports empty.
    pub fn read_all(&mut self, now_ms: u32) -> TankSnapshot {
        match self.ultrasonic.read() {
            Ok(r) => self.last_distance_mm = Some(r.distance_mm),
            Err(e) => warn!("ultrasonic read failed: {} — keeping last value", e),
        }

        let mut snapshot = TankSnapshot::default();
        if let Some(distance_mm) = self.last_distance_mm {
            let level = self.gauge.update(distance_mm, now_ms);
            snapshot.distance_from_top_mm = level.distance_from_top_mm;
            snapshot.level_gallons = level.level_gallons;
            snapshot.level_percent = level.level_percent;
            snapshot.flow_gpm = level.flow_gpm;
        }

        for reading in self.leak.read() {
            snapshot.leak_raw[reading.channel as usize] = reading.raw;
            snapshot.leak_wet[reading.channel as usize] = reading.wet;
        }

        snapshot
    }
}
