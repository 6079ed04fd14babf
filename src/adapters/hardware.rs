//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`], exposing it through [`SensorPort`].  On
//! non-espidf targets, the underlying drivers use cfg-gated simulation
//! stubs.

use crate::app::ports::SensorPort;
use crate::sensors::{SensorHub, TankSnapshot};

/// Concrete adapter that puts the sensor hub behind the port trait.
pub struct HardwareAdapter {
    sensor_hub: SensorHub,
}

impl HardwareAdapter {
    pub fn new(sensor_hub: SensorHub) -> Self {
        Self { sensor_hub }
    }
}

impl SensorPort for HardwareAdapter {
    fn read_all(&mut self, now_ms: u32) -> TankSnapshot {
        self.sensor_hub.read_all(now_ms)
    }
}
