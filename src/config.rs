//! System configuration parameters
//!
//! All tunable parameters for the TankSentry system.  Configuration is
//! compiled-in defaults only — there is no runtime reconfiguration surface.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Backlight ---
    /// Idle timeout before the LCD backlight switches off (seconds).
    pub backlight_timeout_secs: u32,

    // --- Tank geometry / calibration ---
    /// Ultrasonic distance reading when the tank is brim-full (mm).
    pub tank_full_distance_mm: f32,
    /// Ultrasonic distance reading when the tank is empty (mm).
    pub tank_empty_distance_mm: f32,
    /// Usable tank capacity (US gallons).
    pub tank_capacity_gallons: f32,

    // --- Leak probes ---
    /// ADC count at or above which a probe is considered wet.
    pub leak_wet_threshold: u16,

    // --- Timing ---
    /// Control loop interval (milliseconds).  The backlight controller is
    /// ticked at this rate.
    pub control_loop_interval_ms: u32,
    /// Sensor read interval (seconds).
    pub sensor_read_interval_secs: u32,
    /// Telemetry / property publication interval (seconds).
    pub telemetry_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Backlight
            backlight_timeout_secs: 30,

            // Tank: 300-gallon vertical tank, sensor 50 mm above the
            // brim-full surface, 1200 mm of usable depth below it.
            tank_full_distance_mm: 50.0,
            tank_empty_distance_mm: 1250.0,
            tank_capacity_gallons: 300.0,

            // Leak probes
            leak_wet_threshold: 1500,

            // Timing
            control_loop_interval_ms: 50, // 20 Hz — keeps the backlight snappy
            sensor_read_interval_secs: 5,
            telemetry_interval_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = SystemConfig::default();
        assert!(c.tank_empty_distance_mm > c.tank_full_distance_mm);
        assert!(c.tank_capacity_gallons > 0.0);
        assert!(c.leak_wet_threshold > 0);
        assert!(c.control_loop_interval_ms > 0);
        assert!(c.sensor_read_interval_secs > 0);
    }

    #[test]
    fn serde_roundtrip() {
        let c = SystemConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: SystemConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.backlight_timeout_secs, c2.backlight_timeout_secs);
        assert!((c.tank_capacity_gallons - c2.tank_capacity_gallons).abs() < 0.001);
        assert_eq!(c.leak_wet_threshold, c2.leak_wet_threshold);
    }

    #[test]
    fn timing_ratios_make_sense() {
        let c = SystemConfig::default();
        assert!(
            c.control_loop_interval_ms < c.sensor_read_interval_secs * 1000,
            "control loop must run faster than sensor reads"
        );
        assert!(
            c.sensor_read_interval_secs <= c.telemetry_interval_secs,
            "telemetry should never outpace sensor reads"
        );
        assert!(
            c.control_loop_interval_ms < c.backlight_timeout_secs * 1000,
            "sub-timeout polling is required for the timeout to be enforced"
        );
    }
}
