//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — log to serial, refresh the cloud
//! property store, etc.

use crate::sensors::leak::{LeakChannel, LEAK_CHANNEL_COUNT};

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),

    /// A leak probe transitioned dry → wet.
    LeakDetected { channel: LeakChannel },

    /// A leak probe transitioned wet → dry.
    LeakCleared { channel: LeakChannel },

    /// The application service has started.
    Started,
}

/// A point-in-time telemetry snapshot suitable for logging or
/// publication.  Field names mirror the registered cloud properties.
#[derive(Debug, Clone, Copy)]
pub struct TelemetryData {
    pub tank_distance_from_top_mm: f32,
    pub tank_level_gallons: f32,
    pub tank_level_percent: f32,
    pub tank_flow_rate_gpm: f32,
    /// Raw ADC count of the drain probe (the one the cloud tracks).
    pub water_sensor_drain: f32,
    pub leak_wet: [bool; LEAK_CHANNEL_COUNT],
}
