//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | dist={:.0}mm | level={:.1}gal ({:.0}%) | flow={:+.2}gpm | \
                     drain_adc={:.0} | wet={:?}",
                    t.tank_distance_from_top_mm,
                    t.tank_level_gallons,
                    t.tank_level_percent,
                    t.tank_flow_rate_gpm,
                    t.water_sensor_drain,
                    t.leak_wet,
                );
            }
            AppEvent::LeakDetected { channel } => {
                warn!("LEAK | water detected at {}", channel.label());
            }
            AppEvent::LeakCleared { channel } => {
                info!("LEAK | {} probe dry again", channel.label());
            }
            AppEvent::Started => {
                info!("START | monitoring");
            }
        }
    }
}
