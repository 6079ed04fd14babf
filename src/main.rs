//! TankSentry Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single polled control loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  HardwareAdapter    LogEventSink    PropertyStore            │
//! │  (SensorPort)       (EventSink)     (cloud thing registry)   │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ──────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │            AppService (pure logic)                 │      │
//! │  │  sensor cadence · telemetry cadence · leak edges   │      │
//! │  └────────────────────────────────────────────────────┘      │
//! │                                                              │
//! │  AutoBacklight (full-rate PIR poll, owns the LCD light)      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod error;
mod pins;

pub mod app;
mod adapters;
mod drivers;
mod sensors;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::cloud::PropertyStore;
use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use adapters::time::Esp32TimeAdapter;
use app::service::AppService;
use config::SystemConfig;
use drivers::backlight::AutoBacklight;
use drivers::lcd::Lcd;
use drivers::watchdog::Watchdog;
use sensors::leak::LeakSensors;
use sensors::motion::PirSensor;
use sensors::tank::TankGauge;
use sensors::ultrasonic::UltrasonicSensor;
use sensors::{SensorHub, TankSnapshot};

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  TankSentry v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = Watchdog::new(10_000);

    let config = SystemConfig::default();
    let time = Esp32TimeAdapter::new();

    // ── 3. Display + backlight controller ─────────────────────
    let lcd = Lcd::new(pins::LCD_I2C_ADDR);
    lcd.set_cursor(0, 0);
    lcd.print("TankSentry");

    let pir = PirSensor::new(pins::MOTION_PIR_GPIO);
    let mut backlight = AutoBacklight::new(
        lcd.backlight_handle(),
        pir,
        config.backlight_timeout_secs,
    );

    // ── 4. Sensors behind the port boundary ───────────────────
    let sensor_hub = SensorHub::new(
        UltrasonicSensor::new(pins::ULTRASONIC_TRIG_GPIO, pins::ULTRASONIC_ECHO_GPIO),
        TankGauge::new(
            config.tank_full_distance_mm,
            config.tank_empty_distance_mm,
            config.tank_capacity_gallons,
        ),
        LeakSensors::new(config.leak_wet_threshold),
    );
    let mut hw = HardwareAdapter::new(sensor_hub);
    let mut log_sink = LogEventSink::new();
    let mut cloud = PropertyStore::new(config.telemetry_interval_secs);

    // ── 5. Construct app service ──────────────────────────────
    let mut app = AppService::new(config.clone());
    app.start(&mut log_sink);

    info!("System ready. Entering control loop.");

    // ── 6. Control loop ───────────────────────────────────────
    loop {
        let now_ms = time.now_ms();

        // Backlight first, at full loop rate — motion wins immediately,
        // and the timeout's precision is bounded by this loop's period.
        backlight.update(now_ms);

        let outcome = app.tick(now_ms, &mut hw, &mut log_sink);

        if outcome.sensors_updated {
            render_level(&lcd, app.snapshot());
        }
        if let Some(t) = outcome.telemetry {
            cloud.refresh(&t);
        }
        cloud.sync(now_ms);

        watchdog.feed();

        std::thread::sleep(std::time::Duration::from_millis(
            config.control_loop_interval_ms as u64,
        ));
    }
}

/// Paint the two display lines from the latest snapshot.
fn render_level(lcd: &Lcd, snap: &TankSnapshot) {
    let any_wet = snap.leak_wet.iter().any(|&w| w);

    lcd.set_cursor(0, 0);
    lcd.print(&format!(
        "{:6.1}gal {:3.0}%  ",
        snap.level_gallons, snap.level_percent
    ));

    lcd.set_cursor(1, 0);
    lcd.print(&format!(
        "{:+6.2}gpm {}",
        snap.flow_gpm,
        if any_wet { "LEAK!" } else { "     " }
    ));
}
