//! HC-SR501 PIR motion sensor.
//!
//! The PIR holds its output HIGH for its own retrigger window while it
//! sees motion; this driver just samples the level on demand.  No
//! debouncing and no edge detection — the backlight controller's timing
//! contract depends on seeing the raw level.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the real GPIO level via hw_init helpers.
//! On host/test: reads a static `AtomicBool` for injection.

use core::sync::atomic::AtomicBool;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

use log::warn;

use crate::drivers::backlight::MotionInput;
use crate::drivers::hw_init;

static SIM_MOTION: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_motion(present: bool) {
    SIM_MOTION.store(present, Ordering::Relaxed);
}

pub struct PirSensor {
    gpio: i32,
}

impl PirSensor {
    /// Configures the pin as a read-only digital input.  Construction
    /// cannot fail — a rejected GPIO config is logged and the sensor
    /// reads whatever the pin floats at.
    pub fn new(gpio: i32) -> Self {
        if let Err(e) = hw_init::configure_input(gpio) {
            warn!("pir: input config failed on GPIO {}: {}", gpio, e);
        }
        Self { gpio }
    }

    /// GPIO pin this sensor is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    #[cfg(target_os = "espidf")]
    fn level(&self) -> bool {
        hw_init::gpio_read(self.gpio)
    }

    #[cfg(not(target_os = "espidf"))]
    fn level(&self) -> bool {
        SIM_MOTION.load(Ordering::Relaxed)
    }
}

impl MotionInput for PirSensor {
    fn motion_detected(&mut self) -> bool {
        self.level()
    }
}
