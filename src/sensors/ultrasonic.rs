//! HC-SR04 ultrasonic range sensor driver.
//!
//! A 10 µs trigger pulse starts a measurement; the sensor answers with
//! an echo pulse whose width is the ultrasonic round-trip time.  The
//! driver measures that width with a bounded busy-wait — at the sensor's
//! ~4 m ceiling the wait is under 25 ms, which the 5-second sensor
//! cadence absorbs easily.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives TRIG and times ECHO via hw_init helpers.
//! On host/test: reads a simulated echo width from a static `AtomicU32`
//! (0 simulates a missing echo).

use core::sync::atomic::AtomicU32;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

use crate::error::SensorError;
#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// Sound travels 0.343 mm/µs; halve for the round trip.
const MM_PER_ECHO_US: f32 = 0.1715;

/// Echo widths beyond this are past the sensor's rated range.
const MAX_ECHO_US: u32 = 25_000;

/// Hard ceiling on any single wait inside a measurement.
#[cfg(target_os = "espidf")]
const WAIT_TIMEOUT_US: u64 = 30_000;

static SIM_ECHO_US: AtomicU32 = AtomicU32::new(3_000);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_echo_us(width: u32) {
    SIM_ECHO_US.store(width, Ordering::Relaxed);
}

/// Result of one ranging measurement.
#[derive(Debug, Clone, Copy)]
pub struct RangeReading {
    /// Raw echo pulse width (µs).
    pub echo_us: u32,
    /// Distance from the sensor face to the reflecting surface (mm).
    pub distance_mm: f32,
}

pub struct UltrasonicSensor {
    trig_gpio: i32,
    echo_gpio: i32,
}

impl UltrasonicSensor {
    pub fn new(trig_gpio: i32, echo_gpio: i32) -> Self {
        Self {
            trig_gpio,
            echo_gpio,
        }
    }

    /// Fire one measurement.
    ///
    /// `Err(EchoTimeout)` when the echo never arrives (disconnected
    /// sensor, absorbent surface); `Err(OutOfRange)` when the width is
    /// past the rated range (reflection lost into the distance).
    pub fn read(&mut self) -> Result<RangeReading, SensorError> {
        let echo_us = self.measure_echo_us()?;
        if echo_us > MAX_ECHO_US {
            return Err(SensorError::OutOfRange);
        }
        Ok(RangeReading {
            echo_us,
            distance_mm: echo_us as f32 * MM_PER_ECHO_US,
        })
    }

    #[cfg(target_os = "espidf")]
    fn measure_echo_us(&self) -> Result<u32, SensorError> {
        // Clean trigger edge: settle low, then 10 µs high.
        hw_init::gpio_write(self.trig_gpio, false);
        hw_init::delay_us(2);
        hw_init::gpio_write(self.trig_gpio, true);
        hw_init::delay_us(10);
        hw_init::gpio_write(self.trig_gpio, false);

        // Wait for the echo to start.
        let deadline = hw_init::now_us() + WAIT_TIMEOUT_US;
        while !hw_init::gpio_read(self.echo_gpio) {
            if hw_init::now_us() > deadline {
                return Err(SensorError::EchoTimeout);
            }
        }

        // Time the high phase.
        let start = hw_init::now_us();
        let deadline = start + WAIT_TIMEOUT_US;
        while hw_init::gpio_read(self.echo_gpio) {
            if hw_init::now_us() > deadline {
                return Err(SensorError::EchoTimeout);
            }
        }
        Ok((hw_init::now_us() - start) as u32)
    }

    #[cfg(not(target_os = "espidf"))]
    fn measure_echo_us(&self) -> Result<u32, SensorError> {
        match SIM_ECHO_US.load(Ordering::Relaxed) {
            0 => Err(SensorError::EchoTimeout),
            us => Ok(us),
        }
    }
}
