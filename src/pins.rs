//! GPIO / peripheral pin assignments for the TankSentry main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Ultrasonic range sensor (HC-SR04)
// ---------------------------------------------------------------------------

/// Digital output: 10 µs trigger pulse starts a measurement.
pub const ULTRASONIC_TRIG_GPIO: i32 = 10;
/// Digital input: echo pulse width encodes round-trip time.
pub const ULTRASONIC_ECHO_GPIO: i32 = 11;

// ---------------------------------------------------------------------------
// Leak probes — Analog (ADC1)
// ---------------------------------------------------------------------------
//
// Resistive water-contact probes: a wet probe conducts and pulls the ADC
// reading up.  One channel per monitored location.

/// Drain pan probe — ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const LEAK_DRAIN_ADC_GPIO: i32 = 5;
/// Pressure pump probe — ADC1 channel 5 (GPIO 6).
pub const LEAK_PUMP_ADC_GPIO: i32 = 6;
/// Sump pump probe — ADC1 channel 6 (GPIO 7).
pub const LEAK_SUMP_PUMP_ADC_GPIO: i32 = 7;
/// Reverse-osmosis unit probe — ADC1 channel 7 (GPIO 8).
pub const LEAK_RO_ADC_GPIO: i32 = 8;

/// ADC1 channel numbers matching the GPIOs above.
pub const ADC1_CH_LEAK_DRAIN: u32 = 4;
pub const ADC1_CH_LEAK_PUMP: u32 = 5;
pub const ADC1_CH_LEAK_SUMP_PUMP: u32 = 6;
pub const ADC1_CH_LEAK_RO: u32 = 7;

// ---------------------------------------------------------------------------
// PIR motion sensor (HC-SR501)
// ---------------------------------------------------------------------------

/// Digital input: HIGH while the PIR holds a motion detection.
pub const MOTION_PIR_GPIO: i32 = 16;

// ---------------------------------------------------------------------------
// I²C bus (16x2 character LCD behind a PCF8574 backpack)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 14;
pub const I2C_SCL_GPIO: i32 = 15;

/// 7-bit I²C address of the PCF8574 LCD backpack.
pub const LCD_I2C_ADDR: u8 = 0x27;
/// I²C bus clock for the backpack (standard mode).
pub const I2C_FREQ_HZ: u32 = 100_000;

// ---------------------------------------------------------------------------
// UART debug
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;
