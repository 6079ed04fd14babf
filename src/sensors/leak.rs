//! Resistive wet/dry leak probes.
//!
//! Four probe locations, one ADC channel each.  Water across a probe's
//! contacts conducts and pulls the divider voltage — and the ADC count —
//! up; a count at or above the configured threshold reads as wet.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the real ADC channels via hw_init.
//! On host/test: reads per-channel static `AtomicU16`s for injection.

use core::sync::atomic::AtomicU16;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::pins;

/// Monitored probe locations, in snapshot array order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeakChannel {
    Drain = 0,
    Pump = 1,
    SumpPump = 2,
    Ro = 3,
}

pub const LEAK_CHANNEL_COUNT: usize = 4;

pub const ALL_CHANNELS: [LeakChannel; LEAK_CHANNEL_COUNT] = [
    LeakChannel::Drain,
    LeakChannel::Pump,
    LeakChannel::SumpPump,
    LeakChannel::Ro,
];

impl LeakChannel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Drain => "drain",
            Self::Pump => "pump",
            Self::SumpPump => "sump_pump",
            Self::Ro => "ro",
        }
    }

    fn adc_channel(self) -> u32 {
        match self {
            Self::Drain => pins::ADC1_CH_LEAK_DRAIN,
            Self::Pump => pins::ADC1_CH_LEAK_PUMP,
            Self::SumpPump => pins::ADC1_CH_LEAK_SUMP_PUMP,
            Self::Ro => pins::ADC1_CH_LEAK_RO,
        }
    }
}

static SIM_LEAK_ADC: [AtomicU16; LEAK_CHANNEL_COUNT] = [
    AtomicU16::new(0),
    AtomicU16::new(0),
    AtomicU16::new(0),
    AtomicU16::new(0),
];

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_leak_adc(channel: LeakChannel, raw: u16) {
    SIM_LEAK_ADC[channel as usize].store(raw, Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
pub struct LeakReading {
    pub channel: LeakChannel,
    pub raw: u16,
    pub wet: bool,
}

pub struct LeakSensors {
    wet_threshold: u16,
}

impl LeakSensors {
    pub fn new(wet_threshold: u16) -> Self {
        Self { wet_threshold }
    }

    /// Read all four probes.
    pub fn read(&mut self) -> [LeakReading; LEAK_CHANNEL_COUNT] {
        ALL_CHANNELS.map(|channel| {
            let raw = self.read_raw(channel);
            LeakReading {
                channel,
                raw,
                wet: raw >= self.wet_threshold,
            }
        })
    }

    #[cfg(target_os = "espidf")]
    fn read_raw(&self, channel: LeakChannel) -> u16 {
        hw_init::adc1_read(channel.adc_channel())
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_raw(&self, channel: LeakChannel) -> u16 {
        let _ = channel.adc_channel();
        SIM_LEAK_ADC[channel as usize].load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_splits_wet_from_dry() {
        let mut sensors = LeakSensors::new(1_500);

        sim_set_leak_adc(LeakChannel::Drain, 2_000);
        sim_set_leak_adc(LeakChannel::Pump, 1_499);
        sim_set_leak_adc(LeakChannel::SumpPump, 1_500);
        sim_set_leak_adc(LeakChannel::Ro, 0);

        let readings = sensors.read();
        assert!(readings[LeakChannel::Drain as usize].wet);
        assert!(!readings[LeakChannel::Pump as usize].wet);
        assert!(readings[LeakChannel::SumpPump as usize].wet, "threshold is inclusive");
        assert!(!readings[LeakChannel::Ro as usize].wet);

        sim_set_leak_adc(LeakChannel::Drain, 0);
        sim_set_leak_adc(LeakChannel::SumpPump, 0);
    }
}
