//! Motion-activated LCD backlight controller.
//!
//! Polled state machine: the main loop calls `update()` every control
//! tick with the current monotonic millisecond timestamp.  Each update
//! samples the PIR level raw — no debounce, no edge memory — so the
//! controller's observable timing is exactly the sampled level history.
//!
//! ## State machine
//!
//! | From | Condition                                   | To  |
//! |------|---------------------------------------------|-----|
//! | OFF  | motion sampled high                         | ON  |
//! | ON   | motion sampled high (timer reset)           | ON  |
//! | ON   | no motion, elapsed > timeout                | OFF |
//! | ON   | no motion, elapsed <= timeout               | ON  |
//! | OFF  | no motion                                   | OFF |
//!
//! Motion always wins: `turn_on()` runs unconditionally on a high sample,
//! refreshing the idle window even when the backlight is already lit.
//! The off transition requires both "currently on" and "window expired",
//! so an already-dark backlight never receives a redundant off command.
//!
//! Elapsed time uses `u32::wrapping_sub`, which stays correct across a
//! single wrap of the millisecond clock (every ~49.7 days of uptime).
//! This is inherited modular-arithmetic behaviour, not a new scheme.

use log::info;

/// Something that can assert and deassert a backlight output.
///
/// Both commands are fire-and-forget — no acknowledgment, no failure
/// return.  The controller is the only writer: no other code path may
/// drive the same output.
pub trait BacklightSink {
    fn backlight_on(&mut self);
    fn backlight_off(&mut self);
}

/// An instantaneous binary motion level.  High = motion present.
pub trait MotionInput {
    fn motion_detected(&mut self) -> bool;
}

/// The backlight controller.  Owns its sink and motion input
/// exclusively for the lifetime of the process.
pub struct AutoBacklight<B, M> {
    sink: B,
    motion: M,
    timeout_ms: u32,
    last_motion_ms: u32,
    on: bool,
}

impl<B: BacklightSink, M: MotionInput> AutoBacklight<B, M> {
    /// `timeout_secs` is the idle window after the last motion sample
    /// before the backlight switches off.  Oversized values saturate at
    /// `u32::MAX` milliseconds; negative values are unrepresentable.
    pub fn new(sink: B, motion: M, timeout_secs: u32) -> Self {
        Self {
            sink,
            motion,
            timeout_ms: timeout_secs.saturating_mul(1000),
            last_motion_ms: 0,
            on: false,
        }
    }

    /// Assert the backlight and restart the idle window at `now_ms`.
    ///
    /// Idempotent: called every tick while motion continues, and each
    /// call refreshes the window.
    pub fn turn_on(&mut self, now_ms: u32) {
        if !self.on {
            info!("backlight on");
        }
        self.sink.backlight_on();
        self.on = true;
        self.last_motion_ms = now_ms;
    }

    /// Deassert the backlight.  Leaves the last-motion timestamp alone.
    pub fn turn_off(&mut self) {
        info!("backlight off");
        self.sink.backlight_off();
        self.on = false;
    }

    /// One decision step.  Call once per control-loop iteration; the
    /// loop period bounds how far past the timeout the off transition
    /// can land.
    pub fn update(&mut self, now_ms: u32) {
        if self.motion.motion_detected() {
            self.turn_on(now_ms);
        } else if self.on && now_ms.wrapping_sub(self.last_motion_ms) > self.timeout_ms {
            self.turn_off();
        }
    }

    /// Cached state — no hardware I/O.
    pub fn is_on(&self) -> bool {
        self.on
    }
}

// ── embedded-hal adapters ─────────────────────────────────────
//
// For boards where the PIR or backlight is wired through a HAL driver
// rather than the raw-GPIO helpers.

/// Any `embedded_hal` input pin as a motion input (high = motion).
pub struct HalMotionPin<P>(pub P);

impl<P: embedded_hal::digital::InputPin> MotionInput for HalMotionPin<P> {
    fn motion_detected(&mut self) -> bool {
        self.0.is_high().unwrap_or(false)
    }
}

/// Any `embedded_hal` output pin as a backlight sink (high = lit).
pub struct HalBacklightPin<P>(pub P);

impl<P: embedded_hal::digital::OutputPin> BacklightSink for HalBacklightPin<P> {
    fn backlight_on(&mut self) {
        let _ = self.0.set_high();
    }

    fn backlight_off(&mut self) {
        let _ = self.0.set_low();
    }
}
