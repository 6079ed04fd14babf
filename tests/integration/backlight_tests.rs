//! Integration tests for the backlight controller against mock hardware.
//!
//! These drive `AutoBacklight` through the same `update()` entry point
//! the control loop uses, with a scripted motion level and a recording
//! backlight sink, and assert on the full command history.

use crate::mock_hw::{BacklightCall, MockBacklight, MockMotion};
use tanksentry::drivers::backlight::AutoBacklight;

// ── Single motion, quiet until past the window ────────────────

#[test]
fn single_motion_then_timeout() {
    let mut sink = MockBacklight::new();
    let motion = MockMotion::new();

    let mut ctl = AutoBacklight::new(&mut sink, motion.clone(), 10);

    motion.set(true);
    ctl.update(0);
    assert!(ctl.is_on());

    motion.set(false);
    ctl.update(5_000);
    assert!(ctl.is_on(), "5 s elapsed of a 10 s window");

    ctl.update(10_001);
    assert!(!ctl.is_on(), "window expired");
    assert_eq!(sink.last_call(), Some(BacklightCall::Off));
}

// ── Re-trigger resets the idle window ─────────────────────────

#[test]
fn retrigger_extends_window() {
    let mut sink = MockBacklight::new();
    let motion = MockMotion::new();

    let mut ctl = AutoBacklight::new(&mut sink, motion.clone(), 10);

    motion.set(true);
    ctl.update(0);
    ctl.update(9_000); // still moving at 9 s

    motion.set(false);
    ctl.update(15_000);
    assert!(ctl.is_on(), "only 6 s since the last motion");

    ctl.update(19_001);
    assert!(!ctl.is_on(), "10 s window from the 9 s re-trigger expired");
}

// ── Zero timeout drops on the first idle sample ───────────────

#[test]
fn zero_timeout_drops_on_first_idle_sample() {
    let mut sink = MockBacklight::new();
    let motion = MockMotion::new();

    let mut ctl = AutoBacklight::new(&mut sink, motion.clone(), 0);

    motion.set(true);
    ctl.update(0);
    assert!(ctl.is_on());

    motion.set(false);
    ctl.update(1);
    assert!(!ctl.is_on(), "a single idle sample past t=0 is enough");
}

// ── Never any motion, never any command ───────────────────────

#[test]
fn idle_forever_issues_no_commands() {
    let mut sink = MockBacklight::new();
    let motion = MockMotion::new();

    let mut ctl = AutoBacklight::new(&mut sink, motion, 10);
    for t in (0..600_000u32).step_by(50) {
        ctl.update(t);
    }
    assert!(!ctl.is_on());
    assert!(sink.calls.is_empty(), "no redundant hardware writes");
}

// ── Motion dominance: on-and-refresh wins in every state ──────

#[test]
fn motion_always_wins_even_when_already_on() {
    let mut sink = MockBacklight::new();
    let motion = MockMotion::new();

    let mut ctl = AutoBacklight::new(&mut sink, motion.clone(), 10);

    motion.set(true);
    // Held motion across many ticks: one on-command per tick is the
    // contract (each refreshes the window), state stays ON throughout.
    for t in (0..60_000u32).step_by(1_000) {
        ctl.update(t);
        assert!(ctl.is_on());
    }

    // Even after far longer than the timeout, the window dates from
    // the last motion sample.
    motion.set(false);
    ctl.update(69_000);
    assert!(ctl.is_on(), "59 s was the last motion; 10 s window holds");
    ctl.update(69_001 + 1_000);
    assert!(!ctl.is_on());
}

// ── Sustained motion at sub-window cadence never times out ────

#[test]
fn periodic_motion_at_half_window_never_times_out() {
    let mut sink = MockBacklight::new();
    let motion = MockMotion::new();

    let mut ctl = AutoBacklight::new(&mut sink, motion.clone(), 10);

    // Motion blips every 5 s, sampled at a 50 ms loop cadence.
    for t in (0..120_000u32).step_by(50) {
        motion.set(t % 5_000 == 0);
        ctl.update(t);
        if t > 0 {
            assert!(ctl.is_on(), "timed out at t={}", t);
        }
    }
    assert_eq!(sink.off_count(), 0);
}
