//! 16x2 HD44780 character LCD behind a PCF8574 I²C backpack.
//!
//! The backpack maps expander bits to LCD control lines:
//! P0 = RS, P1 = RW, P2 = EN, P3 = backlight, P4–P7 = data nibble.
//!
//! Every byte written to the expander carries the backlight bit, so the
//! text path must know the current backlight state.  That state lives in
//! a module atomic with a single writer — [`LcdBacklight`] — which is
//! the handle the backlight controller owns.  The text path only reads
//! it; no other code can flip the light.
//!
//! All bus writes are fire-and-forget: a failed write is logged and the
//! driver carries on (a dead display must not stall the control loop).

use core::sync::atomic::{AtomicBool, Ordering};

use log::warn;

use crate::drivers::hw_init;

const RS_BIT: u8 = 0x01;
const EN_BIT: u8 = 0x04;
const BACKLIGHT_BIT: u8 = 0x08;

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x06; // increment, no shift
const CMD_DISPLAY_ON: u8 = 0x0C; // display on, cursor off
const CMD_FUNCTION_SET: u8 = 0x28; // 4-bit, 2 lines, 5x8 font
const CMD_SET_DDRAM: u8 = 0x80;

/// Backlight output level.  Written only by [`LcdBacklight`]; read by
/// the text path so data writes keep the light in its commanded state.
static BACKLIGHT_ON: AtomicBool = AtomicBool::new(false);

fn backlight_mask() -> u8 {
    if BACKLIGHT_ON.load(Ordering::Acquire) {
        BACKLIGHT_BIT
    } else {
        0
    }
}

// ── Backlight handle ──────────────────────────────────────────

/// Exclusive handle to the backpack's backlight bit.
///
/// Obtained once from [`Lcd::backlight_handle`] and handed to the
/// backlight controller, which becomes the single writer of the
/// backlight output for the process lifetime.
pub struct LcdBacklight {
    addr: u8,
}

impl crate::drivers::backlight::BacklightSink for LcdBacklight {
    fn backlight_on(&mut self) {
        BACKLIGHT_ON.store(true, Ordering::Release);
        // Expander-only write: control lines idle, just the light bit.
        if !hw_init::i2c_write(self.addr, &[BACKLIGHT_BIT]) {
            warn!("lcd: backlight-on write failed");
        }
    }

    fn backlight_off(&mut self) {
        BACKLIGHT_ON.store(false, Ordering::Release);
        if !hw_init::i2c_write(self.addr, &[0x00]) {
            warn!("lcd: backlight-off write failed");
        }
    }
}

// ── Display driver ────────────────────────────────────────────

pub struct Lcd {
    addr: u8,
}

impl Lcd {
    /// Construct and run the HD44780 4-bit init sequence.
    pub fn new(addr: u8) -> Self {
        let lcd = Self { addr };
        lcd.init();
        lcd
    }

    /// One-time handle to the backlight bit for the controller.
    pub fn backlight_handle(&self) -> LcdBacklight {
        LcdBacklight { addr: self.addr }
    }

    fn init(&self) {
        // Datasheet power-on dance: three 8-bit "function set" knocks,
        // then drop to 4-bit mode.
        hw_init::delay_us(50_000);
        self.write_nibble(0x30, false);
        hw_init::delay_us(4_500);
        self.write_nibble(0x30, false);
        hw_init::delay_us(4_500);
        self.write_nibble(0x30, false);
        hw_init::delay_us(150);
        self.write_nibble(0x20, false);

        self.command(CMD_FUNCTION_SET);
        self.command(CMD_DISPLAY_ON);
        self.clear();
        self.command(CMD_ENTRY_MODE);
    }

    pub fn clear(&self) {
        self.command(CMD_CLEAR);
        // Clear is the one slow instruction (1.52 ms max).
        hw_init::delay_us(2_000);
    }

    /// Move the cursor.  `row` 0–1, `col` 0–15; out-of-range clamps.
    pub fn set_cursor(&self, row: u8, col: u8) {
        let row_offset = if row == 0 { 0x00 } else { 0x40 };
        self.command(CMD_SET_DDRAM | (row_offset + col.min(15)));
    }

    /// Write ASCII text at the current cursor.  Non-ASCII bytes render
    /// as whatever the HD44780 character ROM maps them to.
    pub fn print(&self, text: &str) {
        for &b in text.as_bytes().iter().take(16) {
            self.write_byte(b, true);
        }
    }

    fn command(&self, cmd: u8) {
        self.write_byte(cmd, false);
        hw_init::delay_us(50);
    }

    fn write_byte(&self, value: u8, is_data: bool) {
        self.write_nibble(value & 0xF0, is_data);
        self.write_nibble((value << 4) & 0xF0, is_data);
    }

    /// Clock one high-nibble onto the bus with an EN pulse, carrying
    /// the current backlight bit on every byte.
    fn write_nibble(&self, nibble: u8, is_data: bool) {
        let base = nibble | backlight_mask() | if is_data { RS_BIT } else { 0 };
        let frames = [base | EN_BIT, base];
        if !hw_init::i2c_write(self.addr, &frames) {
            warn!("lcd: data write failed");
            return;
        }
        hw_init::delay_us(50);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::backlight::BacklightSink;

    #[test]
    fn backlight_handle_tracks_commanded_state() {
        let lcd = Lcd::new(0x27);
        let mut bl = lcd.backlight_handle();

        bl.backlight_on();
        assert_eq!(backlight_mask(), BACKLIGHT_BIT);

        bl.backlight_off();
        assert_eq!(backlight_mask(), 0);
    }
}
