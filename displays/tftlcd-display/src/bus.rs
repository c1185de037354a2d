//! Bus transaction layer
//!
//! Frames command and data bytes over the serial bus with the D/C line in
//! the right state, streams 16-bit pixel words, and owns the chip-select
//! bracket that serialises transactions.
//!
//! # Framing
//!
//! The D/C line is sampled by the controller while a frame shifts out, so
//! it may only change once the bus reports idle. Pixel bursts switch the
//! bus to 16-bit frames once and then only wait for transmit-ready between
//! words:
//!
//! ```text
//! begin_words  ─ wait idle, D/C = data, 16-bit frames
//! write_word   ─ wait TX ready, post word        (repeated)
//! end_words    ─ wait idle, 8-bit frames
//! ```

use tftlcd_hal::{FrameWidth, LineControl, SerialBus};

use crate::backend::DisplayError;
use crate::config::{PollLimit, ReentrancyPolicy};

/// Serial transport for one panel
pub struct Transport<B, L> {
    bus: B,
    lines: L,
    poll_limit: PollLimit,
    reentrancy: ReentrancyPolicy,
}

impl<B, L> Transport<B, L>
where
    B: SerialBus,
    L: LineControl,
{
    /// Create a transport over the given bus and control lines
    pub fn new(bus: B, lines: L, poll_limit: PollLimit, reentrancy: ReentrancyPolicy) -> Self {
        Self {
            bus,
            lines,
            poll_limit,
            reentrancy,
        }
    }

    /// Return the bus and line capabilities
    pub fn release(self) -> (B, L) {
        (self.bus, self.lines)
    }

    /// Put every line in its idle state: deselected, out of reset, data framing
    pub fn park(&mut self) {
        self.lines.select(false);
        self.lines.reset(false);
        self.lines.mode_select(false);
    }

    /// Drive the reset line
    pub fn reset_line(&mut self, assert: bool) {
        self.lines.reset(assert);
    }

    /// Open (`true`) or close (`false`) a transaction bracket
    ///
    /// Opening with chip select already asserted means another transaction
    /// is in flight on this line; the configured `ReentrancyPolicy` decides
    /// between reporting it and spinning. Closing waits for the last frame
    /// to leave the bus before releasing chip select. Chip select is
    /// released even if that wait times out, so the next transaction is not
    /// mistaken for an overlapping one.
    pub fn select(&mut self, assert: bool) -> Result<(), DisplayError> {
        if assert {
            if self.lines.is_selected() {
                match self.reentrancy {
                    ReentrancyPolicy::Report => {
                        warn!("transaction opened while chip select is asserted");
                        return Err(DisplayError::ReentrancyViolation);
                    }
                    ReentrancyPolicy::Hang => {
                        warn!("overlapping transaction, spinning until chip select releases");
                        while self.lines.is_selected() {
                            core::hint::spin_loop();
                        }
                    }
                }
            }
            self.lines.select(true);
            Ok(())
        } else {
            let idle = self.wait_idle();
            self.lines.select(false);
            idle
        }
    }

    /// Send one command byte with command framing
    pub fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.wait_idle()?;
        self.lines.mode_select(true);
        self.bus
            .write_byte(command)
            .map_err(|_| DisplayError::Communication)
    }

    /// Send one parameter byte with data framing
    pub fn write_data(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.wait_idle()?;
        self.lines.mode_select(false);
        self.bus
            .write_byte(byte)
            .map_err(|_| DisplayError::Communication)
    }

    /// Send a run of parameter bytes
    pub fn write_data_bytes(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        for &byte in bytes {
            self.write_data(byte)?;
        }
        Ok(())
    }

    /// Start a 16-bit pixel burst
    pub fn begin_words(&mut self) -> Result<(), DisplayError> {
        self.wait_idle()?;
        self.lines.mode_select(false);
        self.bus
            .set_frame_width(FrameWidth::Bits16)
            .map_err(|_| DisplayError::Communication)
    }

    /// Post one pixel word inside a burst
    pub fn write_word(&mut self, word: u16) -> Result<(), DisplayError> {
        self.wait_tx_ready()?;
        self.bus
            .write_word(word)
            .map_err(|_| DisplayError::Communication)
    }

    /// Post the same word `count` times inside a burst
    pub fn write_word_repeated(&mut self, word: u16, count: u32) -> Result<(), DisplayError> {
        for _ in 0..count {
            self.write_word(word)?;
        }
        Ok(())
    }

    /// Finish a pixel burst and return to 8-bit frames
    pub fn end_words(&mut self) -> Result<(), DisplayError> {
        self.wait_idle()?;
        self.bus
            .set_frame_width(FrameWidth::Bits8)
            .map_err(|_| DisplayError::Communication)
    }

    fn wait_idle(&self) -> Result<(), DisplayError> {
        self.poll_until(|bus| !bus.is_busy())
    }

    fn wait_tx_ready(&self) -> Result<(), DisplayError> {
        self.poll_until(|bus| bus.is_tx_ready())
    }

    fn poll_until(&self, ready: impl Fn(&B) -> bool) -> Result<(), DisplayError> {
        let mut polls: u32 = 0;
        while !ready(&self.bus) {
            if let PollLimit::Bounded(max) = self.poll_limit {
                if polls >= max {
                    warn!("bus not ready after {} polls", polls);
                    return Err(DisplayError::BusTimeout);
                }
            }
            polls = polls.saturating_add(1);
            core::hint::spin_loop();
        }
        Ok(())
    }
}
