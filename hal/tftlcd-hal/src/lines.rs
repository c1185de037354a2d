//! Panel control line abstractions
//!
//! The panel has three control lines besides the bus itself:
//! - nRESET: held low to reset the controller
//! - nCS: chip select, low while a transaction is open
//! - D/C: low for command bytes, high for data bytes

use embedded_hal::digital::{OutputPin, StatefulOutputPin};

/// Line-control capability consumed by the display core
///
/// Every method toggles exactly one physical line and must be idempotent.
/// Arguments are logical: `true` always means "asserted", regardless of
/// the electrical polarity of the line.
pub trait LineControl {
    /// Assert (`true`) or release (`false`) the reset line
    fn reset(&mut self, assert: bool);

    /// Assert (`true`) or release (`false`) chip select
    fn select(&mut self, assert: bool);

    /// Select command framing (`true`) or data framing (`false`)
    fn mode_select(&mut self, command: bool);

    /// Read back whether chip select is currently asserted
    ///
    /// The transaction layer uses this to detect a transaction that is
    /// already open when a new one is requested.
    fn is_selected(&mut self) -> bool;
}

/// Default line control built from three `embedded-hal` output pins
///
/// All three lines are active-low on the panel: reset and chip select are
/// asserted by driving the pin low, and command framing is D/C low.
/// Pin errors are ignored, as toggling a push-pull output cannot fail on
/// the targets this is meant for.
pub struct PinLines<RST, CS, DC> {
    rst: RST,
    cs: CS,
    dc: DC,
}

impl<RST, CS, DC> PinLines<RST, CS, DC>
where
    RST: OutputPin,
    CS: StatefulOutputPin,
    DC: OutputPin,
{
    /// Wrap the reset, chip-select and data/command pins
    pub fn new(rst: RST, cs: CS, dc: DC) -> Self {
        Self { rst, cs, dc }
    }

    /// Return the wrapped pins
    pub fn release(self) -> (RST, CS, DC) {
        (self.rst, self.cs, self.dc)
    }
}

impl<RST, CS, DC> LineControl for PinLines<RST, CS, DC>
where
    RST: OutputPin,
    CS: StatefulOutputPin,
    DC: OutputPin,
{
    fn reset(&mut self, assert: bool) {
        let _ = if assert {
            self.rst.set_low()
        } else {
            self.rst.set_high()
        };
    }

    fn select(&mut self, assert: bool) {
        let _ = if assert {
            self.cs.set_low()
        } else {
            self.cs.set_high()
        };
    }

    fn mode_select(&mut self, command: bool) {
        let _ = if command {
            self.dc.set_low()
        } else {
            self.dc.set_high()
        };
    }

    fn is_selected(&mut self) -> bool {
        // A pin that cannot be read back is treated as released
        self.cs.is_set_low().unwrap_or(false)
    }
}
