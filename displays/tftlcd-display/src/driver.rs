//! ILI9341 driver handle
//!
//! Owns the transport, the device state and the glyph source. Every public
//! operation that touches the bus runs as exactly one transaction; the
//! drawing and text modules add their operations to this type.

use embedded_hal::delay::DelayNs;
use tftlcd_hal::{LineControl, SerialBus};

use crate::backend::{DisplayError, PixelBackend};
use crate::bus::Transport;
use crate::color::Rgb565;
use crate::config::{DisplayConfig, Orientation};
use crate::font::{BuiltinFont, GlyphSource};
use crate::protocol::{cmd, INIT_SCRIPT};
use crate::state::DeviceState;
use crate::text::TextStyle;

/// ILI9341 panel driver
pub struct Ili9341<B, L, F = BuiltinFont> {
    pub(crate) transport: Transport<B, L>,
    pub(crate) state: DeviceState,
    pub(crate) font: F,
    config: DisplayConfig,
}

impl<B, L> Ili9341<B, L, BuiltinFont>
where
    B: SerialBus,
    L: LineControl,
{
    /// Create a driver using the built-in fonts
    ///
    /// No bus traffic happens until [`init`](Self::init).
    pub fn new(bus: B, lines: L, config: DisplayConfig) -> Result<Self, DisplayError> {
        Self::with_font(bus, lines, config, BuiltinFont)
    }
}

impl<B, L, F> Ili9341<B, L, F>
where
    B: SerialBus,
    L: LineControl,
    F: GlyphSource,
{
    /// Create a driver with a caller-supplied glyph source
    pub fn with_font(bus: B, lines: L, config: DisplayConfig, font: F) -> Result<Self, DisplayError> {
        if !config.is_valid() {
            return Err(DisplayError::InvalidConfig);
        }
        Ok(Self {
            transport: Transport::new(bus, lines, config.poll_limit, config.reentrancy),
            state: DeviceState::new(config.native_width, config.native_height, config.orientation),
            font,
            config,
        })
    }

    /// Bring the panel up
    ///
    /// Parks the lines, pulses reset, sends the vendor script, leaves sleep,
    /// turns the display on and applies the configured orientation.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        debug!("ili9341: init");
        self.transport.park();

        let timing = self.config.timing;
        let orientation = self.config.orientation;
        self.transaction(|dev| {
            dev.reset(&mut *delay);

            dev.transport.write_script(INIT_SCRIPT)?;
            debug!("ili9341: init script sent ({} steps)", INIT_SCRIPT.len());

            dev.transport.write_command(cmd::SLEEP_OUT)?;
            delay.delay_ms(timing.sleep_out_ms);
            dev.transport.write_command(cmd::DISPLAY_ON)?;

            dev.apply_orientation(orientation)
        })?;

        debug!("ili9341: ready {}x{}", self.state.width(), self.state.height());
        Ok(())
    }

    /// Pulse the reset line with the configured dwell times
    pub fn reset(&mut self, delay: &mut impl DelayNs) {
        let timing = self.config.timing;
        self.transport.reset_line(true);
        delay.delay_ms(timing.reset_assert_ms);
        self.transport.reset_line(false);
        delay.delay_ms(timing.reset_settle_ms);
    }

    /// Change the orientation and the logical screen size
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), DisplayError> {
        self.transaction(|dev| dev.apply_orientation(orientation))
    }

    /// Change the orientation from a raw mode number (0-3)
    pub fn set_orientation_raw(&mut self, mode: u8) -> Result<(), DisplayError> {
        let orientation = Orientation::from_raw(mode).ok_or(DisplayError::InvalidOrientation)?;
        self.set_orientation(orientation)
    }

    /// Logical width for the current orientation
    pub fn width(&self) -> u16 {
        self.state.width()
    }

    /// Logical height for the current orientation
    pub fn height(&self) -> u16 {
        self.state.height()
    }

    pub fn orientation(&self) -> Orientation {
        self.state.orientation()
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Release the bus and line capabilities
    pub fn release(self) -> (B, L) {
        self.transport.release()
    }

    /// Run `body` inside one chip-select bracket
    ///
    /// The bracket is closed even when `body` fails; the first error wins.
    /// A bracket that could not be opened is not closed, since chip select
    /// then belongs to someone else.
    pub(crate) fn transaction<T>(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<T, DisplayError>,
    ) -> Result<T, DisplayError> {
        self.transport.select(true)?;
        let result = body(self);
        let closed = self.transport.select(false);
        let value = result?;
        closed?;
        Ok(value)
    }

    fn apply_orientation(&mut self, orientation: Orientation) -> Result<(), DisplayError> {
        self.transport
            .write_register(cmd::MEMORY_ACCESS_CONTROL, orientation.madctl())?;
        self.state.set_orientation(orientation);
        debug!(
            "ili9341: orientation {} ({}x{})",
            orientation.raw(),
            self.state.width(),
            self.state.height()
        );
        Ok(())
    }
}

impl<B, L, F> PixelBackend for Ili9341<B, L, F>
where
    B: SerialBus,
    L: LineControl,
    F: GlyphSource,
{
    fn dimensions(&self) -> (u16, u16) {
        (self.state.width(), self.state.height())
    }

    fn clear(&mut self, color: Rgb565) -> Result<(), DisplayError> {
        Ili9341::clear(self, color)
    }

    fn draw_point(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError> {
        Ili9341::draw_point(self, x, y, color)
    }

    fn draw_line(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        Ili9341::draw_line(self, x1, y1, x2, y2, color)
    }

    fn draw_rectangle(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        Ili9341::draw_rectangle(self, x1, y1, x2, y2, color)
    }

    fn draw_fill_rectangle(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        Ili9341::draw_fill_rectangle(self, x1, y1, x2, y2, color)
    }

    fn draw_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        style: TextStyle,
    ) -> Result<usize, DisplayError> {
        Ili9341::draw_string(self, x, y, text, style)
    }
}
