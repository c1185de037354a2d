//! Text renderer
//!
//! Blits glyphs from the driver's [`GlyphSource`]. Opaque glyphs stream the
//! whole cell in one burst, transparent glyphs set only their foreground
//! pixels one window at a time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tftlcd_hal::{LineControl, SerialBus};

use crate::backend::DisplayError;
use crate::color::Rgb565;
use crate::driver::Ili9341;
use crate::font::{is_printable, Glyph, GlyphSize, GlyphSource};
use crate::protocol::Window;

/// How unset glyph bits are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TextMode {
    /// Unset bits are painted with the background colour
    #[default]
    Opaque,
    /// Unset bits leave the screen untouched
    Transparent,
}

/// Colours, size and mode for glyph rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextStyle {
    pub fg: Rgb565,
    pub bg: Rgb565,
    pub size: GlyphSize,
    pub mode: TextMode,
}

impl TextStyle {
    /// Opaque text in the large font
    pub const fn new(fg: Rgb565, bg: Rgb565) -> Self {
        Self {
            fg,
            bg,
            size: GlyphSize::Large,
            mode: TextMode::Opaque,
        }
    }

    /// Transparent text in the large font
    pub const fn transparent(fg: Rgb565) -> Self {
        Self {
            fg,
            bg: Rgb565::BLACK,
            size: GlyphSize::Large,
            mode: TextMode::Transparent,
        }
    }

    pub const fn with_size(mut self, size: GlyphSize) -> Self {
        self.size = size;
        self
    }

    pub const fn with_mode(mut self, mode: TextMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(Rgb565::BLACK, Rgb565::WHITE)
    }
}

impl<B, L, F> Ili9341<B, L, F>
where
    B: SerialBus,
    L: LineControl,
    F: GlyphSource,
{
    /// Draw one character with its top-left corner at (x, y)
    ///
    /// Fails with `InvalidGlyph` for codes the font has no glyph for and
    /// with `InvalidCoordinates` when the cell does not fit on screen.
    pub fn draw_glyph(
        &mut self,
        x: u16,
        y: u16,
        code: char,
        style: TextStyle,
    ) -> Result<(), DisplayError> {
        let glyph = self
            .font
            .glyph(code, style.size)
            .ok_or(DisplayError::InvalidGlyph)?;
        let cell = self.cell(x, y, style.size).ok_or(DisplayError::InvalidCoordinates)?;
        self.transaction(|dev| dev.glyph(&cell, &glyph, style))
    }

    /// Draw `text` left to right starting at (x, y)
    ///
    /// Stops at the first character outside `' '..='~'` or the first cell
    /// that would not fit on screen, and returns how many characters were
    /// drawn. Running out of room is not an error.
    pub fn draw_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        style: TextStyle,
    ) -> Result<usize, DisplayError> {
        self.transaction(|dev| {
            let mut drawn = 0;
            let mut x = x;
            for code in text.chars() {
                let next = is_printable(code)
                    .then(|| dev.cell(x, y, style.size))
                    .flatten()
                    .zip(dev.font.glyph(code, style.size));
                let Some((cell, glyph)) = next else {
                    trace!("draw_string stopped after {} characters", drawn);
                    break;
                };
                dev.glyph(&cell, &glyph, style)?;
                drawn += 1;
                x = x.saturating_add(style.size.width());
            }
            Ok(drawn)
        })
    }

    /// Screen cell for a glyph at (x, y), if it fits entirely
    fn cell(&self, x: u16, y: u16, size: GlyphSize) -> Option<Window> {
        Window::with_size(x, y, size.width(), size.height()).filter(|cell| self.state.fits(cell))
    }

    fn glyph(&mut self, cell: &Window, glyph: &Glyph, style: TextStyle) -> Result<(), DisplayError> {
        let width = style.size.width();
        match style.mode {
            TextMode::Opaque => {
                let commands = *self.state.commands();
                self.transport.set_window(cell, &commands)?;
                self.transport.begin_words()?;
                for &bits in glyph.rows() {
                    for col in 0..width {
                        let color = if bits >> col & 0x01 != 0 {
                            style.fg
                        } else {
                            style.bg
                        };
                        self.transport.write_word(color.raw())?;
                    }
                }
                self.transport.end_words()
            }
            TextMode::Transparent => {
                for (row, &bits) in (0u16..).zip(glyph.rows()) {
                    for col in 0..width {
                        if bits >> col & 0x01 != 0 {
                            self.point(cell.x0 + col, cell.y0 + row, style.fg)?;
                        }
                    }
                }
                Ok(())
            }
        }
    }
}
