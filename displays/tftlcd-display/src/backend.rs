//! Display backend trait
//!
//! Defines the drawing surface the screen compositions render to.

use crate::color::Rgb565;
use crate::text::TextStyle;

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The serial bus reported a transfer error
    Communication,
    /// The bus never reported idle/ready within the configured poll bound
    BusTimeout,
    /// Chip select was already asserted when a transaction was opened
    ReentrancyViolation,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Character code outside the printable range
    InvalidGlyph,
    /// Raw orientation outside 0..=3
    InvalidOrientation,
    /// Configuration cannot describe a panel
    InvalidConfig,
    /// Buffer overflow
    BufferOverflow,
}

/// Pixel drawing surface
///
/// Provides the drawing API of the panel behind a trait so compositions
/// can render to any surface. Coordinates are logical pixels for the
/// current orientation, corners are inclusive.
pub trait PixelBackend {
    /// Get pixel dimensions as (width, height)
    fn dimensions(&self) -> (u16, u16);

    /// Fill the entire surface with one colour
    fn clear(&mut self, color: Rgb565) -> Result<(), DisplayError>;

    /// Draw a single pixel
    fn draw_point(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError>;

    /// Draw a line between two points, both included
    fn draw_line(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Draw a rectangle outline
    fn draw_rectangle(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Fill a rectangle
    fn draw_fill_rectangle(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Draw text starting at (x, y)
    ///
    /// Returns the number of characters drawn. Drawing stops silently at
    /// the first non-printable character or the first glyph that would not
    /// fit on the surface.
    fn draw_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        style: TextStyle,
    ) -> Result<usize, DisplayError>;
}
