//! Drawing engine
//!
//! Points, lines, rectangle outlines and filled rectangles. Each public
//! operation validates its coordinates, then runs as one transaction.
//! Composite shapes are built from the bracket-free helpers at the bottom
//! of this file so only the outermost call owns chip select.

use tftlcd_hal::{LineControl, SerialBus};

use crate::backend::DisplayError;
use crate::color::Rgb565;
use crate::driver::Ili9341;
use crate::font::GlyphSource;
use crate::protocol::Window;

/// Points of a rasterised line
///
/// Error-accumulation rasteriser over the longer axis. Yields
/// `distance + 2` points, where `distance` is the larger of the absolute
/// deltas: the start point is emitted twice, then one point per step up to
/// and including the end point. Horizontal, vertical and zero-length lines
/// fall out of the same arithmetic.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    step_x: i32,
    step_y: i32,
    x_err: i32,
    y_err: i32,
    distance: i32,
    remaining: u32,
}

impl LinePoints {
    pub fn new(x1: u16, y1: u16, x2: u16, y2: u16) -> Self {
        let dx = i32::from(x2) - i32::from(x1);
        let dy = i32::from(y2) - i32::from(y1);
        let distance = dx.abs().max(dy.abs());
        Self {
            x: i32::from(x1),
            y: i32::from(y1),
            dx: dx.abs(),
            dy: dy.abs(),
            step_x: dx.signum(),
            step_y: dy.signum(),
            x_err: 0,
            y_err: 0,
            distance,
            remaining: distance as u32 + 2,
        }
    }
}

impl Iterator for LinePoints {
    type Item = (u16, u16);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // Coordinates never leave the bounding box of the endpoints
        let point = (self.x as u16, self.y as u16);

        self.x_err += self.dx;
        self.y_err += self.dy;
        if self.x_err > self.distance {
            self.x_err -= self.distance;
            self.x += self.step_x;
        }
        if self.y_err > self.distance {
            self.y_err -= self.distance;
            self.y += self.step_y;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePoints {}

impl<B, L, F> Ili9341<B, L, F>
where
    B: SerialBus,
    L: LineControl,
    F: GlyphSource,
{
    /// Fill the whole screen with `color`
    pub fn clear(&mut self, color: Rgb565) -> Result<(), DisplayError> {
        let screen = self.state.screen();
        self.transaction(|dev| dev.fill_window(&screen, color))
    }

    /// Set one pixel
    pub fn draw_point(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError> {
        self.check_point(x, y)?;
        self.transaction(|dev| dev.point(x, y, color))
    }

    /// Draw a line from (x1, y1) to (x2, y2), both ends included
    pub fn draw_line(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.check_point(x1, y1)?;
        self.check_point(x2, y2)?;
        self.transaction(|dev| dev.line(x1, y1, x2, y2, color))
    }

    /// Draw the outline of the rectangle spanned by two corners
    pub fn draw_rectangle(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.check_point(x1, y1)?;
        self.check_point(x2, y2)?;
        self.transaction(|dev| {
            dev.line(x1, y1, x2, y1, color)?;
            dev.line(x1, y1, x1, y2, color)?;
            dev.line(x1, y2, x2, y2, color)?;
            dev.line(x2, y1, x2, y2, color)
        })
    }

    /// Fill the rectangle spanned by two corners in one pixel burst
    ///
    /// Corners may be given in any order.
    pub fn draw_fill_rectangle(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        let window = Window::spanning(x1, y1, x2, y2);
        if !self.state.fits(&window) {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.transaction(|dev| dev.fill_window(&window, color))
    }

    fn check_point(&self, x: u16, y: u16) -> Result<(), DisplayError> {
        if self.state.contains(x, y) {
            Ok(())
        } else {
            Err(DisplayError::InvalidCoordinates)
        }
    }

    // Bracket-free helpers, only called inside a transaction

    pub(crate) fn point(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError> {
        let commands = *self.state.commands();
        self.transport.set_window(&Window::point(x, y), &commands)?;
        self.transport.begin_words()?;
        self.transport.write_word(color.raw())?;
        self.transport.end_words()
    }

    fn line(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        for (x, y) in LinePoints::new(x1, y1, x2, y2) {
            self.point(x, y, color)?;
        }
        Ok(())
    }

    fn fill_window(&mut self, window: &Window, color: Rgb565) -> Result<(), DisplayError> {
        let commands = *self.state.commands();
        self.transport.set_window(window, &commands)?;
        self.transport.begin_words()?;
        self.transport
            .write_word_repeated(color.raw(), window.pixel_count())?;
        self.transport.end_words()
    }
}
