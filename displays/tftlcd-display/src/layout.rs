//! Screen compositions
//!
//! The application screens of the capture device: a menu home screen, a
//! status line and an elapsed-time readout. They only use the
//! [`PixelBackend`] drawing API, so they render to any surface.

use core::fmt::Write;

use heapless::String;

use crate::backend::{DisplayError, PixelBackend};
use crate::color::Rgb565;
use crate::text::TextStyle;

/// Maximum length of a formatted elapsed-time line
pub const ELAPSED_LINE_LEN: usize = 32;

const TITLE_POS: (u16, u16) = (130, 10);
const MENU_X: u16 = 10;
const MENU_TOP: u16 = 40;
const LINE_PITCH: u16 = 20;
const STATUS_POS: (u16, u16) = (10, 120);
const STATUS_VALUE_X: u16 = 80;
const ELAPSED_LABEL_POS: (u16, u16) = (10, 160);
const ELAPSED_VALUE_POS: (u16, u16) = (10, 180);

/// Home, status and elapsed-time screens
#[derive(Debug, Clone, Copy)]
pub struct StatusScreen<'a> {
    pub title: &'a str,
    pub menu: &'a [&'a str],
    pub elapsed_label: &'a str,
    pub style: TextStyle,
}

impl Default for StatusScreen<'static> {
    fn default() -> Self {
        Self {
            title: "METAPORTER",
            menu: &[
                "1: Begin data collection",
                "2: Stop data collection",
                "3: Calibrate",
            ],
            elapsed_label: "Metaporter has been capturing",
            style: TextStyle::default(),
        }
    }
}

impl<'a> StatusScreen<'a> {
    /// Clear to the background colour and draw the title and menu
    pub fn show_home<D: PixelBackend>(&self, display: &mut D) -> Result<(), DisplayError> {
        display.clear(self.style.bg)?;
        display.draw_string(TITLE_POS.0, TITLE_POS.1, self.title, self.style)?;

        let mut y = MENU_TOP;
        for item in self.menu {
            display.draw_string(MENU_X, y, item, self.style)?;
            y = y.saturating_add(LINE_PITCH);
        }
        Ok(())
    }

    /// Draw the status label and `status` after it
    ///
    /// The previous value is not erased; a shorter value leaves the tail of
    /// the old one visible unless the caller pads it.
    pub fn update_status<D: PixelBackend>(
        &self,
        display: &mut D,
        status: &str,
    ) -> Result<(), DisplayError> {
        display.draw_string(STATUS_POS.0, STATUS_POS.1, "Status: ", self.style)?;
        display.draw_string(STATUS_VALUE_X, STATUS_POS.1, status, self.style)?;
        Ok(())
    }

    /// Draw how long capture has been running
    pub fn show_elapsed<D: PixelBackend>(
        &self,
        display: &mut D,
        seconds: u32,
    ) -> Result<(), DisplayError> {
        display.draw_string(
            ELAPSED_LABEL_POS.0,
            ELAPSED_LABEL_POS.1,
            self.elapsed_label,
            self.style,
        )?;
        let line = elapsed_line(seconds)?;
        display.draw_string(ELAPSED_VALUE_POS.0, ELAPSED_VALUE_POS.1, &line, self.style)?;
        Ok(())
    }

    /// Same screens with different colours
    pub fn with_colors(mut self, fg: Rgb565, bg: Rgb565) -> Self {
        self.style.fg = fg;
        self.style.bg = bg;
        self
    }
}

fn elapsed_line(seconds: u32) -> Result<String<ELAPSED_LINE_LEN>, DisplayError> {
    let mut line = String::new();
    write!(line, "data for: {}s", seconds).map_err(|_| DisplayError::BufferOverflow)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::{String as StdString, ToString};
    use std::vec::Vec;

    use super::*;
    use crate::config::DisplayConfig;
    use crate::mock;
    use crate::protocol::Window;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear(Rgb565),
        Text(u16, u16, StdString),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl PixelBackend for Recorder {
        fn dimensions(&self) -> (u16, u16) {
            (320, 240)
        }

        fn clear(&mut self, color: Rgb565) -> Result<(), DisplayError> {
            self.calls.push(Call::Clear(color));
            Ok(())
        }

        fn draw_point(&mut self, _x: u16, _y: u16, _color: Rgb565) -> Result<(), DisplayError> {
            Ok(())
        }

        fn draw_line(
            &mut self,
            _x1: u16,
            _y1: u16,
            _x2: u16,
            _y2: u16,
            _color: Rgb565,
        ) -> Result<(), DisplayError> {
            Ok(())
        }

        fn draw_rectangle(
            &mut self,
            _x1: u16,
            _y1: u16,
            _x2: u16,
            _y2: u16,
            _color: Rgb565,
        ) -> Result<(), DisplayError> {
            Ok(())
        }

        fn draw_fill_rectangle(
            &mut self,
            _x1: u16,
            _y1: u16,
            _x2: u16,
            _y2: u16,
            _color: Rgb565,
        ) -> Result<(), DisplayError> {
            Ok(())
        }

        fn draw_string(
            &mut self,
            x: u16,
            y: u16,
            text: &str,
            _style: TextStyle,
        ) -> Result<usize, DisplayError> {
            self.calls.push(Call::Text(x, y, text.to_string()));
            Ok(text.len())
        }
    }

    fn text(x: u16, y: u16, s: &str) -> Call {
        Call::Text(x, y, s.to_string())
    }

    #[test]
    fn test_home_screen_layout() {
        let mut display = Recorder::default();
        StatusScreen::default().show_home(&mut display).unwrap();

        assert_eq!(
            display.calls,
            [
                Call::Clear(Rgb565::WHITE),
                text(130, 10, "METAPORTER"),
                text(10, 40, "1: Begin data collection"),
                text(10, 60, "2: Stop data collection"),
                text(10, 80, "3: Calibrate"),
            ]
        );
    }

    #[test]
    fn test_status_line() {
        let mut display = Recorder::default();
        StatusScreen::default()
            .update_status(&mut display, "Collecting")
            .unwrap();

        assert_eq!(
            display.calls,
            [text(10, 120, "Status: "), text(80, 120, "Collecting")]
        );
    }

    #[test]
    fn test_elapsed_time() {
        let mut display = Recorder::default();
        StatusScreen::default().show_elapsed(&mut display, 42).unwrap();

        assert_eq!(
            display.calls,
            [
                text(10, 160, "Metaporter has been capturing"),
                text(10, 180, "data for: 42s"),
            ]
        );
    }

    #[test]
    fn test_elapsed_line_fits_largest_value() {
        let line = elapsed_line(u32::MAX).unwrap();
        assert_eq!(line.as_str(), "data for: 4294967295s");
    }

    #[test]
    fn test_status_screen_on_panel() {
        let (mut dev, panel) = mock::display(DisplayConfig::default());
        let screen = StatusScreen::default();
        screen.update_status(&mut dev, "Idle").unwrap();

        let panel = panel.borrow();
        // "Status: " then "Idle", one bracket each
        assert_eq!(panel.select_count(), 2);
        assert_eq!(panel.windows.len(), 12);
        assert_eq!(panel.windows[8], Window::new(80, 120, 87, 135));
    }

    #[test]
    fn test_custom_colors() {
        let mut display = Recorder::default();
        StatusScreen::default()
            .with_colors(Rgb565::WHITE, Rgb565::BLUE)
            .show_home(&mut display)
            .unwrap();
        assert_eq!(display.calls[0], Call::Clear(Rgb565::BLUE));
    }
}
