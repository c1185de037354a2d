//! Device state
//!
//! Logical geometry of the panel for the current orientation, and the
//! command bytes used to address it. Written only when the orientation is
//! applied; read by every drawing call.

use crate::config::Orientation;
use crate::protocol::{Window, WindowCommands};

/// Negotiated panel state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
    native_width: u16,
    native_height: u16,
    width: u16,
    height: u16,
    orientation: Orientation,
    commands: WindowCommands,
}

impl DeviceState {
    /// State for a panel of the given native size in the given orientation
    pub fn new(native_width: u16, native_height: u16, orientation: Orientation) -> Self {
        let (width, height) = orientation.dimensions(native_width, native_height);
        Self {
            native_width,
            native_height,
            width,
            height,
            orientation,
            commands: WindowCommands::default(),
        }
    }

    /// Record a new orientation and the resulting logical size
    pub fn set_orientation(&mut self, orientation: Orientation) {
        let (width, height) = orientation.dimensions(self.native_width, self.native_height);
        self.width = width;
        self.height = height;
        self.orientation = orientation;
    }

    /// Logical width
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Logical height
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Current orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Window programming commands
    pub fn commands(&self) -> &WindowCommands {
        &self.commands
    }

    /// Window covering the whole screen
    pub fn screen(&self) -> Window {
        Window::new(0, 0, self.width.saturating_sub(1), self.height.saturating_sub(1))
    }

    /// Whether (x, y) is on screen
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Whether a window lies entirely on screen
    pub fn fits(&self, window: &Window) -> bool {
        window.fits(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_round_trip_restores_size() {
        let mut state = DeviceState::new(240, 320, Orientation::Portrait);
        let portrait = (state.width(), state.height());

        state.set_orientation(Orientation::Landscape);
        assert_eq!((state.height(), state.width()), portrait);

        state.set_orientation(Orientation::PortraitFlipped);
        assert_eq!((state.width(), state.height()), portrait);

        state.set_orientation(Orientation::LandscapeFlipped);
        assert_eq!((state.height(), state.width()), portrait);

        state.set_orientation(Orientation::Portrait);
        assert_eq!((state.width(), state.height()), portrait);
    }

    #[test]
    fn test_screen_window() {
        let state = DeviceState::new(240, 320, Orientation::Landscape);
        assert_eq!(state.screen(), Window::new(0, 0, 319, 239));
    }

    #[test]
    fn test_contains_edges() {
        let state = DeviceState::new(240, 320, Orientation::Landscape);
        assert!(state.contains(0, 0));
        assert!(state.contains(319, 239));
        assert!(!state.contains(320, 0));
        assert!(!state.contains(0, 240));
    }
}
