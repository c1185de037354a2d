//! 16-bit packed colour
//!
//! The controller is configured for RGB565 (pixel format register 0x55):
//! 5 bits red, 6 bits green, 5 bits blue, red in the top bits.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB565 colour as streamed to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb565(u16);

impl Rgb565 {
    pub const WHITE: Self = Self(0xFFFF);
    pub const BLACK: Self = Self(0x0000);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const CYAN: Self = Self(0x07FF);
    pub const MAGENTA: Self = Self(0xF81F);
    pub const BROWN: Self = Self(0xBC40);
    pub const GRAY: Self = Self(0x8430);

    /// Wrap a raw packed value
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Raw packed value, as sent on the wire
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_layout() {
        assert_eq!(Rgb565::RED.raw() >> 11, 0x1F);
        assert_eq!((Rgb565::GREEN.raw() >> 5) & 0x3F, 0x3F);
        assert_eq!(Rgb565::BLUE.raw() & 0x1F, 0x1F);
    }

    #[test]
    fn test_raw_conversions() {
        let color = Rgb565::from(0x1234);
        assert_eq!(u16::from(color), 0x1234);
        assert_eq!(Rgb565::new(0xFFFF), Rgb565::WHITE);
    }
}
