//! Display configuration types
//!
//! Panel geometry, default orientation, bus polling policy and bring-up
//! timing. All values are fixed at construction of the driver.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::protocol::madctl;

/// Native (portrait) panel width in pixels
pub const NATIVE_WIDTH: u16 = 240;

/// Native (portrait) panel height in pixels
pub const NATIVE_HEIGHT: u16 = 320;

/// Logical rotation of the controller's memory mapping
///
/// The discriminant is the raw mode number (0-3). Width and height are
/// swapped for `Landscape` and `LandscapeFlipped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Mode 0: 0°
    Portrait = 0,
    /// Mode 1: 90°
    #[default]
    Landscape = 1,
    /// Mode 2: 180°
    PortraitFlipped = 2,
    /// Mode 3: 270°
    LandscapeFlipped = 3,
}

impl Orientation {
    /// Convert a raw mode number (0-3)
    pub const fn from_raw(mode: u8) -> Option<Self> {
        match mode {
            0 => Some(Self::Portrait),
            1 => Some(Self::Landscape),
            2 => Some(Self::PortraitFlipped),
            3 => Some(Self::LandscapeFlipped),
            _ => None,
        }
    }

    /// Raw mode number
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Whether logical width and height are swapped against the panel
    pub const fn is_swapped(self) -> bool {
        matches!(self, Self::Landscape | Self::LandscapeFlipped)
    }

    /// Memory access control register value (BGR order always set)
    pub const fn madctl(self) -> u8 {
        match self {
            Self::Portrait => madctl::BGR,
            Self::Landscape => madctl::BGR | madctl::MX | madctl::MV,
            Self::PortraitFlipped => madctl::BGR | madctl::MX | madctl::MY,
            Self::LandscapeFlipped => madctl::BGR | madctl::MY | madctl::MV,
        }
    }

    /// Logical (width, height) for a panel of the given native size
    pub const fn dimensions(self, native_width: u16, native_height: u16) -> (u16, u16) {
        if self.is_swapped() {
            (native_height, native_width)
        } else {
            (native_width, native_height)
        }
    }
}

/// Bound on busy/ready polling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PollLimit {
    /// Spin until the hardware reports ready
    #[default]
    Unbounded,
    /// Give up with `BusTimeout` after this many unsuccessful polls
    Bounded(u32),
}

/// Reaction to chip select found already asserted on transaction entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReentrancyPolicy {
    /// Return `DisplayError::ReentrancyViolation` without touching the bus
    #[default]
    Report,
    /// Spin until chip select is observed released
    ///
    /// From an interrupt handler that preempted an open transaction this
    /// never returns.
    Hang,
}

/// Reset and power-up dwell times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResetTiming {
    /// How long reset is held asserted (ms)
    pub reset_assert_ms: u32,
    /// Settle time after releasing reset (ms)
    pub reset_settle_ms: u32,
    /// Wait after sleep-out before display-on (ms)
    pub sleep_out_ms: u32,
}

impl Default for ResetTiming {
    fn default() -> Self {
        Self {
            reset_assert_ms: 100,
            reset_settle_ms: 50,
            sleep_out_ms: 120,
        }
    }
}

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Panel width in mode 0
    pub native_width: u16,
    /// Panel height in mode 0
    pub native_height: u16,
    /// Orientation applied at the end of bring-up
    pub orientation: Orientation,
    /// Busy/ready polling bound
    pub poll_limit: PollLimit,
    /// Overlapping transaction handling
    pub reentrancy: ReentrancyPolicy,
    /// Reset and sleep-out timing
    pub timing: ResetTiming,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            native_width: NATIVE_WIDTH,
            native_height: NATIVE_HEIGHT,
            orientation: Orientation::default(),
            poll_limit: PollLimit::default(),
            reentrancy: ReentrancyPolicy::default(),
            timing: ResetTiming::default(),
        }
    }
}

impl DisplayConfig {
    /// Set the orientation applied at bring-up
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the busy/ready polling bound
    pub fn with_poll_limit(mut self, poll_limit: PollLimit) -> Self {
        self.poll_limit = poll_limit;
        self
    }

    /// Set the overlapping transaction policy
    pub fn with_reentrancy(mut self, reentrancy: ReentrancyPolicy) -> Self {
        self.reentrancy = reentrancy;
        self
    }

    /// Check the geometry is usable
    ///
    /// Both dimensions must be positive; window coordinates are 16-bit on
    /// the wire, so any `u16` size is addressable.
    pub fn is_valid(&self) -> bool {
        self.native_width > 0 && self.native_height > 0
    }
}
