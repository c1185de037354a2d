//! ILI9341 display core
//!
//! This crate drives an ILI9341-class TFT controller over a synchronous
//! serial bus:
//! - `bus` - transaction brackets, command/data framing, word streaming
//!   and the reentrancy guard
//! - `protocol` - controller registers, address windows, bring-up script
//! - `driver` - the `Ili9341` handle owning the device state
//! - `draw` - points, lines, rectangle outlines and fills
//! - `text` - glyph blits and strings in opaque or transparent mode
//! - `layout` - screen compositions built only from the drawing API
//!
//! # Architecture
//!
//! Drawing and text call into the register protocol, which frames bytes
//! through the transaction layer, which in turn toggles the lines and
//! posts frames through the capabilities from `tftlcd-hal`. Every public
//! drawing call is one transaction: chip select is asserted once on entry
//! and released once on exit, and composite primitives never open a
//! nested bracket.
//!
//! ```text
//!   draw / text / layout
//!           │
//!           ▼
//!       protocol ──► DeviceState (width, height, orientation)
//!           │
//!           ▼
//!      bus::Transport ──► LineControl + SerialBus
//! ```

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod backend;
pub mod bus;
pub mod color;
pub mod config;
pub mod draw;
pub mod driver;
pub mod font;
pub mod layout;
pub mod protocol;
pub mod state;
pub mod text;

#[cfg(test)]
mod mock;

// Re-export key types
pub use backend::{DisplayError, PixelBackend};
pub use color::Rgb565;
pub use config::{DisplayConfig, Orientation, PollLimit, ReentrancyPolicy, ResetTiming};
pub use draw::LinePoints;
pub use driver::Ili9341;
pub use font::{BuiltinFont, Glyph, GlyphSize, GlyphSource};
pub use layout::StatusScreen;
pub use protocol::Window;
pub use text::{TextMode, TextStyle};
