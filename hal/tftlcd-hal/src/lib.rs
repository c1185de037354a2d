//! tftlcd Hardware Abstraction Layer
//!
//! This crate defines the capabilities the display core consumes from the
//! board: the three control lines of the panel and the serial bus that
//! carries command and pixel bytes. Board support code implements these
//! traits directly, or wraps `embedded-hal` peripherals with the adapters
//! provided here.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (menus, status lines)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tftlcd-display (protocol + drawing)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tftlcd-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  embedded-hal │       │  register-    │
//! │  adapters     │       │  level HALs   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`lines::LineControl`] - Reset, chip-select and data/command lines
//! - [`spi::SerialBus`] - Byte and word transmit with busy/ready status

#![no_std]
#![deny(unsafe_code)]

pub mod lines;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use lines::{LineControl, PinLines};
pub use spi::{BlockingSpi, FrameWidth, SerialBus};
