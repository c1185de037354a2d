//! Controller register protocol
//!
//! Register writes, address windows and the bring-up script of the
//! ILI9341, expressed on top of the transaction layer.
//!
//! # Address windows
//!
//! A window is programmed with the column range command, the page (row)
//! range command and then the memory write command. Each range is sent as
//! big-endian 16-bit start and end. After memory write the controller's
//! cursor starts at (x0, y0) and advances row-major, wrapping from x1 back
//! to x0 on the next row.

use tftlcd_hal::{LineControl, SerialBus};

use crate::backend::DisplayError;
use crate::bus::Transport;

/// ILI9341 commands
pub mod cmd {
    pub const SLEEP_OUT: u8 = 0x11;
    pub const GAMMA_SET: u8 = 0x26;
    pub const DISPLAY_ON: u8 = 0x29;
    pub const COLUMN_ADDRESS_SET: u8 = 0x2A;
    pub const PAGE_ADDRESS_SET: u8 = 0x2B;
    pub const MEMORY_WRITE: u8 = 0x2C;
    pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;
    pub const PIXEL_FORMAT_SET: u8 = 0x3A;
    pub const FRAME_RATE_CONTROL: u8 = 0xB1;
    pub const DISPLAY_FUNCTION_CONTROL: u8 = 0xB6;
    pub const POWER_CONTROL_1: u8 = 0xC0;
    pub const POWER_CONTROL_2: u8 = 0xC1;
    pub const VCOM_CONTROL_1: u8 = 0xC5;
    pub const VCOM_CONTROL_2: u8 = 0xC7;
    pub const POWER_CONTROL_A: u8 = 0xCB;
    pub const POWER_CONTROL_B: u8 = 0xCF;
    pub const POSITIVE_GAMMA: u8 = 0xE0;
    pub const NEGATIVE_GAMMA: u8 = 0xE1;
    pub const DRIVER_TIMING_A: u8 = 0xE8;
    pub const DRIVER_TIMING_B: u8 = 0xEA;
    pub const POWER_ON_SEQUENCE: u8 = 0xED;
    pub const ENABLE_3G: u8 = 0xF2;
    pub const PUMP_RATIO: u8 = 0xF7;
}

/// Memory access control (MADCTL) bits
pub mod madctl {
    /// Row address order
    pub const MY: u8 = 0x80;
    /// Column address order
    pub const MX: u8 = 0x40;
    /// Row/column exchange
    pub const MV: u8 = 0x20;
    /// BGR colour filter panel
    pub const BGR: u8 = 0x08;
}

/// One register write of the bring-up script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitStep {
    /// Register (command byte)
    pub command: u8,
    /// Parameter bytes, sent with data framing
    pub params: &'static [u8],
}

impl InitStep {
    const fn new(command: u8, params: &'static [u8]) -> Self {
        Self { command, params }
    }
}

/// Vendor bring-up sequence for the 2.2" ILI9341 panel
///
/// Sent verbatim after reset. Sleep-out, display-on and the orientation
/// are issued separately because they need dwell times or depend on
/// configuration.
pub const INIT_SCRIPT: &[InitStep] = &[
    InitStep::new(cmd::POWER_CONTROL_B, &[0x00, 0xD9, 0x30]),
    InitStep::new(cmd::POWER_ON_SEQUENCE, &[0x64, 0x03, 0x12, 0x81]),
    InitStep::new(cmd::DRIVER_TIMING_A, &[0x85, 0x10, 0x7A]),
    InitStep::new(cmd::POWER_CONTROL_A, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    InitStep::new(cmd::PUMP_RATIO, &[0x20]),
    InitStep::new(cmd::DRIVER_TIMING_B, &[0x00, 0x00]),
    // VRH[5:0]
    InitStep::new(cmd::POWER_CONTROL_1, &[0x21]),
    // SAP[2:0], BT[3:0]
    InitStep::new(cmd::POWER_CONTROL_2, &[0x12]),
    InitStep::new(cmd::VCOM_CONTROL_1, &[0x39, 0x37]),
    InitStep::new(cmd::VCOM_CONTROL_2, &[0xAB]),
    InitStep::new(cmd::MEMORY_ACCESS_CONTROL, &[0x48]),
    // 16 bits per pixel
    InitStep::new(cmd::PIXEL_FORMAT_SET, &[0x55]),
    InitStep::new(cmd::FRAME_RATE_CONTROL, &[0x00, 0x1B]),
    InitStep::new(cmd::DISPLAY_FUNCTION_CONTROL, &[0x0A, 0xA2]),
    InitStep::new(cmd::ENABLE_3G, &[0x00]),
    InitStep::new(cmd::GAMMA_SET, &[0x01]),
    InitStep::new(
        cmd::POSITIVE_GAMMA,
        &[
            0x0F, 0x23, 0x1F, 0x0B, 0x0E, 0x08, 0x4B, 0xA8, 0x3B, 0x0A, 0x14, 0x06, 0x10, 0x09,
            0x00,
        ],
    ),
    InitStep::new(
        cmd::NEGATIVE_GAMMA,
        &[
            0x00, 0x1C, 0x20, 0x04, 0x10, 0x08, 0x34, 0x47, 0x44, 0x05, 0x0B, 0x09, 0x2F, 0x36,
            0x0F,
        ],
    ),
    // Full panel: rows 0..=319, columns 0..=239
    InitStep::new(cmd::PAGE_ADDRESS_SET, &[0x00, 0x00, 0x01, 0x3F]),
    InitStep::new(cmd::COLUMN_ADDRESS_SET, &[0x00, 0x00, 0x00, 0xEF]),
];

/// Inclusive pixel rectangle addressed by one RAM write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl Window {
    /// Create a window from its corners (start must not exceed end)
    pub const fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Window spanning two arbitrary corners
    pub fn spanning(xa: u16, ya: u16, xb: u16, yb: u16) -> Self {
        Self::new(xa.min(xb), ya.min(yb), xa.max(xb), ya.max(yb))
    }

    /// Single pixel window
    pub const fn point(x: u16, y: u16) -> Self {
        Self::new(x, y, x, y)
    }

    /// Window of `width` x `height` pixels with its top-left at (x, y)
    ///
    /// Returns `None` for an empty size or when the far corner does not fit
    /// in 16 bits.
    pub fn with_size(x: u16, y: u16, width: u16, height: u16) -> Option<Self> {
        let x1 = x.checked_add(width.checked_sub(1)?)?;
        let y1 = y.checked_add(height.checked_sub(1)?)?;
        Some(Self::new(x, y, x1, y1))
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        (self.x1 - self.x0) as u32 + 1
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        (self.y1 - self.y0) as u32 + 1
    }

    /// Number of pixels the controller expects after memory write
    pub const fn pixel_count(&self) -> u32 {
        self.width() * self.height()
    }

    /// Whether the window is well-formed and lies on a `width` x `height` screen
    pub const fn fits(&self, width: u16, height: u16) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1 && self.x1 < width && self.y1 < height
    }
}

/// Command bytes used to program a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindowCommands {
    /// Column range command
    pub set_column: u8,
    /// Row range command
    pub set_row: u8,
    /// Begin RAM write command
    pub write_ram: u8,
}

impl Default for WindowCommands {
    fn default() -> Self {
        Self {
            set_column: cmd::COLUMN_ADDRESS_SET,
            set_row: cmd::PAGE_ADDRESS_SET,
            write_ram: cmd::MEMORY_WRITE,
        }
    }
}

impl<B, L> Transport<B, L>
where
    B: SerialBus,
    L: LineControl,
{
    /// Write a single-byte register
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), DisplayError> {
        self.write_command(register)?;
        self.write_data(value)
    }

    /// Write a register with a run of parameter bytes
    pub fn write_register_bytes(&mut self, register: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.write_command(register)?;
        self.write_data_bytes(params)
    }

    /// Send every step of a bring-up script in order
    pub fn write_script(&mut self, script: &[InitStep]) -> Result<(), DisplayError> {
        for step in script {
            self.write_register_bytes(step.command, step.params)?;
        }
        Ok(())
    }

    /// Program the address window and issue memory write
    pub fn set_window(
        &mut self,
        window: &Window,
        commands: &WindowCommands,
    ) -> Result<(), DisplayError> {
        trace!(
            "window ({}, {}) - ({}, {})",
            window.x0,
            window.y0,
            window.x1,
            window.y1
        );
        self.write_register_bytes(commands.set_column, &range_bytes(window.x0, window.x1))?;
        self.write_register_bytes(commands.set_row, &range_bytes(window.y0, window.y1))?;
        self.write_command(commands.write_ram)
    }
}

/// Big-endian start/end pair
fn range_bytes(start: u16, end: u16) -> [u8; 4] {
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PollLimit, ReentrancyPolicy};
    use crate::mock::{MockBus, MockLines, Panel};

    #[test]
    fn test_range_bytes_are_big_endian() {
        assert_eq!(range_bytes(0x0102, 0x013F), [0x01, 0x02, 0x01, 0x3F]);
        assert_eq!(range_bytes(0, 239), [0x00, 0x00, 0x00, 0xEF]);
    }

    #[test]
    fn test_window_geometry() {
        let window = Window::new(10, 20, 17, 35);
        assert_eq!(window.width(), 8);
        assert_eq!(window.height(), 16);
        assert_eq!(window.pixel_count(), 128);
        assert!(window.fits(320, 240));
        assert!(!window.fits(17, 240));
    }

    #[test]
    fn test_window_spanning_normalises_corners() {
        assert_eq!(Window::spanning(30, 5, 10, 25), Window::new(10, 5, 30, 25));
    }

    #[test]
    fn test_window_with_size() {
        assert_eq!(Window::with_size(4, 6, 8, 16), Some(Window::new(4, 6, 11, 21)));
        assert_eq!(Window::with_size(4, 6, 0, 16), None);
        assert_eq!(Window::with_size(u16::MAX, 0, 2, 1), None);
    }

    #[test]
    fn test_inverted_window_does_not_fit() {
        assert!(!Window::new(5, 0, 4, 0).fits(320, 240));
    }

    #[test]
    fn test_set_window_byte_sequence() {
        let panel = Panel::shared();
        let mut t = Transport::new(
            MockBus::new(&panel),
            MockLines::new(&panel),
            PollLimit::Unbounded,
            ReentrancyPolicy::Report,
        );
        t.set_window(&Window::new(0, 0, 319, 239), &WindowCommands::default())
            .unwrap();

        assert_eq!(
            panel.borrow().bus_bytes(),
            [
                (true, 0x2A),
                (false, 0x00),
                (false, 0x00),
                (false, 0x01),
                (false, 0x3F),
                (true, 0x2B),
                (false, 0x00),
                (false, 0x00),
                (false, 0x00),
                (false, 0xEF),
                (true, 0x2C),
            ]
        );
    }

    #[test]
    fn test_write_register() {
        let panel = Panel::shared();
        let mut t = Transport::new(
            MockBus::new(&panel),
            MockLines::new(&panel),
            PollLimit::Unbounded,
            ReentrancyPolicy::Report,
        );
        t.write_register(cmd::MEMORY_ACCESS_CONTROL, 0x68).unwrap();

        assert_eq!(panel.borrow().bus_bytes(), [(true, 0x36), (false, 0x68)]);
    }

    #[test]
    fn test_init_script_is_sent_verbatim() {
        let panel = Panel::shared();
        let mut t = Transport::new(
            MockBus::new(&panel),
            MockLines::new(&panel),
            PollLimit::Unbounded,
            ReentrancyPolicy::Report,
        );
        t.write_script(INIT_SCRIPT).unwrap();

        let bytes = panel.borrow().bus_bytes();
        let expected_len: usize = INIT_SCRIPT.iter().map(|s| 1 + s.params.len()).sum();
        assert_eq!(bytes.len(), expected_len);
        assert_eq!(bytes[0], (true, cmd::POWER_CONTROL_B));
        assert_eq!(bytes[1..4], [(false, 0x00), (false, 0xD9), (false, 0x30)]);
        assert_eq!(panel.borrow().commands().len(), INIT_SCRIPT.len());
    }

    #[test]
    fn test_init_script_selects_rgb565() {
        let step = INIT_SCRIPT
            .iter()
            .find(|s| s.command == cmd::PIXEL_FORMAT_SET)
            .unwrap();
        assert_eq!(step.params, [0x55]);
    }
}
