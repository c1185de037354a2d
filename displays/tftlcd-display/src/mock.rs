//! Simulated panel for unit tests
//!
//! `MockBus` and `MockLines` share one `Panel`, which records every line
//! toggle and frame in order and interprets them like the controller does:
//! column and page ranges latch on their fourth parameter byte, memory
//! write resets the cursor to the window origin and pixel words advance it
//! row-major through the window.

extern crate std;

use std::cell::RefCell;
use std::rc::Rc;
use std::vec;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use tftlcd_hal::{FrameWidth, LineControl, SerialBus};

use crate::config::DisplayConfig;
use crate::driver::Ili9341;
use crate::protocol::{cmd, Window};

/// Side length of the square frame buffer, enough for any orientation
const FB_SIDE: usize = 320;

pub type Shared = Rc<RefCell<Panel>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Select(bool),
    Reset(bool),
    Mode { command: bool },
    Width(FrameWidth),
    Command(u8),
    Data(u8),
    Word(u16),
}

pub struct Panel {
    pub events: Vec<Event>,
    /// Chip select line state
    pub selected: bool,
    /// Release chip select once it has been observed more than this many times
    pub release_select_after: Option<u32>,
    pub select_observations: u32,
    /// Bus never goes idle
    pub stalled: bool,
    /// Report busy for this many polls
    pub busy_for: u32,
    pub busy_polls: u32,
    pub fail_writes: bool,
    /// Every window that received a memory write command
    pub windows: Vec<Window>,

    command_mode: bool,
    current: Option<u8>,
    params: Vec<u8>,
    columns: (u16, u16),
    rows: (u16, u16),
    cursor: (u16, u16),
    frame: Vec<u16>,
}

impl Panel {
    pub fn shared() -> Shared {
        Rc::new(RefCell::new(Panel {
            events: Vec::new(),
            selected: false,
            release_select_after: None,
            select_observations: 0,
            stalled: false,
            busy_for: 0,
            busy_polls: 0,
            fail_writes: false,
            windows: Vec::new(),
            command_mode: false,
            current: None,
            params: Vec::new(),
            columns: (0, 0),
            rows: (0, 0),
            cursor: (0, 0),
            frame: vec![0; FB_SIDE * FB_SIDE],
        }))
    }

    /// Command and parameter bytes as (is_command, byte)
    pub fn bus_bytes(&self) -> Vec<(bool, u8)> {
        self.events
            .iter()
            .filter_map(|event| match *event {
                Event::Command(byte) => Some((true, byte)),
                Event::Data(byte) => Some((false, byte)),
                _ => None,
            })
            .collect()
    }

    pub fn commands(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|event| match *event {
                Event::Command(byte) => Some(byte),
                _ => None,
            })
            .collect()
    }

    pub fn words(&self) -> Vec<u16> {
        self.events
            .iter()
            .filter_map(|event| match *event {
                Event::Word(word) => Some(word),
                _ => None,
            })
            .collect()
    }

    /// Number of transaction brackets opened
    pub fn select_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| **event == Event::Select(true))
            .count()
    }

    pub fn pixel(&self, x: u16, y: u16) -> u16 {
        self.frame[y as usize * FB_SIDE + x as usize]
    }

    fn command(&mut self, byte: u8) {
        self.events.push(Event::Command(byte));
        self.current = Some(byte);
        self.params.clear();
        if byte == cmd::MEMORY_WRITE {
            self.windows.push(Window::new(
                self.columns.0,
                self.rows.0,
                self.columns.1,
                self.rows.1,
            ));
            self.cursor = (self.columns.0, self.rows.0);
        }
    }

    fn data(&mut self, byte: u8) {
        self.events.push(Event::Data(byte));
        self.params.push(byte);
        if let &[s_hi, s_lo, e_hi, e_lo] = self.params.as_slice() {
            let range = (
                u16::from_be_bytes([s_hi, s_lo]),
                u16::from_be_bytes([e_hi, e_lo]),
            );
            match self.current {
                Some(cmd::COLUMN_ADDRESS_SET) => self.columns = range,
                Some(cmd::PAGE_ADDRESS_SET) => self.rows = range,
                _ => {}
            }
        }
    }

    fn word(&mut self, word: u16) {
        self.events.push(Event::Word(word));
        if self.current != Some(cmd::MEMORY_WRITE) {
            return;
        }
        let (x, y) = self.cursor;
        if (x as usize) < FB_SIDE && (y as usize) < FB_SIDE {
            self.frame[y as usize * FB_SIDE + x as usize] = word;
        }
        self.cursor = if x >= self.columns.1 {
            let y = if y >= self.rows.1 { self.rows.0 } else { y + 1 };
            (self.columns.0, y)
        } else {
            (x + 1, y)
        };
    }
}

pub struct MockBus {
    panel: Shared,
}

impl MockBus {
    pub fn new(panel: &Shared) -> Self {
        Self {
            panel: Rc::clone(panel),
        }
    }

    pub fn shares(&self, panel: &Shared) -> bool {
        Rc::ptr_eq(&self.panel, panel)
    }
}

impl SerialBus for MockBus {
    type Error = ();

    fn is_busy(&self) -> bool {
        let mut panel = self.panel.borrow_mut();
        panel.busy_polls += 1;
        panel.stalled || panel.busy_polls <= panel.busy_for
    }

    fn is_tx_ready(&self) -> bool {
        !self.panel.borrow().stalled
    }

    fn set_frame_width(&mut self, width: FrameWidth) -> Result<(), ()> {
        self.panel.borrow_mut().events.push(Event::Width(width));
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), ()> {
        let mut panel = self.panel.borrow_mut();
        if panel.fail_writes {
            return Err(());
        }
        if panel.command_mode {
            panel.command(byte);
        } else {
            panel.data(byte);
        }
        Ok(())
    }

    fn write_word(&mut self, word: u16) -> Result<(), ()> {
        let mut panel = self.panel.borrow_mut();
        if panel.fail_writes {
            return Err(());
        }
        panel.word(word);
        Ok(())
    }
}

pub struct MockLines {
    panel: Shared,
}

impl MockLines {
    pub fn new(panel: &Shared) -> Self {
        Self {
            panel: Rc::clone(panel),
        }
    }

    pub fn shares(&self, panel: &Shared) -> bool {
        Rc::ptr_eq(&self.panel, panel)
    }
}

impl LineControl for MockLines {
    fn reset(&mut self, assert: bool) {
        self.panel.borrow_mut().events.push(Event::Reset(assert));
    }

    fn select(&mut self, assert: bool) {
        let mut panel = self.panel.borrow_mut();
        panel.events.push(Event::Select(assert));
        panel.selected = assert;
    }

    fn mode_select(&mut self, command: bool) {
        let mut panel = self.panel.borrow_mut();
        panel.events.push(Event::Mode { command });
        panel.command_mode = command;
    }

    fn is_selected(&mut self) -> bool {
        let mut panel = self.panel.borrow_mut();
        panel.select_observations += 1;
        if let Some(limit) = panel.release_select_after {
            if panel.select_observations > limit {
                panel.selected = false;
            }
        }
        panel.selected
    }
}

/// Records requested millisecond delays without sleeping
#[derive(Default)]
pub struct MockDelay {
    pub delays_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

/// Driver over a fresh simulated panel
pub fn display(config: DisplayConfig) -> (Ili9341<MockBus, MockLines>, Shared) {
    let panel = Panel::shared();
    let dev = match Ili9341::new(MockBus::new(&panel), MockLines::new(&panel), config) {
        Ok(dev) => dev,
        Err(e) => panic!("mock display rejected config: {e:?}"),
    };
    (dev, panel)
}
