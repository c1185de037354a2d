//! Serial bus abstractions
//!
//! The display core streams command bytes, parameter bytes and 16-bit
//! pixel words over a transmit-only synchronous serial bus. Readiness is
//! exposed as two synchronously readable flags so the core can poll them.

use embedded_hal::spi::{ErrorType, SpiBus};

/// Transfer width of one bus frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameWidth {
    /// 8-bit frames (commands and register parameters)
    Bits8,
    /// 16-bit frames (pixel streaming)
    Bits16,
}

/// Transmit-only serial bus master
///
/// Implementations post one frame per call. The core polls `is_busy`
/// before changing framing or chip select, and `is_tx_ready` before each
/// pixel word in a streamed burst.
pub trait SerialBus {
    /// Error type for bus operations
    type Error;

    /// A transfer is still shifting out
    fn is_busy(&self) -> bool;

    /// The transmit buffer can accept another frame
    fn is_tx_ready(&self) -> bool;

    /// Switch the frame width used by subsequent writes
    fn set_frame_width(&mut self, width: FrameWidth) -> Result<(), Self::Error>;

    /// Post one 8-bit frame
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Post one 16-bit frame (most significant byte first on the wire)
    fn write_word(&mut self, word: u16) -> Result<(), Self::Error>;
}

/// `SerialBus` over a blocking `embedded-hal` SPI bus
///
/// Every write blocks until the bus has flushed, so the bus is never
/// observed busy. The word size is chosen per call, which makes the frame
/// width switch a bookkeeping step only.
pub struct BlockingSpi<SPI> {
    spi: SPI,
    width: FrameWidth,
}

impl<SPI> BlockingSpi<SPI>
where
    SPI: SpiBus<u8> + SpiBus<u16>,
{
    /// Wrap an SPI bus configured for mode 0, MSB first
    pub fn new(spi: SPI) -> Self {
        Self {
            spi,
            width: FrameWidth::Bits8,
        }
    }

    /// Frame width selected by the last `set_frame_width`
    pub fn frame_width(&self) -> FrameWidth {
        self.width
    }

    /// Return the wrapped bus
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> SerialBus for BlockingSpi<SPI>
where
    SPI: SpiBus<u8> + SpiBus<u16>,
{
    type Error = <SPI as ErrorType>::Error;

    fn is_busy(&self) -> bool {
        false
    }

    fn is_tx_ready(&self) -> bool {
        true
    }

    fn set_frame_width(&mut self, width: FrameWidth) -> Result<(), Self::Error> {
        self.width = width;
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        SpiBus::<u8>::write(&mut self.spi, &[byte])?;
        SpiBus::<u8>::flush(&mut self.spi)
    }

    fn write_word(&mut self, word: u16) -> Result<(), Self::Error> {
        SpiBus::<u16>::write(&mut self.spi, &[word])?;
        SpiBus::<u16>::flush(&mut self.spi)
    }
}
