//! SPI master
//!
//! LIS3-style register access only ever shifts a command byte out and then
//! either more bytes out or a burst in, so the bus exposes exactly those two
//! half-duplex operations. Chip select is owned by the driver, not the bus.

/// Half-duplex SPI master
pub trait SpiBus {
    type Error;

    /// Clock `data` out, discarding what comes back
    ///
    /// Returns once the last bit has left the shifter, so the caller may
    /// deassert chip select immediately afterwards.
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Clock `buf.len()` bytes in while driving the data line low
    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// Clock settings for a sensor on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// SCK frequency in Hz
    pub frequency: u32,
    pub mode: Mode,
}

impl Default for SpiConfig {
    /// 8 MHz in mode 3, within the L3GD20's 10 MHz limit
    fn default() -> Self {
        Self {
            frequency: 8_000_000,
            mode: Mode::Mode3,
        }
    }
}

/// Clock polarity and sampling edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Mode0,
    Mode1,
    Mode2,
    Mode3,
}

impl Mode {
    /// CPOL: SCK rests high between transfers
    pub const fn idles_high(self) -> bool {
        matches!(self, Mode::Mode2 | Mode::Mode3)
    }

    /// CPHA: data is sampled on the second SCK edge of each bit
    pub const fn samples_on_second_edge(self) -> bool {
        matches!(self, Mode::Mode1 | Mode::Mode3)
    }
}
