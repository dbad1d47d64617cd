//! SPI bus master for RP2040
//!
//! Wraps any embedded-hal 1.0 blocking SPI bus, which embassy-rp's
//! `Spi<'_, _, Blocking>` is.

use embedded_hal::spi::{Error as _, ErrorKind, SpiBus as EhSpiBus};
use embassy_rp::spi::{Phase, Polarity};
use tremor_hal::{SpiBus, SpiConfig};

/// Error from SPI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiBusError {
    /// Receive overrun
    Overrun,
    /// Mode fault
    ModeFault,
    /// Frame format error
    FrameFormat,
    /// Chip select fault
    ChipSelectFault,
    /// Other error
    Other,
}

impl From<ErrorKind> for SpiBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Overrun => SpiBusError::Overrun,
            ErrorKind::ModeFault => SpiBusError::ModeFault,
            ErrorKind::FrameFormat => SpiBusError::FrameFormat,
            ErrorKind::ChipSelectFault => SpiBusError::ChipSelectFault,
            _ => SpiBusError::Other,
        }
    }
}

/// Build an embassy-rp SPI config from the shared config
pub fn embassy_config(config: SpiConfig) -> embassy_rp::spi::Config {
    let mut out = embassy_rp::spi::Config::default();
    out.frequency = config.frequency;
    out.polarity = if config.mode.idles_high() {
        Polarity::IdleHigh
    } else {
        Polarity::IdleLow
    };
    out.phase = if config.mode.samples_on_second_edge() {
        Phase::CaptureOnSecondTransition
    } else {
        Phase::CaptureOnFirstTransition
    };
    out
}

/// SPI bus adapter
pub struct RpSpi<B> {
    bus: B,
}

impl<B: EhSpiBus> RpSpi<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }
}

impl<B: EhSpiBus> SpiBus for RpSpi<B> {
    type Error = SpiBusError;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.bus
            .write(data)
            .and_then(|()| self.bus.flush())
            .map_err(|e| SpiBusError::from(e.kind()))
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.bus
            .read(buf)
            .map_err(|e| SpiBusError::from(e.kind()))
    }
}
