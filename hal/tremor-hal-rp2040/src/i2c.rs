//! I2C bus master for RP2040
//!
//! Wraps any embedded-hal 1.0 blocking I2C master, which embassy-rp's
//! `I2c<'_, _, Blocking>` is.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c as EhI2c};
use tremor_hal::{I2cBus, I2cConfig};

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received
    Nack,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => I2cBusError::Bus,
            ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(_) => I2cBusError::Nack,
            ErrorKind::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

/// Build an embassy-rp I2C config from the shared config
pub fn embassy_config(config: I2cConfig) -> embassy_rp::i2c::Config {
    let mut out = embassy_rp::i2c::Config::default();
    out.frequency = config.frequency;
    out
}

/// I2C bus adapter
pub struct RpI2c<B> {
    bus: B,
}

impl<B: EhI2c> RpI2c<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }
}

impl<B: EhI2c> I2cBus for RpI2c<B> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.bus
            .write(address, data)
            .map_err(|e| I2cBusError::from(e.kind()))
    }

    fn write_read(
        &mut self,
        address: u8,
        command: &[u8],
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.bus
            .write_read(address, command, buf)
            .map_err(|e| I2cBusError::from(e.kind()))
    }
}
