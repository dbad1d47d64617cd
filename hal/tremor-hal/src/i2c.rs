//! I2C master
//!
//! Register access needs two transactions: a plain write (sub-address then
//! value) and a write of the sub-address followed by a repeated-start read.

/// I2C master addressing 7-bit devices
pub trait I2cBus {
    type Error;

    /// Single write transaction to `address`
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Write `command`, then read into `buf` after a repeated start
    ///
    /// The bus is not released between the two phases, so no other master
    /// can move the device's register pointer in between.
    fn write_read(
        &mut self,
        address: u8,
        command: &[u8],
        buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

/// Bus clock for the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// SCL frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    /// Fast mode (400 kHz), the highest rate the L3GD20 supports
    fn default() -> Self {
        Self { frequency: 400_000 }
    }
}
