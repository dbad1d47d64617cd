//! Register access for ST's LIS3/L3G sensor family
//!
//! The sensors share one register model: 8-bit register addresses, single
//! byte registers, and an auto-increment flag for burst reads. Only the
//! framing differs between SPI and I2C.

pub mod i2c;
pub mod spi;

pub use i2c::{Lis3TransportI2c, L3GD20_ADDRESS_SA0_HIGH, L3GD20_ADDRESS_SA0_LOW};
pub use spi::Lis3TransportSpi;

/// Register-level access to a LIS3-family device
pub trait Lis3Transport {
    /// Bus error
    type Error;

    /// Read consecutive registers starting at `start`
    fn read_registers(&mut self, start: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write one register
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error>;

    /// Read one register
    fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_registers(reg, &mut value)?;
        Ok(value[0])
    }
}
